use rowan::TextRange;
use serde::{Serialize, Serializer, ser::SerializeStruct};

/// Diagnostic kinds, grouped by the construct they belong to.
///
/// Messages use the wording of .NET's `RegexParseException` so editors can show the
/// same text the runtime would throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DiagnosticKind {
    // Lexical
    UnterminatedComment,
    InsufficientHexDigits,
    CaptureNumberOverflow,

    // Sequences and quantifiers
    TooManyCloseParens,
    NotEnoughCloseParens,
    QuantifierFollowingNothing,
    NestedQuantifier,
    IllegalQuantifierRange,

    // Groupings
    UnrecognizedGroupingConstruct,
    InvalidGroupName,
    CaptureNumberZero,
    MalformedCondition,
    ConditionCannotBeComment,
    ConditionCannotCapture,
    TooManyAlternates,

    // Character classes
    UnterminatedSet,
    SubtractionNotLast,
    ReverseRange,
    ClassInRange,

    // Escapes
    IllegalEndEscape,
    UnrecognizedEscape,
    MissingControlCharacter,
    UnrecognizedControlCharacter,
    MalformedNamedBackReference,
    IncompleteCategoryEscape,
    MalformedCategoryEscape,
    UnknownProperty,

    // References, checked against the capture table
    UndefinedGroupNumber,
    UndefinedGroupName,
    UndefinedGroup,
}

impl DiagnosticKind {
    /// Every kind is an error in this dialect.
    pub fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnterminatedComment => "Unterminated (?#...) comment",
            Self::InsufficientHexDigits => "Insufficient hexadecimal digits",
            Self::CaptureNumberOverflow => {
                "Capture group numbers must be less than or equal to Int32.MaxValue"
            }

            Self::TooManyCloseParens => "Too many )'s",
            Self::NotEnoughCloseParens => "Not enough )'s",
            Self::QuantifierFollowingNothing => "Quantifier {x,y} following nothing",
            Self::NestedQuantifier => "Nested quantifier",
            Self::IllegalQuantifierRange => "Illegal {x,y} with x > y",

            Self::UnrecognizedGroupingConstruct => "Unrecognized grouping construct",
            Self::InvalidGroupName => {
                "Invalid group name: Group names must begin with a word character"
            }
            Self::CaptureNumberZero => "Capture number cannot be zero",
            Self::MalformedCondition => "Malformed",
            Self::ConditionCannotBeComment => "Alternation conditions cannot be comments",
            Self::ConditionCannotCapture => {
                "Alternation conditions do not capture and cannot be named"
            }
            Self::TooManyAlternates => "Too many | in (?()|)",

            Self::UnterminatedSet => "Unterminated [] set",
            Self::SubtractionNotLast => {
                "A subtraction must be the last element in a character class"
            }
            Self::ReverseRange => "[x-y] range in reverse order",
            Self::ClassInRange => "Cannot include class in character range",

            Self::IllegalEndEscape => "Illegal \\\\ at end of pattern",
            Self::UnrecognizedEscape => "Unrecognized escape sequence",
            Self::MissingControlCharacter => "Missing control character",
            Self::UnrecognizedControlCharacter => "Unrecognized control character",
            Self::MalformedNamedBackReference => "Malformed \\k<...> named back reference",
            Self::IncompleteCategoryEscape => "Incomplete \\p{X} character escape",
            Self::MalformedCategoryEscape => "Malformed \\p{X} character escape",
            Self::UnknownProperty => "Unknown property",

            Self::UndefinedGroupNumber => "Reference to undefined group number",
            Self::UndefinedGroupName => "Reference to undefined group name",
            Self::UndefinedGroup => "Reference to undefined group",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::ClassInRange => "Cannot include class \\{} in character range".to_string(),
            Self::UnrecognizedEscape => "Unrecognized escape sequence \\{}".to_string(),
            Self::UnknownProperty => "Unknown property '{}'".to_string(),

            // Standard pattern: fallback + detail
            _ => format!("{} {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One positioned problem in a pattern. The range is in source coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Diagnostic {
    pub(crate) kind: DiagnosticKind,
    #[serde(serialize_with = "serialize_range")]
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl Diagnostic {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            message: message.into(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub(crate) fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity(),
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )
    }
}

/// Serializes a range as `{ "start": .., "end": .. }`.
pub(crate) fn serialize_range<S: Serializer>(
    range: &TextRange,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct("TextRange", 2)?;
    state.serialize_field("start", &u32::from(range.start()))?;
    state.serialize_field("end", &u32::from(range.end()))?;
    state.end()
}
