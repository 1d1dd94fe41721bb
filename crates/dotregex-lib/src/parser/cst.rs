//! Syntax kinds for .NET regular expressions.
//!
//! `SyntaxKind` serves dual roles: token kinds (from the lexer) and node kinds (from the parser).
//! Logos derives recognition of the single-character punctuation; every other character
//! lexes as `TextToken`. `RegexLang` implements Rowan's `Language` trait for tree construction.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then trivia, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("|")]
    Bar = 0,

    #[token("*")]
    Asterisk,

    #[token("+")]
    Plus,

    #[token("?")]
    Question,

    #[token("{")]
    OpenBrace,

    #[token("}")]
    CloseBrace,

    #[token("\\")]
    Backslash,

    #[token("[")]
    OpenBracket,

    #[token("]")]
    CloseBracket,

    #[token(".")]
    Dot,

    #[token("^")]
    Caret,

    #[token("$")]
    Dollar,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token(",")]
    Comma,

    #[token(":")]
    Colon,

    #[token("=")]
    Equals,

    #[token("!")]
    Exclamation,

    #[token("<")]
    LessThan,

    #[token(">")]
    GreaterThan,

    #[token("-")]
    Minus,

    #[token("'")]
    SingleQuote,

    /// Any character with no punctuation role, and punctuation demoted to text.
    TextToken,
    /// Digits of a capture number, quantifier bound or backreference.
    NumberToken,
    /// Word characters naming a capture.
    CaptureNameToken,
    /// Inline option letters such as `i-x`.
    OptionsToken,
    /// Name inside `\p{...}`.
    EscapeCategoryToken,
    EndOfFile,

    // --- Trivia ---
    WhitespaceTrivia,
    CommentTrivia,

    // --- Node kinds (non-terminals) ---
    CompilationUnit,
    Sequence,
    Alternation,
    Text,
    Wildcard,
    StartAnchor,
    EndAnchor,

    SimpleGrouping,
    NonCapturingGrouping,
    CaptureGrouping,
    BalancingGrouping,
    NonBacktrackingGrouping,
    PositiveLookaheadGrouping,
    NegativeLookaheadGrouping,
    PositiveLookbehindGrouping,
    NegativeLookbehindGrouping,
    SimpleOptionsGrouping,
    NestedOptionsGrouping,
    ConditionalCaptureGrouping,
    ConditionalExpressionGrouping,

    ZeroOrMoreQuantifier,
    OneOrMoreQuantifier,
    ZeroOrOneQuantifier,
    ExactNumericQuantifier,
    OpenRangeNumericQuantifier,
    ClosedRangeNumericQuantifier,
    LazyQuantifier,

    CharacterClass,
    NegatedCharacterClass,
    CharacterClassRange,
    CharacterClassSubtraction,
    PosixProperty,

    SimpleEscape,
    AnchorEscape,
    CharacterClassEscape,
    CategoryEscape,
    ControlEscape,
    HexEscape,
    UnicodeEscape,
    OctalEscape,
    BackreferenceEscape,
    CaptureEscape,
    KCaptureEscape,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, WhitespaceTrivia | CommentTrivia)
    }

    #[inline]
    pub fn is_token(self) -> bool {
        (self as u16) <= (CommentTrivia as u16)
    }

    #[inline]
    pub fn is_node(self) -> bool {
        !self.is_token() && self != __LAST
    }

    /// The six quantifier shapes, excluding the lazy wrapper.
    #[inline]
    pub fn is_quantifier(self) -> bool {
        matches!(
            self,
            ZeroOrMoreQuantifier
                | OneOrMoreQuantifier
                | ZeroOrOneQuantifier
                | ExactNumericQuantifier
                | OpenRangeNumericQuantifier
                | ClosedRangeNumericQuantifier
        )
    }

    /// Groupings that own a parenthesized body.
    #[inline]
    pub fn is_grouping(self) -> bool {
        matches!(
            self,
            SimpleGrouping
                | NonCapturingGrouping
                | CaptureGrouping
                | BalancingGrouping
                | NonBacktrackingGrouping
                | PositiveLookaheadGrouping
                | NegativeLookaheadGrouping
                | PositiveLookbehindGrouping
                | NegativeLookbehindGrouping
                | SimpleOptionsGrouping
                | NestedOptionsGrouping
                | ConditionalCaptureGrouping
                | ConditionalExpressionGrouping
        )
    }

    #[inline]
    pub fn is_escape(self) -> bool {
        matches!(
            self,
            SimpleEscape
                | AnchorEscape
                | CharacterClassEscape
                | CategoryEscape
                | ControlEscape
                | HexEscape
                | UnicodeEscape
                | OctalEscape
                | BackreferenceEscape
                | CaptureEscape
                | KCaptureEscape
        )
    }

    /// Classifies a single character: its punctuation kind, or `TextToken`.
    pub fn of_char(ch: char) -> SyntaxKind {
        let mut buf = [0u8; 4];
        let mut lexer = SyntaxKind::lexer(ch.encode_utf8(&mut buf));
        match lexer.next() {
            Some(Ok(kind)) => kind,
            _ => TextToken,
        }
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegexLang {}

impl Language for RegexLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<RegexLang>;
pub type SyntaxToken = rowan::SyntaxToken<RegexLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 64-bit bitset of token `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Creates an empty token set.
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..64u16 {
            if self.0 & (1 << i) != 0 && i < __LAST as u16 {
                let kind: SyntaxKind = RegexLang::kind_from_raw(rowan::SyntaxKind(i));
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Quantifier characters that may follow an atom.
pub const QUANTIFIERS: TokenSet = TokenSet::new(&[Asterisk, Plus, Question]);

/// Characters that end a sequence regardless of context.
pub const SEQUENCE_END: TokenSet = TokenSet::new(&[Bar, EndOfFile]);
