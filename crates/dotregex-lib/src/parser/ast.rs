//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Cast is infallible for correct `SyntaxKind` - validation happens elsewhere.
//! Accessors return `None` for a missing token only when the token is absent from the
//! tree; a zero-length placeholder token is still returned.

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $($kind:ident)|+) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                matches!(node.kind(), $(SyntaxKind::$kind)|+).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(CompilationUnit, CompilationUnit);
ast_node!(Sequence, Sequence);
ast_node!(Alternation, Alternation);
ast_node!(Text, Text);
ast_node!(Wildcard, Wildcard);
ast_node!(Anchor, StartAnchor | EndAnchor);
ast_node!(
    Grouping,
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
);
ast_node!(CaptureGrouping, CaptureGrouping);
ast_node!(BalancingGrouping, BalancingGrouping);
ast_node!(OptionsGrouping, SimpleOptionsGrouping | NestedOptionsGrouping);
ast_node!(ConditionalCaptureGrouping, ConditionalCaptureGrouping);
ast_node!(ConditionalExpressionGrouping, ConditionalExpressionGrouping);
ast_node!(
    Quantifier,
    ZeroOrMoreQuantifier
        | OneOrMoreQuantifier
        | ZeroOrOneQuantifier
        | ExactNumericQuantifier
        | OpenRangeNumericQuantifier
        | ClosedRangeNumericQuantifier
);
ast_node!(LazyQuantifier, LazyQuantifier);
ast_node!(CharacterClass, CharacterClass | NegatedCharacterClass);
ast_node!(CharacterClassRange, CharacterClassRange);
ast_node!(CharacterClassSubtraction, CharacterClassSubtraction);
ast_node!(PosixProperty, PosixProperty);
ast_node!(
    Escape,
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
);
ast_node!(SimpleEscape, SimpleEscape);
ast_node!(AnchorEscape, AnchorEscape);
ast_node!(CharacterClassEscape, CharacterClassEscape);
ast_node!(CategoryEscape, CategoryEscape);
ast_node!(ControlEscape, ControlEscape);
ast_node!(HexEscape, HexEscape | UnicodeEscape);
ast_node!(OctalEscape, OctalEscape);
ast_node!(BackreferenceEscape, BackreferenceEscape);
ast_node!(CaptureEscape, CaptureEscape);
ast_node!(KCaptureEscape, KCaptureEscape);

/// Expression: anything that can appear in a sequence or class body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Sequence(Sequence),
    Alternation(Alternation),
    Text(Text),
    Wildcard(Wildcard),
    Anchor(Anchor),
    Grouping(Grouping),
    Quantifier(Quantifier),
    LazyQuantifier(LazyQuantifier),
    CharacterClass(CharacterClass),
    CharacterClassRange(CharacterClassRange),
    CharacterClassSubtraction(CharacterClassSubtraction),
    PosixProperty(PosixProperty),
    Escape(Escape),
}

impl Expr {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        let kind = node.kind();
        match kind {
            SyntaxKind::Sequence => Sequence::cast(node).map(Expr::Sequence),
            SyntaxKind::Alternation => Alternation::cast(node).map(Expr::Alternation),
            SyntaxKind::Text => Text::cast(node).map(Expr::Text),
            SyntaxKind::Wildcard => Wildcard::cast(node).map(Expr::Wildcard),
            SyntaxKind::StartAnchor | SyntaxKind::EndAnchor => Anchor::cast(node).map(Expr::Anchor),
            SyntaxKind::LazyQuantifier => LazyQuantifier::cast(node).map(Expr::LazyQuantifier),
            SyntaxKind::CharacterClass | SyntaxKind::NegatedCharacterClass => {
                CharacterClass::cast(node).map(Expr::CharacterClass)
            }
            SyntaxKind::CharacterClassRange => {
                CharacterClassRange::cast(node).map(Expr::CharacterClassRange)
            }
            SyntaxKind::CharacterClassSubtraction => {
                CharacterClassSubtraction::cast(node).map(Expr::CharacterClassSubtraction)
            }
            SyntaxKind::PosixProperty => PosixProperty::cast(node).map(Expr::PosixProperty),
            _ if kind.is_grouping() => Grouping::cast(node).map(Expr::Grouping),
            _ if kind.is_quantifier() => Quantifier::cast(node).map(Expr::Quantifier),
            _ if kind.is_escape() => Escape::cast(node).map(Expr::Escape),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Expr::Sequence(n) => n.as_cst(),
            Expr::Alternation(n) => n.as_cst(),
            Expr::Text(n) => n.as_cst(),
            Expr::Wildcard(n) => n.as_cst(),
            Expr::Anchor(n) => n.as_cst(),
            Expr::Grouping(n) => n.as_cst(),
            Expr::Quantifier(n) => n.as_cst(),
            Expr::LazyQuantifier(n) => n.as_cst(),
            Expr::CharacterClass(n) => n.as_cst(),
            Expr::CharacterClassRange(n) => n.as_cst(),
            Expr::CharacterClassSubtraction(n) => n.as_cst(),
            Expr::PosixProperty(n) => n.as_cst(),
            Expr::Escape(n) => n.as_cst(),
        }
    }
}

fn tokens(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> + '_ {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .filter(|t| !t.kind().is_trivia())
}

fn token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    tokens(node).find(|t| t.kind() == kind)
}

fn capture_tokens(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> + '_ {
    tokens(node).filter(|t| matches!(t.kind(), SyntaxKind::NumberToken | SyntaxKind::CaptureNameToken))
}

fn exprs(node: &SyntaxNode) -> impl Iterator<Item = Expr> + '_ {
    node.children().filter_map(Expr::cast)
}

impl CompilationUnit {
    pub fn expression(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn end_of_file(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::EndOfFile)
    }
}

impl Sequence {
    pub fn children(&self) -> impl Iterator<Item = Expr> + '_ {
        exprs(&self.0)
    }
}

impl Alternation {
    pub fn left(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn bar(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Bar)
    }

    pub fn right(&self) -> Option<Expr> {
        exprs(&self.0).nth(1)
    }

    /// Branches left to right, flattening the left-nested chain.
    pub fn branches(&self) -> Vec<Expr> {
        let mut branches = Vec::new();
        let mut current = self.clone();
        loop {
            if let Some(right) = current.right() {
                branches.push(right);
            }
            match current.left() {
                Some(Expr::Alternation(left)) => current = left,
                Some(left) => {
                    branches.push(left);
                    break;
                }
                None => break,
            }
        }
        branches.reverse();
        branches
    }
}

impl Text {
    pub fn token(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::TextToken)
    }
}

impl Anchor {
    pub fn is_start(&self) -> bool {
        self.0.kind() == SyntaxKind::StartAnchor
    }
}

impl Grouping {
    pub fn kind(&self) -> SyntaxKind {
        self.0.kind()
    }

    pub fn open_paren(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::OpenParen)
    }

    /// The grouping's own `)`, possibly zero-length when missing.
    pub fn close_paren(&self) -> Option<SyntaxToken> {
        tokens(&self.0)
            .filter(|t| t.kind() == SyntaxKind::CloseParen)
            .last()
    }

    /// The body. Simple options groupings have none.
    pub fn body(&self) -> Option<Expr> {
        exprs(&self.0).last()
    }
}

impl CaptureGrouping {
    /// Name or number token.
    pub fn capture(&self) -> Option<SyntaxToken> {
        capture_tokens(&self.0).next()
    }

    pub fn body(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl BalancingGrouping {
    /// The group being defined; absent in `(?<-name>...)`.
    pub fn capture(&self) -> Option<SyntaxToken> {
        tokens(&self.0)
            .take_while(|t| t.kind() != SyntaxKind::Minus)
            .find(|t| matches!(t.kind(), SyntaxKind::NumberToken | SyntaxKind::CaptureNameToken))
            .filter(|t| !t.text().is_empty())
    }

    /// The group being popped.
    pub fn balanced(&self) -> Option<SyntaxToken> {
        tokens(&self.0)
            .skip_while(|t| t.kind() != SyntaxKind::Minus)
            .find(|t| matches!(t.kind(), SyntaxKind::NumberToken | SyntaxKind::CaptureNameToken))
    }

    pub fn body(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl OptionsGrouping {
    pub fn options(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::OptionsToken)
    }

    /// Whether the options are scoped to a body (`(?i:...)`).
    pub fn is_nested(&self) -> bool {
        self.0.kind() == SyntaxKind::NestedOptionsGrouping
    }

    pub fn body(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl ConditionalCaptureGrouping {
    pub fn capture(&self) -> Option<SyntaxToken> {
        capture_tokens(&self.0).next()
    }

    pub fn result(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl ConditionalExpressionGrouping {
    pub fn condition(&self) -> Option<Grouping> {
        self.0.children().find_map(Grouping::cast)
    }

    pub fn result(&self) -> Option<Expr> {
        exprs(&self.0).nth(1)
    }
}

impl Quantifier {
    pub fn expression(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    /// Lower and upper bounds; `None` upper means unbounded.
    pub fn bounds(&self) -> (u32, Option<u32>) {
        let mut numbers = tokens(&self.0)
            .filter(|t| t.kind() == SyntaxKind::NumberToken)
            .map(|t| t.text().parse::<u32>().unwrap_or(u32::MAX));
        match self.0.kind() {
            SyntaxKind::ZeroOrMoreQuantifier => (0, None),
            SyntaxKind::OneOrMoreQuantifier => (1, None),
            SyntaxKind::ZeroOrOneQuantifier => (0, Some(1)),
            SyntaxKind::ExactNumericQuantifier => {
                let n = numbers.next().unwrap_or_default();
                (n, Some(n))
            }
            SyntaxKind::OpenRangeNumericQuantifier => (numbers.next().unwrap_or_default(), None),
            _ => {
                let low = numbers.next().unwrap_or_default();
                (low, numbers.next())
            }
        }
    }
}

impl LazyQuantifier {
    pub fn quantifier(&self) -> Option<Quantifier> {
        self.0.children().find_map(Quantifier::cast)
    }

    pub fn question(&self) -> Option<SyntaxToken> {
        tokens(&self.0).last()
    }
}

impl CharacterClass {
    pub fn is_negated(&self) -> bool {
        self.0.kind() == SyntaxKind::NegatedCharacterClass
    }

    pub fn components(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0
            .children()
            .find_map(Sequence::cast)
            .into_iter()
            .flat_map(|seq| seq.0.children().filter_map(Expr::cast).collect::<Vec<_>>())
    }

    pub fn close_bracket(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::CloseBracket)
    }
}

impl CharacterClassRange {
    pub fn left(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn minus(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Minus)
    }

    pub fn right(&self) -> Option<Expr> {
        exprs(&self.0).nth(1)
    }
}

impl CharacterClassSubtraction {
    pub fn minus(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Minus)
    }

    pub fn class(&self) -> Option<CharacterClass> {
        self.0.children().find_map(CharacterClass::cast)
    }
}

impl PosixProperty {
    pub fn token(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::TextToken)
    }
}

impl Escape {
    pub fn kind(&self) -> SyntaxKind {
        self.0.kind()
    }

    pub fn backslash(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Backslash)
    }
}

impl SimpleEscape {
    /// The escaped character; zero-length after a trailing `\`.
    pub fn escaped(&self) -> Option<SyntaxToken> {
        tokens(&self.0).nth(1)
    }
}

impl AnchorEscape {
    pub fn letter(&self) -> Option<SyntaxToken> {
        tokens(&self.0).nth(1)
    }
}

impl CharacterClassEscape {
    pub fn letter(&self) -> Option<SyntaxToken> {
        tokens(&self.0).nth(1)
    }

    pub fn is_negated(&self) -> bool {
        self.letter()
            .is_some_and(|t| t.text().starts_with(|ch: char| ch.is_ascii_uppercase()))
    }
}

impl CategoryEscape {
    pub fn category(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::EscapeCategoryToken)
    }

    /// `\P{...}`
    pub fn is_negated(&self) -> bool {
        tokens(&self.0).nth(1).is_some_and(|t| t.text() == "P")
    }
}

impl ControlEscape {
    pub fn control(&self) -> Option<SyntaxToken> {
        tokens(&self.0).nth(2)
    }
}

impl HexEscape {
    pub fn digits(&self) -> Option<SyntaxToken> {
        tokens(&self.0).nth(2)
    }
}

impl OctalEscape {
    pub fn digits(&self) -> Option<SyntaxToken> {
        tokens(&self.0).nth(1)
    }
}

impl BackreferenceEscape {
    pub fn number(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::NumberToken)
    }
}

impl CaptureEscape {
    pub fn capture(&self) -> Option<SyntaxToken> {
        capture_tokens(&self.0).next()
    }
}

impl KCaptureEscape {
    pub fn capture(&self) -> Option<SyntaxToken> {
        capture_tokens(&self.0).next()
    }
}
