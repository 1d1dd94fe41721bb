//! Parser infrastructure for .NET regular expressions.
//!
//! # Architecture
//!
//! The parser produces a lossless concrete syntax tree (CST) as a Rowan green tree.
//!
//! - Pull-based lexing: the grammar asks the lexer for the next token, or for a
//!   specialised run (number, capture name, option letters), and rewinds freely
//! - Trivia attaches as leading trivia, and only where the grammar allows it
//! - Recursive descent builds an owned element tree that is lowered to the green tree
//!   in one pass, collecting diagnostics in tree order
//!
//! # Two passes
//!
//! .NET patterns may reference groups defined later (`\2(a)(b)`). The first pass runs with
//! an empty capture table; the capture analyzer walks its tree; the second pass reparses with
//! the full table, which decides reference shapes and "undefined group" diagnostics.
//!
//! # Recovery Strategy
//!
//! The parser is resilient: it always produces a tree. Missing delimiters become zero-length
//! tokens and constructs that cannot be parsed degrade to text.
//!
//! However, fuel exhaustion (exec_fuel, recursion_fuel) returns an actual error immediately.

pub mod ast;
pub mod cst;

mod categories;
mod core;
mod element;
mod grammar;
mod invariants;
mod lexer;

pub(crate) use lexer::parse_number;


pub use cst::{SyntaxKind, SyntaxNode, SyntaxToken};

pub use ast::{
    Alternation, Anchor, AnchorEscape, BackreferenceEscape, BalancingGrouping, CaptureEscape,
    CaptureGrouping, CategoryEscape, CharacterClass, CharacterClassEscape, CharacterClassRange,
    CharacterClassSubtraction, CompilationUnit, ConditionalCaptureGrouping,
    ConditionalExpressionGrouping, ControlEscape, Escape, Expr, Grouping, HexEscape,
    KCaptureEscape, LazyQuantifier, OctalEscape, OptionsGrouping, PosixProperty, Quantifier,
    Sequence, SimpleEscape, Text, Wildcard,
};

use rowan::GreenNode;

use self::core::Parser;
use crate::captures::CaptureTable;
use crate::chars::VirtualCharSequence;
use crate::options::RegexOptions;
use crate::tree::RegexTree;
use crate::{Error, PassResult};

/// Default nesting limit for alternations, groups and class subtractions.
pub const DEFAULT_RECURSION_LIMIT: u32 = 100;

/// Configures and runs a parse.
///
/// ```
/// use dotregex_lib::{Error, RegexOptions, RegexParser, VirtualCharSequence};
///
/// let chars = VirtualCharSequence::from("((a))");
/// let tree = RegexParser::new(&chars)
///     .options(RegexOptions::IGNORE_CASE)
///     .parse()
///     .unwrap();
/// assert_eq!(tree.captures().len(), 3);
///
/// let err = RegexParser::new(&chars).recursion_limit(Some(1)).parse();
/// assert_eq!(err.unwrap_err(), Error::RecursionLimitExceeded);
/// ```
#[derive(Debug, Clone)]
pub struct RegexParser<'t> {
    text: &'t VirtualCharSequence,
    options: RegexOptions,
    recursion_limit: Option<u32>,
    exec_fuel: Option<u32>,
}

impl<'t> RegexParser<'t> {
    pub fn new(text: &'t VirtualCharSequence) -> Self {
        Self {
            text,
            options: RegexOptions::NONE,
            recursion_limit: Some(DEFAULT_RECURSION_LIMIT),
            exec_fuel: None,
        }
    }

    pub fn options(mut self, options: RegexOptions) -> Self {
        self.options = options;
        self
    }

    /// `None` disables the guard.
    pub fn recursion_limit(mut self, limit: Option<u32>) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Maximum number of tokens consumed per pass. Off by default.
    pub fn exec_fuel(mut self, fuel: Option<u32>) -> Self {
        self.exec_fuel = fuel;
        self
    }

    pub fn parse(self) -> Result<RegexTree, Error> {
        let (first, _) = self.run(&CaptureTable::default())?;
        let captures = CaptureTable::analyze(&SyntaxNode::new_root(first), self.text, self.options);

        let (green, diagnostics) = self.run(&captures)?;
        Ok(RegexTree::new(
            self.text.clone(),
            self.options,
            green,
            diagnostics,
            captures,
        ))
    }

    fn run(&self, captures: &CaptureTable) -> PassResult<GreenNode> {
        let root = Parser::new(self.text, self.options, captures)
            .with_recursion_fuel(self.recursion_limit)
            .with_exec_fuel(self.exec_fuel)
            .parse()?;
        Ok(element::lower(&root, self.text))
    }
}
