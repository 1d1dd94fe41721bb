//! The parse result: a lossless CST plus diagnostics and the capture table.

use rowan::GreenNode;

use crate::captures::CaptureTable;
use crate::chars::VirtualCharSequence;
use crate::diagnostics::Diagnostics;
use crate::options::RegexOptions;
use crate::parser::{CompilationUnit, RegexParser, SyntaxNode};
use crate::printer::TreePrinter;

#[derive(Debug, Clone)]
pub struct RegexTree {
    text: VirtualCharSequence,
    options: RegexOptions,
    green: GreenNode,
    diagnostics: Diagnostics,
    captures: CaptureTable,
}

impl RegexTree {
    pub(crate) fn new(
        text: VirtualCharSequence,
        options: RegexOptions,
        green: GreenNode,
        diagnostics: Diagnostics,
        captures: CaptureTable,
    ) -> Self {
        Self {
            text,
            options,
            green,
            diagnostics,
            captures,
        }
    }

    /// Parses `text` with the default recursion limit.
    ///
    /// Returns `None` when there is no input, or when the pattern nests too deeply to
    /// analyze. Every other problem is reported through [`RegexTree::diagnostics`].
    pub fn parse(text: Option<&VirtualCharSequence>, options: RegexOptions) -> Option<Self> {
        RegexParser::new(text?).options(options).parse().ok()
    }

    /// Parses a plain string, with each char's span being its own byte range.
    pub fn parse_str(pattern: &str, options: RegexOptions) -> Option<Self> {
        Self::parse(Some(&VirtualCharSequence::from(pattern)), options)
    }

    pub fn text(&self) -> &VirtualCharSequence {
        &self.text
    }

    pub fn options(&self) -> RegexOptions {
        self.options
    }

    /// Creates a typed view over the immutable green tree.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn root(&self) -> CompilationUnit {
        CompilationUnit::cast(self.syntax()).expect("parser always produces CompilationUnit")
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn captures(&self) -> &CaptureTable {
        &self.captures
    }

    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    pub fn printer(&self) -> TreePrinter<'_> {
        TreePrinter::new(self)
    }
}
