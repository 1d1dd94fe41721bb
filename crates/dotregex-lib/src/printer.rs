//! Text dumps of a [`RegexTree`]: the CST and the capture table.

use std::fmt::Write;

use rowan::{NodeOrToken, TextRange};

use crate::parser::SyntaxNode;
use crate::tree::RegexTree;

pub struct TreePrinter<'t> {
    tree: &'t RegexTree,
    trivia: bool,
    spans: bool,
    captures: bool,
}

impl<'t> TreePrinter<'t> {
    pub fn new(tree: &'t RegexTree) -> Self {
        Self {
            tree,
            trivia: false,
            spans: false,
            captures: false,
        }
    }

    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    /// Appends source ranges. Tree ranges are mapped back through the input's char spans.
    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    /// Prints the capture table instead of the tree.
    pub fn only_captures(mut self, value: bool) -> Self {
        self.captures = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        if self.captures {
            self.format_captures(w)
        } else {
            self.format_cst(&self.tree.syntax(), 0, w)
        }
    }

    fn format_cst(&self, node: &SyntaxNode, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let span = self.span_str(node.text_range());
        writeln!(w, "{}{:?}{}", prefix, node.kind(), span)?;

        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Node(n) => self.format_cst(&n, indent + 1, w)?,
                NodeOrToken::Token(t) => {
                    if self.trivia || !t.kind().is_trivia() {
                        let child_prefix = "  ".repeat(indent + 1);
                        let child_span = self.span_str(t.text_range());
                        writeln!(
                            w,
                            "{}{:?}{} {:?}",
                            child_prefix,
                            t.kind(),
                            child_span,
                            t.text()
                        )?;
                    }
                }
            }
        }
        Ok(())
    }

    /// One `key start..end "text"` line per number, then per name.
    fn format_captures(&self, w: &mut impl Write) -> std::fmt::Result {
        let captures = self.tree.captures();
        for (number, span) in captures.numbers() {
            self.format_capture(&number.to_string(), *span, w)?;
        }
        for (name, span) in captures.names() {
            self.format_capture(name, *span, w)?;
        }
        Ok(())
    }

    fn format_capture(&self, key: &str, span: TextRange, w: &mut impl Write) -> std::fmt::Result {
        let text: String = self
            .tree
            .text()
            .iter()
            .filter(|vc| span.contains_range(vc.span))
            .map(|vc| vc.ch)
            .collect();
        writeln!(
            w,
            "{} {}..{} {:?}",
            key,
            u32::from(span.start()),
            u32::from(span.end()),
            text
        )
    }

    fn span_str(&self, range: TextRange) -> String {
        if !self.spans {
            return String::new();
        }
        let range = self.tree.text().source_range(range);
        format!(
            " [{}..{}]",
            u32::from(range.start()),
            u32::from(range.end())
        )
    }
}
