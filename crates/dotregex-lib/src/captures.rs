//! Capture groups: numbering, names and their spans.
//!
//! The table is built from a first-pass tree and then handed to the second pass, which
//! needs it to tell `\12` (a back-reference) from `\12` (an octal escape) and to report
//! references to groups that do not exist.
//!
//! Numbering follows the .NET rules:
//!
//! - `0` is the whole pattern.
//! - Plain `( ... )` groups get `1, 2, ...` in order of their opening paren, unless
//!   explicit capture (`n`) is in effect. `(?)` and other unrecognised `(?` forms do not count.
//! - `(?<N>...)` records `N` as written.
//! - Named groups then take the lowest numbers still free, in order of first appearance.
//!
//! Duplicates keep their first span.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use rowan::{TextRange, TextSize};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::chars::VirtualCharSequence;
use crate::diagnostics::serialize_range;
use crate::options::RegexOptions;
use crate::parser::{SyntaxKind, SyntaxNode, SyntaxToken, parse_number};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureTable {
    numbers: BTreeMap<i32, TextRange>,
    names: IndexMap<String, TextRange>,
}

impl CaptureTable {
    /// Collects the captures of a first-pass tree.
    pub(crate) fn analyze(
        root: &SyntaxNode,
        text: &VirtualCharSequence,
        options: RegexOptions,
    ) -> Self {
        let mut analyzer = CaptureAnalyzer {
            text,
            auto_number: 1,
            table: CaptureTable::default(),
        };

        analyzer
            .table
            .numbers
            .insert(0, text.source_span(0, text.len()));
        analyzer.walk(root, options);
        analyzer.assign_numbers_to_names();
        analyzer.table
    }

    /// Every group number, sorted, with the span of the group that defines it.
    pub fn numbers(&self) -> &BTreeMap<i32, TextRange> {
        &self.numbers
    }

    /// Every group name in order of first appearance.
    pub fn names(&self) -> &IndexMap<String, TextRange> {
        &self.names
    }

    pub fn number_span(&self, number: i32) -> Option<TextRange> {
        self.numbers.get(&number).copied()
    }

    pub fn name_span(&self, name: &str) -> Option<TextRange> {
        self.names.get(name).copied()
    }

    pub fn has_number(&self, number: i32) -> bool {
        self.numbers.contains_key(&number)
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Number of distinct group numbers, including `0`.
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

#[derive(Serialize)]
struct NumberEntry {
    number: i32,
    #[serde(serialize_with = "serialize_range")]
    span: TextRange,
}

#[derive(Serialize)]
struct NameEntry<'a> {
    name: &'a str,
    #[serde(serialize_with = "serialize_range")]
    span: TextRange,
}

impl Serialize for CaptureTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let numbers: Vec<NumberEntry> = self
            .numbers
            .iter()
            .map(|(&number, &span)| NumberEntry { number, span })
            .collect();
        let names: Vec<NameEntry<'_>> = self
            .names
            .iter()
            .map(|(name, &span)| NameEntry { name, span })
            .collect();

        let mut state = serializer.serialize_struct("CaptureTable", 2)?;
        state.serialize_field("numbers", &numbers)?;
        state.serialize_field("names", &names)?;
        state.end()
    }
}

struct CaptureAnalyzer<'t> {
    text: &'t VirtualCharSequence,
    auto_number: i32,
    table: CaptureTable,
}

impl CaptureAnalyzer<'_> {
    /// Returns the options in effect after `node`, which differ from `options` only
    /// past a `(?imnsx)` group.
    fn walk(&mut self, node: &SyntaxNode, options: RegexOptions) -> RegexOptions {
        match node.kind() {
            SyntaxKind::SimpleOptionsGrouping => {
                return match child_token(node, SyntaxKind::OptionsToken) {
                    Some(toggles) => options.apply_toggles(toggles.text()),
                    None => options,
                };
            }
            SyntaxKind::NestedOptionsGrouping => {
                let scoped = match child_token(node, SyntaxKind::OptionsToken) {
                    Some(toggles) => options.apply_toggles(toggles.text()),
                    None => options,
                };
                self.walk_children(node, scoped);
            }
            SyntaxKind::SimpleGrouping => {
                if !options.contains(RegexOptions::EXPLICIT_CAPTURE) && !is_bogus_group(node) {
                    let span = self.group_span(node);
                    self.table.numbers.entry(self.auto_number).or_insert(span);
                    self.auto_number += 1;
                }
                self.walk_children(node, options);
            }
            SyntaxKind::CaptureGrouping | SyntaxKind::BalancingGrouping => {
                if let Some(capture) = defined_capture(node) {
                    self.record(&capture, self.group_span(node));
                }
                self.walk_children(node, options);
            }
            SyntaxKind::ConditionalExpressionGrouping => {
                // The condition group never captures itself.
                for child in node.children() {
                    if child.kind().is_grouping() {
                        self.walk_children(&child, options);
                    } else {
                        self.walk(&child, options);
                    }
                }
            }
            SyntaxKind::CompilationUnit | SyntaxKind::Sequence | SyntaxKind::Alternation => {
                return self.walk_children(node, options);
            }
            _ => {
                self.walk_children(node, options);
            }
        }
        options
    }

    fn walk_children(&mut self, node: &SyntaxNode, mut options: RegexOptions) -> RegexOptions {
        for child in node.children() {
            options = self.walk(&child, options);
        }
        options
    }

    fn record(&mut self, capture: &SyntaxToken, span: TextRange) {
        if capture.kind() == SyntaxKind::NumberToken {
            self.table
                .numbers
                .entry(parse_number(capture.text()))
                .or_insert(span);
        } else {
            self.table
                .names
                .entry(capture.text().to_string())
                .or_insert(span);
        }
    }

    fn assign_numbers_to_names(&mut self) {
        for span in self.table.names.values() {
            while self.table.numbers.contains_key(&self.auto_number) {
                self.auto_number += 1;
            }
            self.table.numbers.insert(self.auto_number, *span);
            self.auto_number += 1;
        }
    }

    /// From the group's `(` to its end, in source coordinates.
    fn group_span(&self, node: &SyntaxNode) -> TextRange {
        let end = node.text_range().end();
        let start = child_token(node, SyntaxKind::OpenParen)
            .map_or(node.text_range().start(), |paren| paren.text_range().start());
        self.text
            .source_range(TextRange::new(start, end.max(start)))
    }
}

fn child_token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| t.kind() == kind)
}

/// `(?)` and unrecognised `(?x` forms parse as plain groups whose body opens with
/// a bare `?` text atom; those do not capture. `(??x)` quantifies that `?` and does.
fn is_bogus_group(node: &SyntaxNode) -> bool {
    let mut body = node.first_child();
    while let Some(alternation) = body.take_if(|n| n.kind() == SyntaxKind::Alternation) {
        body = alternation.first_child();
    }

    body.and_then(|sequence| sequence.first_child())
        .filter(|first| first.kind() == SyntaxKind::Text)
        .and_then(|text| child_token(&text, SyntaxKind::TextToken))
        .is_some_and(|token| token.text().starts_with('?'))
}

/// The name or number a capture or balancing group defines, if written.
fn defined_capture(node: &SyntaxNode) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .take_while(|t| t.kind() != SyntaxKind::Minus)
        .find(|t| matches!(t.kind(), SyntaxKind::NumberToken | SyntaxKind::CaptureNameToken))
        .filter(|t| t.text_range().len() > TextSize::from(0))
}
