//! Intermediate tree built during descent, lowered to a Rowan green tree at the end.
//!
//! The parser backtracks and re-scans, merges adjacent text, and attaches at most one
//! diagnostic per token. Doing that on plain owned values is simpler than on a
//! `GreenNodeBuilder` checkpoint stack, so the green tree is produced in one pass
//! once the shape is final.

use rowan::{GreenNode, GreenNodeBuilder};

use super::cst::SyntaxKind;
use crate::chars::VirtualCharSequence;
use crate::diagnostics::{Diagnostic, Diagnostics};

/// Comment or whitespace leading a token. Positions are char indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Trivia {
    pub kind: SyntaxKind,
    pub start: usize,
    pub end: usize,
    pub diagnostic: Option<Diagnostic>,
}

impl Trivia {
    pub fn new(kind: SyntaxKind, start: usize, end: usize) -> Self {
        Self {
            kind,
            start,
            end,
            diagnostic: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Token {
    pub kind: SyntaxKind,
    pub start: usize,
    pub end: usize,
    pub trivia: Vec<Trivia>,
    pub diagnostic: Option<Diagnostic>,
}

impl Token {
    pub fn new(kind: SyntaxKind, start: usize, end: usize) -> Self {
        Self {
            kind,
            start,
            end,
            trivia: Vec::new(),
            diagnostic: None,
        }
    }

    /// Zero-length placeholder for a delimiter the source omits.
    pub fn missing(kind: SyntaxKind) -> Self {
        Self::new(kind, 0, 0)
    }

    pub fn is_missing(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn with_kind(mut self, kind: SyntaxKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_trivia(mut self, trivia: Vec<Trivia>) -> Self {
        self.trivia = trivia;
        self
    }

    /// Attaches `diagnostic` unless the token already carries one.
    pub fn with_diagnostic(mut self, diagnostic: Diagnostic) -> Self {
        self.add_diagnostic(diagnostic);
        self
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        if self.diagnostic.is_none() {
            self.diagnostic = Some(diagnostic);
        }
    }

    pub fn has_problem(&self) -> bool {
        self.is_missing()
            || self.diagnostic.is_some()
            || self.trivia.iter().any(|t| t.diagnostic.is_some())
    }

    /// Text tokens merge when neither carries a diagnostic and `next` has no trivia.
    fn can_merge_with(&self, next: &Token) -> bool {
        self.diagnostic.is_none()
            && next.diagnostic.is_none()
            && next.trivia.is_empty()
            && self.end == next.start
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Node {
    pub kind: SyntaxKind,
    pub children: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Element {
    Node(Node),
    Token(Token),
}

impl From<Node> for Element {
    fn from(node: Node) -> Self {
        Element::Node(node)
    }
}

impl From<Token> for Element {
    fn from(token: Token) -> Self {
        Element::Token(token)
    }
}

impl Node {
    pub fn new(kind: SyntaxKind, children: Vec<Element>) -> Self {
        Self { kind, children }
    }

    /// `Text` node over a single token, demoting punctuation to `TextToken`.
    pub fn text(token: Token) -> Self {
        Self::new(
            SyntaxKind::Text,
            vec![token.with_kind(SyntaxKind::TextToken).into()],
        )
    }

    pub fn token(&self, index: usize) -> Option<&Token> {
        match self.children.get(index)? {
            Element::Token(token) => Some(token),
            Element::Node(_) => None,
        }
    }

    pub fn token_mut(&mut self, index: usize) -> Option<&mut Token> {
        match self.children.get_mut(index)? {
            Element::Token(token) => Some(token),
            Element::Node(_) => None,
        }
    }

    /// Whether any token below is missing or carries a diagnostic.
    pub fn has_problem(&self) -> bool {
        self.children.iter().any(|child| match child {
            Element::Node(node) => node.has_problem(),
            Element::Token(token) => token.has_problem(),
        })
    }
}

/// Collapses runs of adjacent `Text` nodes into one node per run.
pub(super) fn merge_text_nodes(nodes: Vec<Node>) -> Vec<Element> {
    let mut merged: Vec<Element> = Vec::with_capacity(nodes.len());
    let mut run: Option<Token> = None;

    for node in nodes {
        let text_token = match (node.kind, node.children.as_slice()) {
            (SyntaxKind::Text, [Element::Token(token)]) => Some(token.clone()),
            _ => None,
        };

        let Some(token) = text_token else {
            if let Some(prev) = run.take() {
                merged.push(Node::text(prev).into());
            }
            merged.push(node.into());
            continue;
        };

        match run.as_mut() {
            Some(prev) if prev.can_merge_with(&token) => prev.end = token.end,
            _ => {
                if let Some(prev) = run.replace(token) {
                    merged.push(Node::text(prev).into());
                }
            }
        }
    }

    if let Some(prev) = run {
        merged.push(Node::text(prev).into());
    }
    merged
}

/// Builds the green tree and collects diagnostics in tree order, dropping exact duplicates.
pub(super) fn lower(root: &Node, text: &VirtualCharSequence) -> (GreenNode, Diagnostics) {
    let mut lowering = Lowering {
        text,
        builder: GreenNodeBuilder::new(),
        diagnostics: Diagnostics::new(),
    };
    lowering.node(root);
    (lowering.builder.finish(), lowering.diagnostics)
}

struct Lowering<'t> {
    text: &'t VirtualCharSequence,
    builder: GreenNodeBuilder<'static>,
    diagnostics: Diagnostics,
}

impl Lowering<'_> {
    fn node(&mut self, node: &Node) {
        self.builder.start_node(node.kind.into());
        for child in &node.children {
            match child {
                Element::Node(node) => self.node(node),
                Element::Token(token) => self.token(token),
            }
        }
        self.builder.finish_node();
    }

    fn token(&mut self, token: &Token) {
        for trivia in &token.trivia {
            self.builder
                .token(trivia.kind.into(), self.text.slice(trivia.start, trivia.end));
            if let Some(diagnostic) = &trivia.diagnostic {
                self.report(diagnostic);
            }
        }

        self.builder
            .token(token.kind.into(), self.text.slice(token.start, token.end));
        if let Some(diagnostic) = &token.diagnostic {
            self.report(diagnostic);
        }
    }

    fn report(&mut self, diagnostic: &Diagnostic) {
        self.diagnostics.push_unique(diagnostic.clone());
    }
}
