use crate::parser::core::Parser;
use crate::parser::cst::{QUANTIFIERS, SEQUENCE_END, SyntaxKind};
use crate::parser::element::{Node, Token, merge_text_nodes};
use crate::diagnostics::DiagnosticKind;

impl Parser<'_, '_> {
    /// `a|b|c` nests to the left: `((a|b)|c)`.
    pub(crate) fn parse_alternating_sequences(&mut self, consume_close_paren: bool) -> Node {
        if !self.enter_recursion() {
            return Node::new(SyntaxKind::Sequence, Vec::new());
        }

        let mut current = self.parse_sequence(consume_close_paren);
        while self.current.kind == SyntaxKind::Bar && !self.has_fatal_error() {
            let bar = self.consume(true);
            let right = self.parse_sequence(consume_close_paren);
            current = Node::new(
                SyntaxKind::Alternation,
                vec![current.into(), bar.into(), right.into()],
            );
        }

        self.exit_recursion();
        current
    }

    fn parse_sequence(&mut self, consume_close_paren: bool) -> Node {
        let mut elements: Vec<Node> = Vec::new();
        while self.should_consume_sequence_element(consume_close_paren) {
            self.ensure_progress();
            let last = elements.last().map(|node| node.kind);
            elements.push(self.parse_primary_expression_and_quantifiers(last));
        }

        Node::new(SyntaxKind::Sequence, merge_text_nodes(elements))
    }

    /// Inside a group, `)` ends the sequence; at top level it is a stray paren.
    fn should_consume_sequence_element(&self, consume_close_paren: bool) -> bool {
        if self.has_fatal_error() || SEQUENCE_END.contains(self.current.kind) {
            return false;
        }

        if self.current.kind == SyntaxKind::CloseParen {
            return consume_close_paren;
        }

        true
    }

    fn parse_primary_expression_and_quantifiers(&mut self, last: Option<SyntaxKind>) -> Node {
        let current = self.parse_primary_expression(last);
        if current.kind == SyntaxKind::SimpleOptionsGrouping {
            // Options groups are not atoms; a following quantifier is diagnosed on the
            // next iteration as following nothing.
            return current;
        }

        match self.current.kind {
            SyntaxKind::Asterisk => self.parse_quantifier(current, SyntaxKind::ZeroOrMoreQuantifier),
            SyntaxKind::Plus => self.parse_quantifier(current, SyntaxKind::OneOrMoreQuantifier),
            SyntaxKind::Question => self.parse_quantifier(current, SyntaxKind::ZeroOrOneQuantifier),
            SyntaxKind::OpenBrace => self.try_parse_numeric_quantifier(current),
            _ => current,
        }
    }

    fn parse_primary_expression(&mut self, last: Option<SyntaxKind>) -> Node {
        match self.current.kind {
            SyntaxKind::Dot => self.parse_atom(SyntaxKind::Wildcard),
            SyntaxKind::Caret => self.parse_atom(SyntaxKind::StartAnchor),
            SyntaxKind::Dollar => self.parse_atom(SyntaxKind::EndAnchor),
            SyntaxKind::Backslash => {
                let backslash = self.current.clone();
                self.parse_escape(backslash, true)
            }
            SyntaxKind::OpenBracket => self.parse_character_class(),
            SyntaxKind::OpenParen => self.parse_grouping(true),
            SyntaxKind::CloseParen => self.parse_unexpected_close_paren(),
            SyntaxKind::OpenBrace => self.parse_possible_unexpected_numeric_quantifier(last),
            kind if QUANTIFIERS.contains(kind) => self.parse_unexpected_quantifier(last),
            _ => self.parse_text(),
        }
    }

    fn parse_atom(&mut self, kind: SyntaxKind) -> Node {
        let token = self.consume(true);
        Node::new(kind, vec![token.into()])
    }

    fn parse_text(&mut self) -> Node {
        let token = self.consume(true);
        Node::text(token)
    }

    fn parse_unexpected_close_paren(&mut self) -> Node {
        let span = self.token_span(&self.current);
        let diagnostic = self.diagnostic(DiagnosticKind::TooManyCloseParens, span);
        let token = self.consume(true).with_diagnostic(diagnostic);
        Node::text(token)
    }

    /// A quantifier character with nothing quantifiable before it becomes text.
    fn parse_unexpected_quantifier(&mut self, last: Option<SyntaxKind>) -> Node {
        let token = self.consume(true);
        let token = self.check_quantifier_expression(last, token);
        Node::text(token)
    }

    /// Diagnoses a quantifier token that has no valid operand.
    pub(crate) fn check_quantifier_expression(
        &self,
        last: Option<SyntaxKind>,
        token: Token,
    ) -> Token {
        match last {
            None | Some(SyntaxKind::SimpleOptionsGrouping) => {
                let diagnostic = self
                    .diagnostic(DiagnosticKind::QuantifierFollowingNothing, self.token_span(&token));
                token.with_diagnostic(diagnostic)
            }
            Some(kind) if kind.is_quantifier() || kind == SyntaxKind::LazyQuantifier => {
                let text: String = self.token_text(&token).chars().take(1).collect();
                let diagnostic = self.diagnostic_with(
                    DiagnosticKind::NestedQuantifier,
                    self.token_span(&token),
                    &text,
                );
                token.with_diagnostic(diagnostic)
            }
            Some(_) => token,
        }
    }
}
