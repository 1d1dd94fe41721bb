use crate::diagnostics::DiagnosticKind;
use crate::parser::core::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::element::{Node, Token};

/// Tokens of a `{n}`, `{n,}` or `{n,m}` quantifier after the open brace.
struct NumericQuantifierParts {
    first: Token,
    comma: Option<Token>,
    second: Option<Token>,
    close_brace: Token,
}

impl NumericQuantifierParts {
    fn into_quantifier(self, expression: Node, open_brace: Token) -> Node {
        let mut children = vec![expression.into(), open_brace.into(), self.first.into()];
        let kind = match (self.comma, self.second) {
            (None, _) => SyntaxKind::ExactNumericQuantifier,
            (Some(comma), None) => {
                children.push(comma.into());
                SyntaxKind::OpenRangeNumericQuantifier
            }
            (Some(comma), Some(second)) => {
                children.push(comma.into());
                children.push(second.into());
                SyntaxKind::ClosedRangeNumericQuantifier
            }
        };
        children.push(self.close_brace.into());
        Node::new(kind, children)
    }
}

impl Parser<'_, '_> {
    pub(super) fn parse_quantifier(&mut self, expression: Node, kind: SyntaxKind) -> Node {
        let token = self.consume(true);
        let quantifier = Node::new(kind, vec![expression.into(), token.into()]);
        self.try_parse_lazy_quantifier(quantifier)
    }

    /// One `?` right after a quantifier makes it lazy.
    fn try_parse_lazy_quantifier(&mut self, quantifier: Node) -> Node {
        if self.current.kind != SyntaxKind::Question {
            return quantifier;
        }

        let question = self.consume(true);
        Node::new(
            SyntaxKind::LazyQuantifier,
            vec![quantifier.into(), question.into()],
        )
    }

    /// `{` after an atom is a quantifier only when the whole `{n[,[m]]}` form follows.
    /// Otherwise the scan is undone and `{` is left for the next sequence element.
    pub(super) fn try_parse_numeric_quantifier(&mut self, expression: Node) -> Node {
        let open_brace = self.current.clone();
        let start = self.lexer.position;

        match self.try_parse_numeric_quantifier_parts() {
            Some(parts) => {
                let quantifier = parts.into_quantifier(expression, open_brace);
                self.try_parse_lazy_quantifier(quantifier)
            }
            None => {
                self.current = open_brace;
                self.lexer.position = start;
                expression
            }
        }
    }

    fn try_parse_numeric_quantifier_parts(&mut self) -> Option<NumericQuantifierParts> {
        let first = self.lexer.try_scan_number()?;
        self.consume(false);

        let mut comma = None;
        let mut second = None;
        if self.current.kind == SyntaxKind::Comma {
            comma = Some(self.current.clone());
            let start = self.lexer.position;
            match self.lexer.try_scan_number() {
                None => self.reset_to_position_and_consume(start, false),
                Some(number) => {
                    self.consume(false);
                    second = Some(self.check_quantifier_bounds(&first, number));
                }
            }
        }

        if self.current.kind != SyntaxKind::CloseBrace {
            return None;
        }

        let close_brace = self.consume(true);
        Some(NumericQuantifierParts {
            first,
            comma,
            second,
            close_brace,
        })
    }

    fn check_quantifier_bounds(&self, first: &Token, second: Token) -> Token {
        if self.number_value(&second) >= self.number_value(first) {
            return second;
        }

        let diagnostic =
            self.diagnostic(DiagnosticKind::IllegalQuantifierRange, self.token_span(&second));
        second.with_diagnostic(diagnostic)
    }

    /// A well-formed `{n,m}` with no operand is text plus "following nothing". Any other
    /// `{` is plain text; scanning resumes right after it either way.
    pub(super) fn parse_possible_unexpected_numeric_quantifier(
        &mut self,
        last: Option<SyntaxKind>,
    ) -> Node {
        let mut open_brace = self.current.clone().with_kind(SyntaxKind::TextToken);
        let start = self.lexer.position;

        if self.try_parse_numeric_quantifier_parts().is_some() {
            open_brace = self.check_quantifier_expression(last, open_brace);
        }

        self.reset_to_position_and_consume(start, true);
        Node::text(open_brace)
    }
}
