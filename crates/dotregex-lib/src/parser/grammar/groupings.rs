//! `( ... )` in all its forms.
//!
//! After `(`, at most a few characters decide the construct: `?:`, `?<name>`, `?'name'`,
//! `?<a-b>`, `?>`, `?=`, `?!`, `?<=`, `?<!`, `?imnsx-imnsx)` / `?imnsx-imnsx:`, and
//! `?(cond)`. Unknown forms after `?` are diagnosed and parsed as a plain group, so
//! the `?` is re-read as a quantifier with nothing to quantify.

use crate::diagnostics::DiagnosticKind;
use crate::options::RegexOptions;
use crate::parser::core::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::element::{Element, Node, Token};

impl Parser<'_, '_> {
    /// `allow_options` is false for the condition of `(?(...)yes|no)`, where an
    /// options toggle is an unrecognized construct.
    pub(super) fn parse_grouping(&mut self, allow_options: bool) -> Node {
        let start = self.lexer.position;
        let open_paren = self.consume(false);

        if self.current.kind == SyntaxKind::Question {
            let question = self.current.clone();
            return self.parse_group_question(open_paren, question, allow_options);
        }

        self.lexer.position = start;
        self.parse_simple_group(open_paren)
    }

    fn parse_simple_group(&mut self, open_paren: Token) -> Node {
        let expression = self.parse_grouping_embedded_expression(self.options);
        let close_paren = self.parse_grouping_close_paren();
        Node::new(
            SyntaxKind::SimpleGrouping,
            vec![open_paren.into(), expression.into(), close_paren.into()],
        )
    }

    /// Parses a group body under `options`, restoring the outer options afterwards.
    fn parse_grouping_embedded_expression(&mut self, options: RegexOptions) -> Node {
        let outer = std::mem::replace(&mut self.options, options);
        self.consume(true);
        let expression = self.parse_alternating_sequences(false);
        self.options = outer;
        expression
    }

    fn parse_grouping_close_paren(&mut self) -> Token {
        if self.current.kind == SyntaxKind::CloseParen {
            return self.consume(true);
        }

        let span = self.token_start_position_span(&self.current);
        let diagnostic = self.diagnostic(DiagnosticKind::NotEnoughCloseParens, span);
        Token::missing(SyntaxKind::CloseParen).with_diagnostic(diagnostic)
    }

    fn parse_group_question(
        &mut self,
        open_paren: Token,
        question: Token,
        allow_options: bool,
    ) -> Node {
        if allow_options && let Some(options) = self.lexer.try_scan_options() {
            return self.parse_options_grouping(open_paren, question, options);
        }

        let after_question = self.lexer.position;
        self.consume(false);

        let mut open_paren = open_paren;
        match self.current.kind {
            SyntaxKind::LessThan => {
                return self.parse_lookbehind_or_named_capture(open_paren, question);
            }
            SyntaxKind::SingleQuote => {
                let open = self.current.clone();
                return self.parse_named_capture_or_balancing_grouping(open_paren, question, open);
            }
            SyntaxKind::OpenParen => return self.parse_conditional_grouping(open_paren, question),
            SyntaxKind::Colon => {
                return self.parse_marker_grouping(
                    SyntaxKind::NonCapturingGrouping,
                    open_paren,
                    question,
                    self.options,
                );
            }
            SyntaxKind::Equals => {
                return self.parse_marker_grouping(
                    SyntaxKind::PositiveLookaheadGrouping,
                    open_paren,
                    question,
                    self.options & !RegexOptions::RIGHT_TO_LEFT,
                );
            }
            SyntaxKind::Exclamation => {
                return self.parse_marker_grouping(
                    SyntaxKind::NegativeLookaheadGrouping,
                    open_paren,
                    question,
                    self.options & !RegexOptions::RIGHT_TO_LEFT,
                );
            }
            SyntaxKind::GreaterThan => {
                return self.parse_marker_grouping(
                    SyntaxKind::NonBacktrackingGrouping,
                    open_paren,
                    question,
                    self.options,
                );
            }
            SyntaxKind::CloseParen => {}
            _ => {
                let diagnostic = self.diagnostic(
                    DiagnosticKind::UnrecognizedGroupingConstruct,
                    self.token_span(&open_paren),
                );
                open_paren.add_diagnostic(diagnostic);
            }
        }

        // Reparse from the `?`, which now reads as a quantifier following nothing.
        self.lexer.position = after_question - 1;
        self.parse_simple_group(open_paren)
    }

    /// `(?` + one marker token + body + `)`.
    fn parse_marker_grouping(
        &mut self,
        kind: SyntaxKind,
        open_paren: Token,
        question: Token,
        options: RegexOptions,
    ) -> Node {
        let marker = self.current.clone();
        let expression = self.parse_grouping_embedded_expression(options);
        let close_paren = self.parse_grouping_close_paren();
        Node::new(
            kind,
            vec![
                open_paren.into(),
                question.into(),
                marker.into(),
                expression.into(),
                close_paren.into(),
            ],
        )
    }

    fn parse_options_grouping(
        &mut self,
        open_paren: Token,
        question: Token,
        options: Token,
    ) -> Node {
        self.consume(false);
        let toggled = self.options.apply_toggles(self.token_text(&options));

        match self.current.kind {
            SyntaxKind::CloseParen => {
                // Applies to the rest of the enclosing group, trivia after `)` included.
                self.options = toggled;
                let close_paren = self.consume(true);
                Node::new(
                    SyntaxKind::SimpleOptionsGrouping,
                    vec![
                        open_paren.into(),
                        question.into(),
                        options.into(),
                        close_paren.into(),
                    ],
                )
            }
            SyntaxKind::Colon => {
                let colon = self.current.clone();
                let expression = self.parse_grouping_embedded_expression(toggled);
                let close_paren = self.parse_grouping_close_paren();
                Node::new(
                    SyntaxKind::NestedOptionsGrouping,
                    vec![
                        open_paren.into(),
                        question.into(),
                        options.into(),
                        colon.into(),
                        expression.into(),
                        close_paren.into(),
                    ],
                )
            }
            _ => {
                let diagnostic = self.diagnostic(
                    DiagnosticKind::UnrecognizedGroupingConstruct,
                    self.token_span(&open_paren),
                );
                let close_paren = Token::missing(SyntaxKind::CloseParen).with_diagnostic(diagnostic);
                Node::new(
                    SyntaxKind::SimpleOptionsGrouping,
                    vec![
                        open_paren.into(),
                        question.into(),
                        options.into(),
                        close_paren.into(),
                    ],
                )
            }
        }
    }

    fn parse_lookbehind_or_named_capture(&mut self, open_paren: Token, question: Token) -> Node {
        let start = self.lexer.position;
        let less_than = self.consume(false);

        let kind = match self.current.kind {
            SyntaxKind::Equals => SyntaxKind::PositiveLookbehindGrouping,
            SyntaxKind::Exclamation => SyntaxKind::NegativeLookbehindGrouping,
            _ => {
                self.lexer.position = start;
                return self.parse_named_capture_or_balancing_grouping(
                    open_paren, question, less_than,
                );
            }
        };

        let marker = self.current.clone();
        let expression =
            self.parse_grouping_embedded_expression(self.options | RegexOptions::RIGHT_TO_LEFT);
        let close_paren = self.parse_grouping_close_paren();
        Node::new(
            kind,
            vec![
                open_paren.into(),
                question.into(),
                less_than.into(),
                marker.into(),
                expression.into(),
                close_paren.into(),
            ],
        )
    }

    /// `(?<name>`, `(?'name'`, `(?<N>` and the balancing forms `(?<a-b>`, `(?<-b>`.
    fn parse_named_capture_or_balancing_grouping(
        &mut self,
        mut open_paren: Token,
        question: Token,
        open: Token,
    ) -> Node {
        if self.lexer.position == self.lexer.len() {
            let diagnostic = self.diagnostic(
                DiagnosticKind::UnrecognizedGroupingConstruct,
                self.span_between(&open_paren, &open),
            );
            open_paren.add_diagnostic(diagnostic);
        }

        let capture = match self.lexer.try_scan_number_or_capture_name() {
            Some(capture) => capture,
            None => {
                self.consume(false);
                let missing = Token::missing(SyntaxKind::CaptureNameToken);
                if self.current.kind == SyntaxKind::Minus {
                    return self.parse_balancing_grouping(open_paren, question, open, missing);
                }

                let span = self.token_span_including_eof(&self.current);
                open_paren.add_diagnostic(self.diagnostic(DiagnosticKind::InvalidGroupName, span));
                self.move_back_before_previous_scan();
                missing
            }
        };

        let capture = if capture.kind == SyntaxKind::NumberToken && self.number_value(&capture) == 0
        {
            let diagnostic =
                self.diagnostic(DiagnosticKind::CaptureNumberZero, self.token_span(&capture));
            capture.with_diagnostic(diagnostic)
        } else {
            capture
        };

        self.consume(false);
        if self.current.kind == SyntaxKind::Minus {
            return self.parse_balancing_grouping(open_paren, question, open, capture);
        }

        let close = self.parse_capture_grouping_close_token(&mut open_paren, &open);
        let expression = self.parse_grouping_embedded_expression(self.options);
        let close_paren = self.parse_grouping_close_paren();
        Node::new(
            SyntaxKind::CaptureGrouping,
            vec![
                open_paren.into(),
                question.into(),
                open.into(),
                capture.into(),
                close.into(),
                expression.into(),
                close_paren.into(),
            ],
        )
    }

    /// `<` pairs with `>`, `'` with `'`. The matched close stays current; the body
    /// parse consumes it.
    fn parse_capture_grouping_close_token(&mut self, open_paren: &mut Token, open: &Token) -> Token {
        let expected = if open.kind == SyntaxKind::LessThan {
            SyntaxKind::GreaterThan
        } else {
            SyntaxKind::SingleQuote
        };

        if self.current.kind == expected {
            return self.current.clone();
        }

        if self.current.kind == SyntaxKind::EndOfFile {
            let diagnostic = self.diagnostic(
                DiagnosticKind::UnrecognizedGroupingConstruct,
                self.span_between(open_paren, open),
            );
            open_paren.add_diagnostic(diagnostic);
        } else {
            let diagnostic =
                self.diagnostic(DiagnosticKind::InvalidGroupName, self.token_span(&self.current));
            open_paren.add_diagnostic(diagnostic);
            self.lexer.position -= 1;
        }

        Token::missing(expected)
    }

    fn parse_balancing_grouping(
        &mut self,
        mut open_paren: Token,
        question: Token,
        open: Token,
        first_capture: Token,
    ) -> Node {
        let minus = self.current.clone();

        let second_capture = match self.lexer.try_scan_number_or_capture_name() {
            Some(capture) => capture,
            None => {
                self.consume(false);
                let span = self.token_span_including_eof(&self.current);
                open_paren.add_diagnostic(self.diagnostic(DiagnosticKind::InvalidGroupName, span));
                self.move_back_before_previous_scan();
                Token::missing(SyntaxKind::CaptureNameToken)
            }
        };
        let second_capture = self.check_capture(second_capture);

        self.consume(false);
        let close = self.parse_capture_grouping_close_token(&mut open_paren, &open);
        let expression = self.parse_grouping_embedded_expression(self.options);
        let close_paren = self.parse_grouping_close_paren();
        Node::new(
            SyntaxKind::BalancingGrouping,
            vec![
                open_paren.into(),
                question.into(),
                open.into(),
                first_capture.into(),
                minus.into(),
                second_capture.into(),
                close.into(),
                expression.into(),
                close_paren.into(),
            ],
        )
    }

    /// `(?(N)yes|no)` or `(?(name)yes|no)`. Anything else inside the inner parens is
    /// an expression condition.
    fn parse_conditional_grouping(&mut self, open_paren: Token, question: Token) -> Node {
        let inner_open_paren = self.current.clone();
        let after_inner_open_paren = self.lexer.position;

        let Some(capture) = self.lexer.try_scan_number_or_capture_name() else {
            return self.parse_conditional_expression_grouping(open_paren, question);
        };

        let (capture, inner_close_paren) = if capture.kind == SyntaxKind::NumberToken {
            self.consume(false);
            if self.current.kind == SyntaxKind::CloseParen {
                let inner_close_paren = self.current.clone();
                let capture = if self.has_capture_number(self.number_value(&capture)) {
                    capture
                } else {
                    let diagnostic =
                        self.diagnostic(DiagnosticKind::UndefinedGroup, self.token_span(&capture));
                    capture.with_diagnostic(diagnostic)
                };
                (capture, inner_close_paren)
            } else {
                let diagnostic =
                    self.diagnostic(DiagnosticKind::MalformedCondition, self.token_span(&capture));
                self.move_back_before_previous_scan();
                (
                    capture.with_diagnostic(diagnostic),
                    Token::missing(SyntaxKind::CloseParen),
                )
            }
        } else {
            if !self.has_capture_name(self.token_text(&capture)) {
                self.lexer.position = after_inner_open_paren;
                return self.parse_conditional_expression_grouping(open_paren, question);
            }

            self.consume(false);
            if self.current.kind != SyntaxKind::CloseParen {
                self.lexer.position = after_inner_open_paren;
                return self.parse_conditional_expression_grouping(open_paren, question);
            }
            (capture, self.current.clone())
        };

        self.consume(true);
        let result = self.parse_conditional_grouping_result();
        let close_paren = self.parse_grouping_close_paren();
        Node::new(
            SyntaxKind::ConditionalCaptureGrouping,
            vec![
                open_paren.into(),
                question.into(),
                inner_open_paren.into(),
                capture.into(),
                inner_close_paren.into(),
                result.into(),
                close_paren.into(),
            ],
        )
    }

    /// `(?(?=x)yes|no)` and friends: the condition is itself a grouping.
    fn parse_conditional_expression_grouping(
        &mut self,
        mut open_paren: Token,
        question: Token,
    ) -> Node {
        // Back onto the inner `(`.
        self.lexer.position -= 1;

        if self.lexer.is_at("(?#") {
            let position = self.lexer.position;
            let comment = self.lexer.scan_comment(RegexOptions::NONE);
            self.lexer.position = position;

            let diagnostic = match comment.and_then(|trivia| trivia.diagnostic) {
                Some(unterminated) => unterminated,
                None => self.diagnostic(
                    DiagnosticKind::ConditionCannotBeComment,
                    self.token_span(&open_paren),
                ),
            };
            open_paren.add_diagnostic(diagnostic);
        } else if self.lexer.is_at("(?'")
            || (self.lexer.is_at("(?<") && !self.lexer.is_at("(?<!") && !self.lexer.is_at("(?<="))
        {
            let diagnostic = self.diagnostic(
                DiagnosticKind::ConditionCannotCapture,
                self.token_span(&open_paren),
            );
            open_paren.add_diagnostic(diagnostic);
        }

        self.consume(false);
        let grouping = self.parse_grouping(false);
        let result = self.parse_conditional_grouping_result();
        let close_paren = self.parse_grouping_close_paren();
        Node::new(
            SyntaxKind::ConditionalExpressionGrouping,
            vec![
                open_paren.into(),
                question.into(),
                grouping.into(),
                result.into(),
                close_paren.into(),
            ],
        )
    }

    fn parse_conditional_grouping_result(&mut self) -> Node {
        let outer = self.options;
        let mut result = self.parse_alternating_sequences(false);
        self.options = outer;

        // At most one `|`: `((a|b)|c)` has an alternation on the left.
        let nested = result.kind == SyntaxKind::Alternation
            && matches!(result.children.first(), Some(Element::Node(left)) if left.kind == SyntaxKind::Alternation);
        if nested {
            let span = result.token(1).map(|bar| self.token_span(bar));
            if let Some(span) = span {
                let diagnostic = self.diagnostic(DiagnosticKind::TooManyAlternates, span);
                if let Some(bar) = result.token_mut(1) {
                    bar.add_diagnostic(diagnostic);
                }
            }
        }

        result
    }
}
