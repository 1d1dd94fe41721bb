//! Backslash escapes, both in sequences and inside character classes.
//!
//! The lexer cursor sits just past the backslash on entry. Each parser either builds its
//! escape node or rewinds and defers to a more general one, ending at
//! [`Parser::parse_char_escape`], which always produces a node.

use crate::diagnostics::DiagnosticKind;
use crate::options::RegexOptions;
use crate::parser::core::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::element::{Node, Token};
use crate::parser::lexer::is_word_char;

/// Delimited capture reference: `<name>` or `'name'`. Absent parts are missing tokens.
struct CaptureParts {
    open: Token,
    capture: Token,
    close: Token,
}

impl CaptureParts {
    fn is_complete(&self) -> bool {
        !self.open.is_missing() && !self.capture.is_missing() && !self.close.is_missing()
    }
}

impl Parser<'_, '_> {
    pub(super) fn parse_escape(&mut self, backslash: Token, allow_trivia_after_end: bool) -> Node {
        self.consume(false);

        if self.current.kind == SyntaxKind::EndOfFile {
            return self.parse_illegal_end_escape(backslash);
        }

        match self.current_char() {
            Some('b' | 'B' | 'A' | 'G' | 'Z' | 'z') => {
                let anchor = self.consume(allow_trivia_after_end);
                Node::new(
                    SyntaxKind::AnchorEscape,
                    vec![backslash.into(), anchor.into()],
                )
            }
            Some('w' | 'W' | 's' | 'S' | 'd' | 'D') => {
                let class = self.consume(allow_trivia_after_end);
                Node::new(
                    SyntaxKind::CharacterClassEscape,
                    vec![backslash.into(), class.into()],
                )
            }
            Some('p' | 'P') => self.parse_category_escape(backslash, allow_trivia_after_end),
            _ => {
                self.lexer.position -= 1;
                self.parse_basic_backslash(backslash, allow_trivia_after_end)
            }
        }
    }

    fn parse_illegal_end_escape(&self, backslash: Token) -> Node {
        let diagnostic =
            self.diagnostic(DiagnosticKind::IllegalEndEscape, self.token_span(&backslash));
        Node::new(
            SyntaxKind::SimpleEscape,
            vec![
                backslash.with_diagnostic(diagnostic).into(),
                Token::missing(SyntaxKind::TextToken).into(),
            ],
        )
    }

    fn parse_basic_backslash(&mut self, backslash: Token, allow_trivia_after_end: bool) -> Node {
        self.consume(false);

        if self.current.kind == SyntaxKind::EndOfFile {
            return self.parse_illegal_end_escape(backslash);
        }

        match self.current_char() {
            Some('k') => self.parse_possible_k_capture_escape(backslash, allow_trivia_after_end),
            Some('<' | '\'') => {
                self.lexer.position -= 1;
                self.parse_possible_capture_escape(backslash, allow_trivia_after_end)
            }
            Some('1'..='9') => {
                self.lexer.position -= 1;
                if self.options.contains(RegexOptions::ECMA_SCRIPT) {
                    self.parse_possible_ecmascript_backreference(backslash, allow_trivia_after_end)
                } else {
                    self.parse_possible_backreference(backslash, allow_trivia_after_end)
                }
            }
            _ => {
                self.lexer.position -= 1;
                self.parse_char_escape(backslash, allow_trivia_after_end)
            }
        }
    }

    /// ECMAScript takes the longest digit prefix naming an existing group.
    fn parse_possible_ecmascript_backreference(
        &mut self,
        backslash: Token,
        allow_trivia_after_end: bool,
    ) -> Node {
        let start = self.lexer.position;
        let mut best = None;
        let mut value = 0i32;

        while let Some(digit) = self.lexer.current_char().and_then(|ch| ch.to_digit(10)) {
            value = value.wrapping_mul(10).wrapping_add(digit as i32);
            self.lexer.position += 1;
            if self.has_capture_number(value) {
                best = Some(self.lexer.position);
            }
        }

        let Some(end) = best else {
            self.lexer.position = start;
            return self.parse_char_escape(backslash, allow_trivia_after_end);
        };

        let number = Token::new(SyntaxKind::NumberToken, start, end);
        self.reset_to_position_and_consume(end, allow_trivia_after_end);
        Node::new(
            SyntaxKind::BackreferenceEscape,
            vec![backslash.into(), number.into()],
        )
    }

    /// A number naming an existing group, or any number up to 9, is a back-reference.
    /// Anything else falls back to octal or text.
    fn parse_possible_backreference(
        &mut self,
        backslash: Token,
        allow_trivia_after_end: bool,
    ) -> Node {
        let start = self.lexer.position;
        let Some(number) = self.lexer.try_scan_number() else {
            return self.parse_char_escape(backslash, allow_trivia_after_end);
        };

        let value = self.number_value(&number);
        if !self.has_capture_number(value) && value > 9 {
            self.lexer.position = start;
            return self.parse_char_escape(backslash, allow_trivia_after_end);
        }

        let number = self.check_capture(number);
        self.consume(allow_trivia_after_end);
        Node::new(
            SyntaxKind::BackreferenceEscape,
            vec![backslash.into(), number.into()],
        )
    }

    fn parse_possible_capture_escape(
        &mut self,
        backslash: Token,
        allow_trivia_after_end: bool,
    ) -> Node {
        let after_backslash = self.lexer.position;
        let parts = self.scan_capture_parts(allow_trivia_after_end);

        if !parts.is_complete() {
            self.lexer.position = after_backslash;
            return self.parse_char_escape(backslash, allow_trivia_after_end);
        }

        Node::new(
            SyntaxKind::CaptureEscape,
            vec![
                backslash.into(),
                parts.open.into(),
                parts.capture.into(),
                parts.close.into(),
            ],
        )
    }

    fn parse_possible_k_capture_escape(
        &mut self,
        mut backslash: Token,
        allow_trivia_after_end: bool,
    ) -> Node {
        let k = self.current.clone();
        let after_backslash = self.lexer.position - 1;
        let parts = self.scan_capture_parts(allow_trivia_after_end);

        if parts.open.is_missing() {
            let diagnostic = self.diagnostic(
                DiagnosticKind::MalformedNamedBackReference,
                self.span_between(&backslash, &k),
            );
            backslash.add_diagnostic(diagnostic);
            return Node::new(
                SyntaxKind::SimpleEscape,
                vec![
                    backslash.into(),
                    k.with_kind(SyntaxKind::TextToken).into(),
                ],
            );
        }

        if !parts.is_complete() {
            // `\k` is then an ordinary (and, outside ECMAScript, unrecognized) escape.
            self.lexer.position = after_backslash;
            return self.parse_char_escape(backslash, allow_trivia_after_end);
        }

        Node::new(
            SyntaxKind::KCaptureEscape,
            vec![
                backslash.into(),
                k.into(),
                parts.open.into(),
                parts.capture.into(),
                parts.close.into(),
            ],
        )
    }

    fn scan_capture_parts(&mut self, allow_trivia_after_end: bool) -> CaptureParts {
        let mut parts = CaptureParts {
            open: Token::missing(SyntaxKind::LessThan),
            capture: Token::missing(SyntaxKind::CaptureNameToken),
            close: Token::missing(SyntaxKind::GreaterThan),
        };

        self.consume(false);
        let opens = matches!(
            self.current.kind,
            SyntaxKind::LessThan | SyntaxKind::SingleQuote
        );
        if !opens || self.lexer.position >= self.lexer.len() {
            return parts;
        }
        parts.open = self.current.clone();

        if let Some(capture) = self.lexer.try_scan_number_or_capture_name() {
            parts.capture = capture;
        }

        self.consume(false);
        let expected = if parts.open.kind == SyntaxKind::LessThan {
            SyntaxKind::GreaterThan
        } else {
            SyntaxKind::SingleQuote
        };
        if !parts.capture.is_missing() && self.current.kind == expected {
            parts.capture = self.check_capture(parts.capture);
            parts.close = self.consume(allow_trivia_after_end);
        }

        parts
    }

    /// Octal, single-letter, hex, unicode and control escapes, or an escaped literal.
    pub(super) fn parse_char_escape(
        &mut self,
        backslash: Token,
        allow_trivia_after_end: bool,
    ) -> Node {
        self.consume(false);

        let Some(ch) = self.current_char() else {
            return self.parse_illegal_end_escape(backslash);
        };

        match ch {
            '0'..='7' => {
                self.lexer.position -= 1;
                let digits = self.lexer.scan_octal_characters(self.options);
                self.consume(allow_trivia_after_end);
                Node::new(
                    SyntaxKind::OctalEscape,
                    vec![backslash.into(), digits.into()],
                )
            }
            'a' | 'b' | 'e' | 'f' | 'n' | 'r' | 't' | 'v' => {
                let letter = self.consume(allow_trivia_after_end);
                Node::new(
                    SyntaxKind::SimpleEscape,
                    vec![backslash.into(), letter.into()],
                )
            }
            'x' => self.parse_hex_escape(SyntaxKind::HexEscape, 2, backslash, allow_trivia_after_end),
            'u' => self.parse_hex_escape(
                SyntaxKind::UnicodeEscape,
                4,
                backslash,
                allow_trivia_after_end,
            ),
            'c' => self.parse_control_escape(backslash, allow_trivia_after_end),
            _ => {
                let mut escaped = self
                    .consume(allow_trivia_after_end)
                    .with_kind(SyntaxKind::TextToken);
                if !self.options.contains(RegexOptions::ECMA_SCRIPT) && is_word_char(ch) {
                    let diagnostic = self.diagnostic_with(
                        DiagnosticKind::UnrecognizedEscape,
                        self.token_span(&escaped),
                        &ch.to_string(),
                    );
                    escaped.add_diagnostic(diagnostic);
                }
                Node::new(
                    SyntaxKind::SimpleEscape,
                    vec![backslash.into(), escaped.into()],
                )
            }
        }
    }

    fn parse_hex_escape(
        &mut self,
        kind: SyntaxKind,
        digits: usize,
        backslash: Token,
        allow_trivia_after_end: bool,
    ) -> Node {
        let letter = self.current.clone();
        let hex = self.lexer.scan_hex_characters(digits);
        self.consume(allow_trivia_after_end);
        Node::new(kind, vec![backslash.into(), letter.into(), hex.into()])
    }

    fn parse_control_escape(&mut self, backslash: Token, allow_trivia_after_end: bool) -> Node {
        let mut letter = self.consume(false);

        if self.current.kind == SyntaxKind::EndOfFile {
            let diagnostic = self
                .diagnostic(DiagnosticKind::MissingControlCharacter, self.token_span(&letter));
            letter.add_diagnostic(diagnostic);
            return Node::new(
                SyntaxKind::ControlEscape,
                vec![
                    backslash.into(),
                    letter.into(),
                    Token::missing(SyntaxKind::TextToken).into(),
                ],
            );
        }

        let ch = self.current_char().unwrap_or_default().to_ascii_uppercase();
        if ('@'..='_').contains(&ch) {
            let control = self
                .consume(allow_trivia_after_end)
                .with_kind(SyntaxKind::TextToken);
            return Node::new(
                SyntaxKind::ControlEscape,
                vec![backslash.into(), letter.into(), control.into()],
            );
        }

        // The bogus control char is left for the enclosing sequence.
        let diagnostic = self.diagnostic(
            DiagnosticKind::UnrecognizedControlCharacter,
            self.token_span(&self.current),
        );
        letter.add_diagnostic(diagnostic);
        Node::new(
            SyntaxKind::ControlEscape,
            vec![
                backslash.into(),
                letter.into(),
                Token::missing(SyntaxKind::TextToken).into(),
            ],
        )
    }

    /// `\p{Name}` / `\P{Name}`. A malformed escape degrades to `\p` as a simple escape,
    /// and scanning resumes right after the `p`.
    fn parse_category_escape(&mut self, backslash: Token, allow_trivia_after_end: bool) -> Node {
        let letter = self.current.clone();
        let start = self.lexer.position;

        match self.try_parse_category_escape_parts(allow_trivia_after_end) {
            Ok((open_brace, category, close_brace)) => Node::new(
                SyntaxKind::CategoryEscape,
                vec![
                    backslash.into(),
                    letter.into(),
                    open_brace.into(),
                    category.into(),
                    close_brace.into(),
                ],
            ),
            Err(kind) => {
                self.reset_to_position_and_consume(start, allow_trivia_after_end);
                let span = self.span_between(&backslash, &letter);
                let diagnostic = match kind {
                    DiagnosticKind::UnknownProperty => self.diagnostic_with(kind, span, ""),
                    _ => self.diagnostic(kind, span),
                };
                let letter = letter
                    .with_kind(SyntaxKind::TextToken)
                    .with_diagnostic(diagnostic);
                Node::new(
                    SyntaxKind::SimpleEscape,
                    vec![backslash.into(), letter.into()],
                )
            }
        }
    }

    fn try_parse_category_escape_parts(
        &mut self,
        allow_trivia_after_end: bool,
    ) -> Result<(Token, Token, Token), DiagnosticKind> {
        if self.lexer.len() - self.lexer.position < "{x}".len() {
            return Err(DiagnosticKind::IncompleteCategoryEscape);
        }

        self.consume(false);
        if self.current.kind != SyntaxKind::OpenBrace {
            return Err(DiagnosticKind::MalformedCategoryEscape);
        }

        let open_brace = self.current.clone();
        let category = self.lexer.try_scan_escape_category();

        self.consume(false);
        if self.current.kind != SyntaxKind::CloseBrace {
            return Err(DiagnosticKind::IncompleteCategoryEscape);
        }

        let category = category.ok_or(DiagnosticKind::UnknownProperty)?;
        let close_brace = self.consume(allow_trivia_after_end);
        Ok((open_brace, category, close_brace))
    }
}
