//! Pull-based scanner over a [`VirtualCharSequence`].
//!
//! The grammar is context-sensitive (`{` may or may not start a quantifier, whitespace is
//! text unless `x` is active), so there is no up-front tokenization. The parser drives a
//! cursor and asks for the next token, or for a specialised run (number, capture name,
//! option letters, hex digits) when the surrounding construct calls for one. It moves the
//! cursor back freely when a speculative scan fails.
//!
//! ## Trivia
//!
//! `(?#...)` comments are trivia in every mode. Whitespace runs and `#` line comments are
//! trivia only under `IgnorePatternWhitespace`. Trivia is recognised with a small Logos
//! lexer and attached to the following token.

use logos::Logos;
use rowan::TextRange;

use super::categories;
use super::cst::SyntaxKind;
use super::element::{Token, Trivia};
use crate::chars::VirtualCharSequence;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::options::RegexOptions;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum TriviaLexeme {
    #[regex(r"[ \t\n\r\x0C]+")]
    Whitespace,

    #[regex(r"#[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"\(\?#[^)]*\)?", allow_greedy = true)]
    InlineComment,
}

pub(super) struct Lexer<'t> {
    text: &'t VirtualCharSequence,
    /// Index of the next char to scan.
    pub(super) position: usize,
}

impl<'t> Lexer<'t> {
    pub(super) fn new(text: &'t VirtualCharSequence) -> Self {
        Self { text, position: 0 }
    }

    pub(super) fn text(&self) -> &'t VirtualCharSequence {
        self.text
    }

    pub(super) fn len(&self) -> usize {
        self.text.len()
    }

    pub(super) fn current_char(&self) -> Option<char> {
        self.text.char_at(self.position)
    }

    /// Whether the unscanned input starts with `s`.
    pub(super) fn is_at(&self, s: &str) -> bool {
        let mut index = self.position;
        for expected in s.chars() {
            if self.text.char_at(index) != Some(expected) {
                return false;
            }
            index += 1;
        }
        true
    }

    /// Source span of the chars in `start..end`.
    pub(super) fn text_span(&self, start: usize, end: usize) -> TextRange {
        self.text.source_span(start, end)
    }

    pub(super) fn scan_next_token(&mut self, allow_trivia: bool, options: RegexOptions) -> Token {
        let trivia = if allow_trivia {
            self.scan_trivia(options)
        } else {
            Vec::new()
        };

        let start = self.position;
        let kind = match self.current_char() {
            None => SyntaxKind::EndOfFile,
            Some(ch) => {
                self.position += 1;
                SyntaxKind::of_char(ch)
            }
        };

        Token::new(kind, start, self.position).with_trivia(trivia)
    }

    fn scan_trivia(&mut self, options: RegexOptions) -> Vec<Trivia> {
        let mut trivia = Vec::new();
        while let Some(item) = self.scan_trivia_item(options) {
            trivia.push(item);
        }
        trivia
    }

    fn scan_trivia_item(&mut self, options: RegexOptions) -> Option<Trivia> {
        let rest = self.text.slice(self.position, self.text.len());
        let mut lexer = TriviaLexeme::lexer(rest);
        let lexeme = lexer.next()?.ok()?;
        let span = lexer.span();

        let free_spacing = options.contains(RegexOptions::IGNORE_PATTERN_WHITESPACE);
        let kind = match lexeme {
            TriviaLexeme::InlineComment => SyntaxKind::CommentTrivia,
            TriviaLexeme::LineComment if free_spacing => SyntaxKind::CommentTrivia,
            TriviaLexeme::Whitespace if free_spacing => SyntaxKind::WhitespaceTrivia,
            _ => return None,
        };

        let start = self.position;
        let base = self.text.text_offset(start);
        let end = self.text.char_index(base + rowan::TextSize::from(span.end as u32));
        self.position = end;

        let mut trivia = Trivia::new(kind, start, end);
        if lexeme == TriviaLexeme::InlineComment && !lexer.slice().ends_with(')') {
            trivia.diagnostic = Some(Diagnostic::with_default_message(
                DiagnosticKind::UnterminatedComment,
                self.text_span(start, end),
            ));
        }
        Some(trivia)
    }

    /// Scans one comment at the cursor, if any.
    pub(super) fn scan_comment(&mut self, options: RegexOptions) -> Option<Trivia> {
        let start = self.position;
        let trivia = self.scan_trivia_item(options)?;
        if trivia.kind == SyntaxKind::CommentTrivia {
            return Some(trivia);
        }
        self.position = start;
        None
    }

    /// Scans a run of decimal digits. The value wraps past `i32::MAX`, with a diagnostic.
    pub(super) fn try_scan_number(&mut self) -> Option<Token> {
        let start = self.position;
        while self.current_char().is_some_and(|ch| ch.is_ascii_digit()) {
            self.position += 1;
        }

        if self.position == start {
            return None;
        }

        let token = Token::new(SyntaxKind::NumberToken, start, self.position);
        if number_overflows(self.text.slice(start, self.position)) {
            let span = self.text_span(start, self.position);
            return Some(token.with_diagnostic(Diagnostic::with_default_message(
                DiagnosticKind::CaptureNumberOverflow,
                span,
            )));
        }
        Some(token)
    }

    pub(super) fn try_scan_capture_name(&mut self) -> Option<Token> {
        let start = self.position;
        while self.current_char().is_some_and(is_boundary_word_char) {
            self.position += 1;
        }

        (self.position != start)
            .then(|| Token::new(SyntaxKind::CaptureNameToken, start, self.position))
    }

    pub(super) fn try_scan_number_or_capture_name(&mut self) -> Option<Token> {
        self.try_scan_number()
            .or_else(|| self.try_scan_capture_name())
    }

    pub(super) fn try_scan_options(&mut self) -> Option<Token> {
        let start = self.position;
        while self.current_char().is_some_and(is_option_char) {
            self.position += 1;
        }

        (self.position != start).then(|| Token::new(SyntaxKind::OptionsToken, start, self.position))
    }

    /// Scans the name inside `\p{...}`. Unknown names still produce a token, carrying
    /// an "Unknown property" diagnostic.
    pub(super) fn try_scan_escape_category(&mut self) -> Option<Token> {
        let start = self.position;
        while self.current_char().is_some_and(is_escape_category_char) {
            self.position += 1;
        }

        if self.position == start {
            return None;
        }

        let token = Token::new(SyntaxKind::EscapeCategoryToken, start, self.position);
        let name = self.text.slice(start, self.position);
        if categories::is_escape_category(name) {
            return Some(token);
        }

        let span = self.text_span(start, self.position);
        Some(token.with_diagnostic(Diagnostic::new(
            DiagnosticKind::UnknownProperty,
            span,
            DiagnosticKind::UnknownProperty.message(Some(name)),
        )))
    }

    /// Scans up to `count` hex digits after `\x` or `\u`. The cursor sits after the
    /// type letter, so the backslash is two chars back.
    pub(super) fn scan_hex_characters(&mut self, count: usize) -> Token {
        let start = self.position;
        let before_slash = start.saturating_sub(2);

        for _ in 0..count {
            if !self.current_char().is_some_and(|ch| ch.is_ascii_hexdigit()) {
                break;
            }
            self.position += 1;
        }

        let token = Token::new(SyntaxKind::TextToken, start, self.position);
        if self.position - start == count {
            return token;
        }

        let span = self.text_span(before_slash, self.position);
        token.with_diagnostic(Diagnostic::with_default_message(
            DiagnosticKind::InsufficientHexDigits,
            span,
        ))
    }

    /// Scans up to three octal digits. ECMAScript stops once the value reaches `0x20`.
    pub(super) fn scan_octal_characters(&mut self, options: RegexOptions) -> Token {
        let start = self.position;
        let mut value = 0u32;

        for _ in 0..3 {
            let Some(digit) = self.current_char().and_then(|ch| ch.to_digit(8)) else {
                break;
            };
            value = value * 8 + digit;
            self.position += 1;

            if options.contains(RegexOptions::ECMA_SCRIPT) && value >= 0x20 {
                break;
            }
        }

        Token::new(SyntaxKind::TextToken, start, self.position)
    }
}

/// Decimal value of a digit run, wrapping like a 32-bit signed accumulator.
pub(crate) fn parse_number(digits: &str) -> i32 {
    digits
        .chars()
        .filter_map(|ch| ch.to_digit(10))
        .fold(0i32, |value, digit| {
            value.wrapping_mul(10).wrapping_add(digit as i32)
        })
}

fn number_overflows(digits: &str) -> bool {
    let mut value = 0i64;
    for digit in digits.chars().filter_map(|ch| ch.to_digit(10)) {
        value = value * 10 + i64::from(digit);
        if value > i64::from(i32::MAX) {
            return true;
        }
    }
    false
}

/// Unicode `\w`, which is what .NET accepts in capture names.
pub(crate) fn is_word_char(ch: char) -> bool {
    regex_syntax::try_is_word_character(ch).unwrap_or(ch.is_alphanumeric() || ch == '_')
}

/// Word characters plus the zero-width joiners allowed inside capture names.
pub(crate) fn is_boundary_word_char(ch: char) -> bool {
    is_word_char(ch) || ch == '\u{200D}' || ch == '\u{200C}'
}

fn is_option_char(ch: char) -> bool {
    matches!(
        ch,
        '+' | '-' | 'i' | 'I' | 'm' | 'M' | 'n' | 'N' | 's' | 'S' | 'x' | 'X'
    )
}

fn is_escape_category_char(ch: char) -> bool {
    ch == '-' || ch == '_' || ch.is_ascii_alphanumeric()
}
