//! Parser state machine and low-level operations.

use std::cell::Cell;

use rowan::TextRange;

use super::cst::SyntaxKind;
use super::element::{Node, Token};
use super::lexer::{Lexer, parse_number};
use crate::Error;
use crate::captures::CaptureTable;
use crate::chars::VirtualCharSequence;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::options::RegexOptions;

const DEBUG_FUEL: u32 = 256;

/// Recursive-descent parser over a pull-based [`Lexer`].
///
/// `current` is the token under the cursor; the lexer position is just past it.
/// Construct parsers frequently move the lexer position and re-scan, which
/// replaces `current` with a fresh token on the next `consume`.
pub(super) struct Parser<'t, 'c> {
    pub(super) lexer: Lexer<'t>,
    pub(super) options: RegexOptions,
    pub(super) current: Token,
    captures: &'c CaptureTable,
    depth: u32,
    pub(super) debug_fuel: Cell<u32>,
    exec_fuel_remaining: Option<u32>,
    recursion_fuel_limit: Option<u32>,
    fatal_error: Option<Error>,
}

impl<'t, 'c> Parser<'t, 'c> {
    pub(super) fn new(
        text: &'t VirtualCharSequence,
        options: RegexOptions,
        captures: &'c CaptureTable,
    ) -> Self {
        let mut lexer = Lexer::new(text);
        let current = lexer.scan_next_token(true, options);
        Self {
            lexer,
            options,
            current,
            captures,
            depth: 0,
            debug_fuel: Cell::new(DEBUG_FUEL),
            exec_fuel_remaining: None,
            recursion_fuel_limit: None,
            fatal_error: None,
        }
    }

    pub(super) fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel_remaining = limit;
        self
    }

    pub(super) fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    /// Parses the whole pattern into a `CompilationUnit`.
    pub(super) fn parse(mut self) -> Result<Node, Error> {
        let expression = self.parse_alternating_sequences(true);
        if let Some(err) = self.fatal_error.take() {
            return Err(err);
        }

        self.assert_at_end_of_input();
        Ok(Node::new(
            SyntaxKind::CompilationUnit,
            vec![expression.into(), self.current.into()],
        ))
    }

    pub(super) fn has_fatal_error(&self) -> bool {
        self.fatal_error.is_some()
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(DEBUG_FUEL);
    }

    fn consume_exec_fuel(&mut self) {
        if let Some(ref mut remaining) = self.exec_fuel_remaining {
            if *remaining == 0 {
                if self.fatal_error.is_none() {
                    self.fatal_error = Some(Error::ExecFuelExhausted);
                }
                return;
            }
            *remaining -= 1;
        }
    }

    /// Returns the current token and scans the next one.
    pub(super) fn consume(&mut self, allow_trivia: bool) -> Token {
        self.consume_exec_fuel();
        self.reset_debug_fuel();
        let next = self.lexer.scan_next_token(allow_trivia, self.options);
        std::mem::replace(&mut self.current, next)
    }

    pub(super) fn reset_to_position_and_consume(&mut self, position: usize, allow_trivia: bool) {
        self.lexer.position = position;
        self.consume(allow_trivia);
    }

    /// Moves the lexer back so the char under `current` is scanned again.
    pub(super) fn move_back_before_previous_scan(&mut self) {
        if self.current.kind != SyntaxKind::EndOfFile {
            self.lexer.position -= 1;
        }
    }

    pub(super) fn current_char(&self) -> Option<char> {
        if self.current.len() != 1 {
            return None;
        }
        self.lexer.text().char_at(self.current.start)
    }

    pub(super) fn enter_recursion(&mut self) -> bool {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            if self.fatal_error.is_none() {
                self.fatal_error = Some(Error::RecursionLimitExceeded);
            }
            return false;
        }
        self.depth += 1;
        self.reset_debug_fuel();
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.reset_debug_fuel();
    }

    // --- Text and spans ---

    pub(super) fn token_text(&self, token: &Token) -> &'t str {
        self.lexer.text().slice(token.start, token.end)
    }

    pub(super) fn number_value(&self, token: &Token) -> i32 {
        parse_number(self.token_text(token))
    }

    pub(super) fn token_span(&self, token: &Token) -> TextRange {
        self.lexer.text_span(token.start, token.end)
    }

    /// From the start of `first` to the end of `last`.
    pub(super) fn span_between(&self, first: &Token, last: &Token) -> TextRange {
        self.lexer.text_span(first.start, last.end)
    }

    /// Zero-length span where `token` starts (after its trivia).
    pub(super) fn token_start_position_span(&self, token: &Token) -> TextRange {
        self.lexer.text_span(token.start, token.start)
    }

    pub(super) fn token_span_including_eof(&self, token: &Token) -> TextRange {
        if token.kind == SyntaxKind::EndOfFile {
            return self.token_start_position_span(token);
        }
        self.token_span(token)
    }

    pub(super) fn diagnostic(&self, kind: DiagnosticKind, range: TextRange) -> Diagnostic {
        Diagnostic::with_default_message(kind, range)
    }

    pub(super) fn diagnostic_with(
        &self,
        kind: DiagnosticKind,
        range: TextRange,
        detail: &str,
    ) -> Diagnostic {
        Diagnostic::new(kind, range, kind.message(Some(detail)))
    }

    // --- Capture references ---

    pub(super) fn has_capture_number(&self, value: i32) -> bool {
        self.captures.has_number(value)
    }

    /// Reports a reference to a group that the capture table does not know.
    pub(super) fn check_capture(&self, token: Token) -> Token {
        if token.is_missing() {
            return token;
        }

        if token.kind == SyntaxKind::NumberToken {
            let value = self.number_value(&token);
            if self.captures.has_number(value) {
                return token;
            }
            let diagnostic = self.diagnostic_with(
                DiagnosticKind::UndefinedGroupNumber,
                self.token_span(&token),
                &value.to_string(),
            );
            return token.with_diagnostic(diagnostic);
        }

        let name = self.token_text(&token);
        if self.captures.has_name(name) {
            return token;
        }
        let diagnostic = self.diagnostic_with(
            DiagnosticKind::UndefinedGroupName,
            self.token_span(&token),
            name,
        );
        token.with_diagnostic(diagnostic)
    }

    pub(super) fn has_capture_name(&self, name: &str) -> bool {
        self.captures.has_name(name)
    }
}
