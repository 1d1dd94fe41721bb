//! `[...]` and `[^...]` bodies.
//!
//! No trivia is allowed anywhere inside a class. Ranges are checked for reverse order by
//! computing the char value of both endpoints, skipping any endpoint that already carries
//! a problem. A `\-` after a range minus does not end the range: the endpoint is the
//! first component after the run of escaped minuses.

use crate::diagnostics::DiagnosticKind;
use crate::parser::core::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::element::{Element, Node, Token, merge_text_nodes};

impl Parser<'_, '_> {
    pub(super) fn parse_character_class(&mut self) -> Node {
        let open_bracket = self.current.clone();
        let mut caret = None;

        self.consume(false);
        if self.current.kind == SyntaxKind::Caret {
            caret = Some(self.current.clone());
        } else {
            self.move_back_before_previous_scan();
        }
        self.consume(false);

        let mut components: Vec<Node> = Vec::new();
        let mut close_bracket = None;
        while self.current.kind != SyntaxKind::EndOfFile && !self.has_fatal_error() {
            self.ensure_progress();
            if self.current.kind == SyntaxKind::CloseBracket && !components.is_empty() {
                close_bracket = Some(self.consume(true));
                break;
            }
            self.parse_character_class_components(&mut components);
        }

        let close_bracket = close_bracket.unwrap_or_else(|| {
            let span = self.token_start_position_span(&self.current);
            Token::missing(SyntaxKind::CloseBracket)
                .with_diagnostic(self.diagnostic(DiagnosticKind::UnterminatedSet, span))
        });

        let body = Node::new(SyntaxKind::Sequence, merge_text_nodes(components));
        match caret {
            None => Node::new(
                SyntaxKind::CharacterClass,
                vec![open_bracket.into(), body.into(), close_bracket.into()],
            ),
            Some(caret) => Node::new(
                SyntaxKind::NegatedCharacterClass,
                vec![
                    open_bracket.into(),
                    caret.into(),
                    body.into(),
                    close_bracket.into(),
                ],
            ),
        }
    }

    fn parse_character_class_components(&mut self, components: &mut Vec<Node>) {
        let left = self.parse_single_character_class_component(components.is_empty(), false);
        if matches!(
            left.kind,
            SyntaxKind::CharacterClassEscape | SyntaxKind::CategoryEscape
        ) || self.is_escaped_minus(&left)
        {
            components.push(left);
            return;
        }

        if self.current.kind != SyntaxKind::Minus || self.lexer.is_at("]") {
            components.push(left);
            return;
        }

        let mut minus = self.consume(false);
        if self.current.kind == SyntaxKind::OpenBracket {
            components.push(left);
            components.push(self.parse_character_class_subtraction(minus));
            return;
        }

        let right = self.parse_right_side_of_character_class_range();
        if let (Some(low), Some(high)) = (self.range_value(&left), self.range_value(&right))
            && low > high
        {
            let diagnostic = self.diagnostic(DiagnosticKind::ReverseRange, self.token_span(&minus));
            minus.add_diagnostic(diagnostic);
        }

        components.push(Node::new(
            SyntaxKind::CharacterClassRange,
            vec![left.into(), minus.into(), right.into()],
        ));
    }

    fn parse_right_side_of_character_class_range(&mut self) -> Node {
        let first = self.parse_single_character_class_component(false, true);
        if !self.is_escaped_minus(&first) {
            return first;
        }

        let mut run = vec![first];
        while run.last().is_some_and(|last| self.is_escaped_minus(last))
            && self.current.kind != SyntaxKind::CloseBracket
            && !self.has_fatal_error()
        {
            self.ensure_progress();
            run.push(self.parse_single_character_class_component(false, true));
        }

        Node::new(
            SyntaxKind::Sequence,
            run.into_iter().map(Element::from).collect(),
        )
    }

    fn parse_single_character_class_component(
        &mut self,
        is_first: bool,
        after_range_minus: bool,
    ) -> Node {
        if self.current.kind == SyntaxKind::Backslash && self.lexer.position < self.lexer.len() {
            return self.parse_character_class_escape(after_range_minus);
        }

        if !after_range_minus
            && !is_first
            && self.current.kind == SyntaxKind::Minus
            && self.lexer.is_at("[")
        {
            let minus = self.consume(false);
            return self.parse_character_class_subtraction(minus);
        }

        if !after_range_minus
            && self.current.kind == SyntaxKind::OpenBracket
            && self.lexer.is_at(":")
            && let Some(posix) = self.try_parse_posix_property()
        {
            return posix;
        }

        let token = self.consume(false);
        Node::text(token)
    }

    fn parse_character_class_escape(&mut self, after_range_minus: bool) -> Node {
        let mut backslash = self.current.clone();
        self.consume(false);

        let next = self.current_char().unwrap_or_default();
        match next {
            'd' | 'D' | 's' | 'S' | 'w' | 'W' | 'p' | 'P' => {
                if after_range_minus {
                    let diagnostic = self.diagnostic_with(
                        DiagnosticKind::ClassInRange,
                        self.span_between(&backslash, &self.current),
                        &next.to_string(),
                    );
                    backslash.add_diagnostic(diagnostic);
                }
                self.lexer.position -= 1;
                self.parse_escape(backslash, false)
            }
            '-' => {
                let minus = self.consume(false).with_kind(SyntaxKind::TextToken);
                Node::new(
                    SyntaxKind::SimpleEscape,
                    vec![backslash.into(), minus.into()],
                )
            }
            _ => {
                // Plain char escapes only: `\b` is a backspace here and `\k` is not a reference.
                self.lexer.position -= 1;
                self.parse_char_escape(backslash, false)
            }
        }
    }

    /// `[:name:]` is kept as a single text token. Anything else rewinds to the `[`.
    fn try_parse_posix_property(&mut self) -> Option<Node> {
        let before_bracket = self.lexer.position - 1;
        self.consume(false);

        if self.lexer.try_scan_capture_name().is_some() && self.lexer.is_at(":]") {
            self.lexer.position += 2;
            let token = Token::new(SyntaxKind::TextToken, before_bracket, self.lexer.position);
            self.consume(false);
            return Some(Node::new(SyntaxKind::PosixProperty, vec![token.into()]));
        }

        self.reset_to_position_and_consume(before_bracket, false);
        None
    }

    fn parse_character_class_subtraction(&mut self, mut minus: Token) -> Node {
        if !self.enter_recursion() {
            return Node::new(SyntaxKind::CharacterClassSubtraction, vec![minus.into()]);
        }

        let class = self.parse_character_class();
        self.exit_recursion();

        if !matches!(
            self.current.kind,
            SyntaxKind::CloseBracket | SyntaxKind::EndOfFile
        ) {
            let span = self.token_start_position_span(&minus);
            minus.add_diagnostic(self.diagnostic(DiagnosticKind::SubtractionNotLast, span));
        }

        Node::new(
            SyntaxKind::CharacterClassSubtraction,
            vec![minus.into(), class.into()],
        )
    }

    fn is_escaped_minus(&self, node: &Node) -> bool {
        node.kind == SyntaxKind::SimpleEscape
            && node
                .token(1)
                .is_some_and(|token| token.kind == SyntaxKind::TextToken && self.token_text(token) == "-")
    }

    /// UTF-16 code unit value of a range endpoint, if it has one and is problem-free.
    fn range_value(&self, component: &Node) -> Option<u32> {
        if component.has_problem() {
            return None;
        }
        self.range_value_unchecked(component)
    }

    fn range_value_unchecked(&self, component: &Node) -> Option<u32> {
        match component.kind {
            SyntaxKind::SimpleEscape => {
                let ch = self.first_char(component.token(1)?)?;
                Some(map_escape_char(ch) as u32)
            }
            SyntaxKind::ControlEscape => {
                let ch = self.first_char(component.token(2)?)?.to_ascii_uppercase();
                Some((ch as u32).wrapping_sub('A' as u32).wrapping_add(1) & 0xFFFF)
            }
            SyntaxKind::OctalEscape => Some(self.digits_value(component.token(1)?, 8)),
            SyntaxKind::HexEscape | SyntaxKind::UnicodeEscape => {
                Some(self.digits_value(component.token(2)?, 16))
            }
            SyntaxKind::PosixProperty => Some('[' as u32),
            SyntaxKind::Text => Some(self.first_char(component.token(0)?)? as u32),
            SyntaxKind::Sequence => {
                let last = match component.children.last()? {
                    Element::Node(node) => node,
                    Element::Token(_) => return None,
                };
                if self.is_escaped_minus(last) {
                    return None;
                }
                self.range_value_unchecked(last)
            }
            _ => None,
        }
    }

    fn first_char(&self, token: &Token) -> Option<char> {
        self.lexer.text().char_at(token.start)
    }

    fn digits_value(&self, token: &Token, radix: u32) -> u32 {
        self.token_text(token)
            .chars()
            .filter_map(|ch| ch.to_digit(radix))
            .fold(0u32, |total, digit| total.wrapping_mul(radix).wrapping_add(digit))
            & 0xFFFF
    }
}

/// Char value of a single-letter escape such as `\n`. Other escaped chars stand for themselves.
fn map_escape_char(ch: char) -> char {
    match ch {
        'a' => '\u{07}',
        'b' => '\u{08}',
        'e' => '\u{1B}',
        'f' => '\u{0C}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\u{0B}',
        other => other,
    }
}
