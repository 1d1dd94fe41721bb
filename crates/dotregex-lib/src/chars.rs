//! Positioned characters: the parser's input.
//!
//! A pattern usually arrives embedded in a host-language literal, so every
//! character remembers the span it was decoded from. The parser works on
//! character indices and on the decoded `text()`; diagnostics and capture
//! spans are reported back in source coordinates through [`VirtualCharSequence::source_span`].

use std::convert::Infallible;
use std::str::FromStr;

use rowan::{TextRange, TextSize};

/// One decoded character and the source span it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VirtualChar {
    pub ch: char,
    pub span: TextRange,
}

impl VirtualChar {
    pub fn new(ch: char, span: TextRange) -> Self {
        Self { ch, span }
    }
}

/// Immutable sequence of [`VirtualChar`]s plus the decoded text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VirtualCharSequence {
    chars: Vec<VirtualChar>,
    text: String,
    /// Byte offset of each char in `text`, with `text.len()` appended.
    offsets: Vec<TextSize>,
}

impl VirtualCharSequence {
    pub fn new(chars: Vec<VirtualChar>) -> Self {
        let text: String = chars.iter().map(|vc| vc.ch).collect();
        let mut offsets = Vec::with_capacity(chars.len() + 1);
        let mut offset = TextSize::from(0);
        for vc in &chars {
            offsets.push(offset);
            offset += TextSize::of(vc.ch);
        }
        offsets.push(offset);
        Self {
            chars,
            text,
            offsets,
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&VirtualChar> {
        self.chars.get(index)
    }

    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).map(|vc| vc.ch)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VirtualChar> + '_ {
        self.chars.iter()
    }

    /// Decoded pattern text. The CST is built over this string.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Decoded text of the chars in `start..end`.
    pub fn slice(&self, start: usize, end: usize) -> &str {
        let from: usize = self.text_offset(start).into();
        let to: usize = self.text_offset(end).into();
        &self.text[from..to]
    }

    /// Byte offset of char `index` in `text()`. Indices past the end clamp to the text length.
    pub fn text_offset(&self, index: usize) -> TextSize {
        let last = self.offsets.len().saturating_sub(1);
        self.offsets
            .get(index.min(last))
            .copied()
            .unwrap_or_default()
    }

    /// Char index whose text offset is `offset` (or the first char starting after it).
    pub fn char_index(&self, offset: TextSize) -> usize {
        match self.offsets.binary_search(&offset) {
            Ok(index) | Err(index) => index.min(self.chars.len()),
        }
    }

    /// Source span of the chars in `start..end`.
    ///
    /// An empty range is a zero-length span at the start of char `start`, or
    /// at the end of the last char when `start` is past the end.
    pub fn source_span(&self, start: usize, end: usize) -> TextRange {
        let Some(last) = self.chars.last() else {
            return TextRange::empty(TextSize::from(0));
        };

        if start >= end {
            let at = self
                .chars
                .get(start)
                .map_or(last.span.end(), |vc| vc.span.start());
            return TextRange::empty(at);
        }

        let first = self.chars.get(start).map_or(last.span.end(), |vc| vc.span.start());
        let end = self
            .chars
            .get(end - 1)
            .map_or(last.span.end(), |vc| vc.span.end());
        TextRange::new(first, end.max(first))
    }

    /// Maps a range in `text()` coordinates (as found in the CST) to source coordinates.
    pub fn source_range(&self, range: TextRange) -> TextRange {
        self.source_span(self.char_index(range.start()), self.char_index(range.end()))
    }
}

impl From<&str> for VirtualCharSequence {
    /// Identity mapping: each char's span is its byte range in `text`.
    fn from(text: &str) -> Self {
        let chars = text
            .char_indices()
            .map(|(offset, ch)| {
                let start = TextSize::from(offset as u32);
                VirtualChar::new(ch, TextRange::at(start, TextSize::of(ch)))
            })
            .collect();
        Self::new(chars)
    }
}

impl FromStr for VirtualCharSequence {
    type Err = Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(text))
    }
}
