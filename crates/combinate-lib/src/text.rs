//! Input positions.

use std::fmt;
use std::ops;

use serde::Serialize;

/// Byte range into the parsed text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} after end {end}");
        Self { start, end }
    }

    /// Zero-width span at `offset`.
    pub fn empty(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> ops::Range<usize> {
        self.start..self.end
    }
}

impl From<ops::Range<usize>> for Span {
    fn from(range: ops::Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Read position over the input text.
///
/// Parsers advance the cursor on success and [`restore`](Self::restore) it
/// to their start offset on failure, so a failed parser never leaves the
/// cursor moved.
#[derive(Clone, Debug)]
pub struct TextCursor<'t> {
    text: &'t str,
    offset: usize,
}

impl<'t> TextCursor<'t> {
    pub fn new(text: &'t str) -> Self {
        Self { text, offset: 0 }
    }

    /// The whole input.
    #[inline]
    pub fn text(&self) -> &'t str {
        self.text
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Unconsumed input.
    #[inline]
    pub fn rest(&self) -> &'t str {
        &self.text[self.offset..]
    }

    pub fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume the next character.
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.offset += c.len_utf8();
        Some(c)
    }

    /// Move forward by `bytes`, which must end on a char boundary.
    pub fn advance(&mut self, bytes: usize) {
        let offset = self.offset + bytes;
        debug_assert!(self.text.is_char_boundary(offset), "advance past char boundary");
        self.offset = offset;
    }

    /// Return to an earlier offset.
    #[inline]
    pub fn restore(&mut self, offset: usize) {
        debug_assert!(offset <= self.text.len());
        self.offset = offset;
    }

    /// Span from `start` to the current offset.
    #[inline]
    pub fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.offset)
    }

    pub fn slice(&self, span: Span) -> &'t str {
        &self.text[span.range()]
    }
}
