use serde::{Deserialize, Serialize};

/// A byte range `[start, end)` into a string.
///
/// Spans always fall on `char` boundaries of the string they were produced
/// for, so `&s[span.range()]` never panics for that string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn range(self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// Slices `s` with this span, or `None` if the span is out of bounds or
    /// splits a character.
    pub fn slice(self, s: &str) -> Option<&str> {
        s.get(self.range())
    }

    /// Converts this byte span into a UTF-16 `(location, length)` pair
    /// against `s`, the unit used by `NSRange` and Java strings.
    ///
    /// Returns `None` if the span does not fall on `char` boundaries of `s`.
    pub fn to_utf16(self, s: &str) -> Option<(usize, usize)> {
        let prefix = s.get(..self.start)?;
        let inner = self.slice(s)?;
        let location = prefix.encode_utf16().count();
        let length = inner.encode_utf16().count();
        Some((location, length))
    }
}
