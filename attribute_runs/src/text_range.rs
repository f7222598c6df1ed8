// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{Endpoint, Error, ErrorKind, TextStorage};

/// A byte range that has been validated against a text buffer.
///
/// A `TextRange` satisfies `start <= end <= len`, and both endpoints lie on UTF-8 character
/// boundaries of the text it was validated for. It does not remember which text that was; reusing
/// it against a different buffer is the caller's responsibility.
///
/// ## Example
///
/// ```
/// use attribute_runs::{ErrorKind, TextRange};
///
/// let text = "naïve";
/// let range = TextRange::new(&text, 0..4).unwrap();
/// assert_eq!(range.len(), 4);
///
/// // "ï" occupies bytes 2..4.
/// let err = TextRange::new(&text, 0..3).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::NotOnCharBoundary);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextRange {
    start: usize,
    end: usize,
}

impl TextRange {
    /// Validates `range` against `text`.
    pub fn new<T: TextStorage + ?Sized>(text: &T, range: Range<usize>) -> Result<Self, Error> {
        let text_len = text.len();
        if range.start > range.end {
            return Err(Error::new(ErrorKind::InvalidRange, &range, text_len));
        }
        if range.end > text_len {
            return Err(Error::new(ErrorKind::InvalidBounds, &range, text_len));
        }
        if !text.is_char_boundary(range.start) {
            return Err(Error::not_on_char_boundary(text, &range, Endpoint::Start));
        }
        if !text.is_char_boundary(range.end) {
            return Err(Error::not_on_char_boundary(text, &range, Endpoint::End));
        }
        Ok(Self {
            start: range.start,
            end: range.end,
        })
    }

    /// The range covering all of `text`.
    pub fn full<T: TextStorage + ?Sized>(text: &T) -> Self {
        Self {
            start: 0,
            end: text.len(),
        }
    }

    /// Creates a `TextRange` without validation.
    ///
    /// For callers that already maintain the range invariants.
    #[must_use]
    #[inline]
    pub const fn new_unchecked(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The start byte offset.
    #[must_use]
    #[inline]
    pub const fn start(self) -> usize {
        self.start
    }

    /// The end byte offset (exclusive).
    #[must_use]
    #[inline]
    pub const fn end(self) -> usize {
        self.end
    }

    /// The length of the range in bytes.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the range covers no bytes.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Returns this range as a `Range<usize>`.
    #[must_use]
    #[inline]
    pub fn as_range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<TextRange> for Range<usize> {
    #[inline]
    fn from(value: TextRange) -> Self {
        value.as_range()
    }
}

#[cfg(test)]
mod tests {
    use super::TextRange;
    use crate::{Endpoint, ErrorKind};

    #[test]
    fn accepts_valid_ranges() {
        let t = "Hello!";
        assert!(TextRange::new(&t, 0..0).is_ok());
        assert!(TextRange::new(&t, 6..6).is_ok());
        assert_eq!(TextRange::new(&t, 1..3).unwrap().as_range(), 1..3);
        assert_eq!(TextRange::full(&t).as_range(), 0..6);
    }

    #[test]
    #[expect(
        clippy::reversed_empty_ranges,
        reason = "We want an invalid range for testing."
    )]
    fn rejects_reversed() {
        let t = "Hello!";
        let err = TextRange::new(&t, 4..3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
        assert_eq!(err.range(), 4..3);
        assert_eq!(err.text_len(), 6);
    }

    #[test]
    fn rejects_out_of_bounds() {
        let t = "Hello!";
        let err = TextRange::new(&t, 2..7).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBounds);
        let err = TextRange::new(&t, 7..8).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBounds);
        assert_eq!(err.range(), 7..8);
    }

    #[test]
    fn rejects_split_characters() {
        // "é" is 2 bytes in UTF-8; index 1 is not a boundary.
        let t = "éclair";
        let err = TextRange::new(&t, 1..3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotOnCharBoundary);
        let b = err.boundary().expect("boundary info");
        assert_eq!(b.which, Endpoint::Start);
        assert_eq!((b.index, b.char_start, b.char_end), (1, 0, 2));

        let err = TextRange::new(&t, 0..1).unwrap_err();
        let b = err.boundary().expect("boundary info");
        assert_eq!(b.which, Endpoint::End);
        assert_eq!((b.index, b.char_start, b.char_end), (1, 0, 2));
    }

    #[test]
    fn length_and_emptiness() {
        assert_eq!(TextRange::new_unchecked(3, 8).len(), 5);
        assert!(TextRange::new_unchecked(2, 2).is_empty());
        assert!(TextRange::full(&"").is_empty());
    }
}
