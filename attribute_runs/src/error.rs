// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::Range;

use crate::TextStorage;

/// Error returned when a caller-provided range cannot address the text.
///
/// Carries a non-exhaustive [`ErrorKind`], the attempted range and the text length, plus the
/// enclosing character span when an endpoint split a UTF-8 sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    range: Range<usize>,
    text_len: usize,
    boundary: Option<BoundaryInfo>,
}

impl Error {
    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The range the caller asked for.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// The length in bytes of the text when the range was rejected.
    pub fn text_len(&self) -> usize {
        self.text_len
    }

    /// Details about the offending endpoint for [`ErrorKind::NotOnCharBoundary`].
    pub fn boundary(&self) -> Option<BoundaryInfo> {
        self.boundary
    }

    pub(crate) fn new(kind: ErrorKind, range: &Range<usize>, text_len: usize) -> Self {
        Self {
            kind,
            range: range.clone(),
            text_len,
            boundary: None,
        }
    }

    pub(crate) fn not_on_char_boundary<T: TextStorage + ?Sized>(
        text: &T,
        range: &Range<usize>,
        which: Endpoint,
    ) -> Self {
        let index = match which {
            Endpoint::Start => range.start,
            Endpoint::End => range.end,
        };
        let (char_start, char_end) = text.char_span_at(index).unwrap_or((index, index));
        Self {
            kind: ErrorKind::NotOnCharBoundary,
            range: range.clone(),
            text_len: text.len(),
            boundary: Some(BoundaryInfo {
                which,
                index,
                char_start,
                char_end,
            }),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Range { start, end } = self.range;
        match (self.kind, self.boundary) {
            (ErrorKind::InvalidBounds, _) => write!(
                f,
                "range {start}..{end} out of bounds for text of length {}",
                self.text_len
            ),
            (ErrorKind::InvalidRange, _) => {
                write!(f, "invalid range {start}..{end}: start > end")
            }
            (ErrorKind::NotOnCharBoundary, Some(b)) => write!(
                f,
                "range {start}..{end}: {} index {} splits char {}..{}",
                b.which, b.index, b.char_start, b.char_end
            ),
            (ErrorKind::NotOnCharBoundary, None) => {
                write!(f, "range {start}..{end} not on UTF-8 boundary")
            }
        }
    }
}

impl core::error::Error for Error {}

/// The category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An endpoint lies past the end of the text.
    InvalidBounds,

    /// The range had `start > end`.
    InvalidRange,

    /// An endpoint falls inside a multi-byte UTF-8 sequence.
    NotOnCharBoundary,
}

/// Which endpoint of a range failed boundary validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The `start` endpoint.
    Start,

    /// The `end` endpoint.
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::End => "end",
        })
    }
}

/// The offending index of a [`ErrorKind::NotOnCharBoundary`] error and the character it split.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundaryInfo {
    /// Which endpoint was invalid.
    pub which: Endpoint,

    /// The offending byte index.
    pub index: usize,

    /// The start byte index of the enclosing character.
    pub char_start: usize,

    /// The end byte index (exclusive) of the enclosing character.
    pub char_end: usize,
}
