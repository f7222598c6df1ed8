// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;

/// Text that attribute runs can be laid over.
///
/// Offsets are UTF-8 byte offsets. Implementors only need to report the length and the
/// char boundaries; attribute storage never reads the characters themselves.
pub trait TextStorage {
    /// The length of the text, in bytes.
    fn len(&self) -> usize;

    /// Returns `true` if the text is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns whether `index` falls on a UTF-8 character boundary.
    fn is_char_boundary(&self, index: usize) -> bool;

    /// Returns the byte span of the character containing `index`.
    ///
    /// When `index` is already a boundary the span is empty (`index..index`). Returns `None`
    /// when `index` is past the end of the text.
    fn char_span_at(&self, index: usize) -> Option<(usize, usize)> {
        let len = self.len();
        if index > len {
            return None;
        }
        if self.is_char_boundary(index) {
            return Some((index, index));
        }
        // A UTF-8 sequence is at most four bytes, so a boundary lies within three steps.
        let start = (index.saturating_sub(3)..index)
            .rev()
            .find(|&i| self.is_char_boundary(i))?;
        let end = (index + 1..=(index + 3).min(len)).find(|&i| self.is_char_boundary(i))?;
        Some((start, end))
    }
}

impl TextStorage for String {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        self.as_str().is_char_boundary(index)
    }
}

impl TextStorage for &str {
    fn len(&self) -> usize {
        str::len(self)
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        str::is_char_boundary(self, index)
    }
}

impl TextStorage for Arc<str> {
    fn len(&self) -> usize {
        str::len(self)
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        str::is_char_boundary(self, index)
    }
}

impl TextStorage for Box<str> {
    fn len(&self) -> usize {
        str::len(self)
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        str::is_char_boundary(self, index)
    }
}

#[cfg(test)]
mod tests {
    use super::TextStorage;
    use alloc::boxed::Box;
    use alloc::string::ToString;
    use alloc::sync::Arc;

    #[test]
    fn ascii_is_all_boundaries() {
        let s = "Hello";
        for i in 0..=s.len() {
            assert!(TextStorage::is_char_boundary(&s, i), "index {i}");
        }
        assert!(!TextStorage::is_char_boundary(&s, 6));
        assert_eq!(s.char_span_at(3), Some((3, 3)));
        assert_eq!(s.char_span_at(6), None);
    }

    #[test]
    fn char_span_of_multibyte() {
        // "é" is two bytes, "€" is three.
        let s = "é€x";
        assert_eq!(s.char_span_at(1), Some((0, 2)));
        assert_eq!(s.char_span_at(3), Some((2, 5)));
        assert_eq!(s.char_span_at(4), Some((2, 5)));
        assert_eq!(s.char_span_at(5), Some((5, 5)));
    }

    #[test]
    fn char_span_of_four_byte_codepoint() {
        let s = "a\u{1F600}b";
        assert_eq!(s.len(), 6);
        for i in 2..5 {
            assert_eq!(s.char_span_at(i), Some((1, 5)), "index {i}");
        }
    }

    #[test]
    fn owned_storages_agree() {
        let s = "é€x";
        let owned = s.to_string();
        let arc: Arc<str> = Arc::from(s);
        let boxed: Box<str> = Box::from(s);
        for i in 0..=s.len() {
            let expected = s.char_span_at(i);
            assert_eq!(owned.char_span_at(i), expected);
            assert_eq!(arc.char_span_at(i), expected);
            assert_eq!(boxed.char_span_at(i), expected);
        }
    }
}
