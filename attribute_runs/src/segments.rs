// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform segments of an [`AttributedText`].
//!
//! The boundaries of every run of every key split the text into contiguous, non-overlapping
//! segments. Within a segment the set of active attributes is constant.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Range;

use smallvec::SmallVec;

use crate::{AttributedText, RunAttribute, TextStorage};

/// Inline capacity for the attributes active over one segment.
///
/// Attribute vocabularies are small closed sets, so this rarely spills.
const INLINE_ACTIVE: usize = 12;

/// Iterator over the uniform segments of an [`AttributedText`].
///
/// Each item is a non-empty byte range together with the attributes active over all of it, in
/// key order. Segments cover the whole text, including stretches with no attributes.
///
/// # Examples
///
/// ```
/// use attribute_runs::{AttributedText, RunAttribute};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Weight(u16);
///
/// impl RunAttribute for Weight {
///     type Key = ();
///     fn key(&self) {}
/// }
///
/// let mut text = AttributedText::new("hello");
/// text.add_attribute_bytes(1..3, Weight(700)).unwrap();
///
/// let segments: Vec<_> = text
///     .segments()
///     .map(|(range, active)| (range, active.len()))
///     .collect();
/// assert_eq!(segments, vec![(0..1, 0), (1..3, 1), (3..5, 0)]);
/// ```
#[derive(Debug)]
pub struct Segments<'a, T: Debug + TextStorage, A: RunAttribute> {
    attributed: &'a AttributedText<T, A>,
    boundaries: Vec<usize>,
    index: usize,
}

impl<'a, T: Debug + TextStorage, A: RunAttribute> Segments<'a, T, A> {
    pub(crate) fn new(attributed: &'a AttributedText<T, A>) -> Self {
        let mut boundaries = Vec::with_capacity(2 + attributed.run_count() * 2);
        boundaries.push(0);
        boundaries.push(attributed.len());
        for key in attributed.keys() {
            for run in attributed.runs_for(key).into_iter().flatten() {
                boundaries.push(run.range.start);
                boundaries.push(run.range.end);
            }
        }
        boundaries.sort_unstable();
        boundaries.dedup();
        Self {
            attributed,
            boundaries,
            index: 0,
        }
    }
}

impl<'a, T: Debug + TextStorage, A: RunAttribute> Iterator for Segments<'a, T, A> {
    type Item = (Range<usize>, ActiveAttributes<'a, A>);

    fn next(&mut self) -> Option<Self::Item> {
        let (&start, &end) = (
            self.boundaries.get(self.index)?,
            self.boundaries.get(self.index + 1)?,
        );
        self.index += 1;
        debug_assert!(start < end, "boundaries are sorted and deduplicated");
        let active = ActiveAttributes {
            attributes: self.attributed.attributes_at(start).collect(),
        };
        Some((start..end, active))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.boundaries.len().saturating_sub(self.index + 1);
        (remaining, Some(remaining))
    }
}

impl<T: Debug + TextStorage, A: RunAttribute> ExactSizeIterator for Segments<'_, T, A> {}

/// The attributes active over one segment, in key order.
#[derive(Clone, Debug)]
pub struct ActiveAttributes<'a, A> {
    attributes: SmallVec<[&'a A; INLINE_ACTIVE]>,
}

impl<'a, A: RunAttribute> ActiveAttributes<'a, A> {
    /// Returns the active attribute with `key`, if any.
    pub fn get(&self, key: A::Key) -> Option<&'a A> {
        self.attributes.iter().copied().find(|attr| attr.key() == key)
    }

    /// Iterates over the active attributes.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'a A> + '_ {
        self.attributes.iter().copied()
    }

    /// Returns the number of active attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns `true` if no attribute is active.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::{AttributedText, RunAttribute};
    use alloc::vec;
    use alloc::vec::Vec;

    #[derive(Clone, Debug, PartialEq)]
    enum Attr {
        Color(char),
        Size(u8),
    }

    impl RunAttribute for Attr {
        type Key = u8;

        fn key(&self) -> u8 {
            match self {
                Self::Color(_) => 0,
                Self::Size(_) => 1,
            }
        }
    }

    #[test]
    fn empty_text_yields_nothing() {
        let at = AttributedText::<&str, Attr>::new("");
        assert_eq!(at.segments().count(), 0);
    }

    #[test]
    fn bare_text_is_one_segment() {
        let at = AttributedText::<&str, Attr>::new("hello");
        let mut segments = at.segments();
        let (range, active) = segments.next().unwrap();
        assert_eq!(range, 0..5);
        assert!(active.is_empty());
        assert!(segments.next().is_none());
    }

    #[test]
    fn overlapping_keys_split_segments() {
        let mut at = AttributedText::new("abcdef");
        at.add_attribute_bytes(1..4, Attr::Color('r')).unwrap();
        at.add_attribute_bytes(2..5, Attr::Size(9)).unwrap();

        let segments: Vec<_> = at
            .segments()
            .map(|(range, active)| (range, active.iter().cloned().collect::<Vec<_>>()))
            .collect();
        assert_eq!(
            segments,
            vec![
                (0..1, vec![]),
                (1..2, vec![Attr::Color('r')]),
                (2..4, vec![Attr::Color('r'), Attr::Size(9)]),
                (4..5, vec![Attr::Size(9)]),
                (5..6, vec![]),
            ]
        );
    }

    #[test]
    fn lookup_by_key_and_size_hint() {
        let mut at = AttributedText::new("abcdef");
        at.add_attribute_bytes(0..3, Attr::Color('g')).unwrap();
        at.add_attribute_bytes(3..6, Attr::Color('b')).unwrap();

        let mut segments = at.segments();
        assert_eq!(segments.len(), 2);
        let (_, first) = segments.next().unwrap();
        assert_eq!(first.get(0), Some(&Attr::Color('g')));
        assert_eq!(first.get(1), None);
        assert_eq!(segments.len(), 1);
        let (_, second) = segments.next().unwrap();
        assert_eq!(second.get(0), Some(&Attr::Color('b')));
        assert_eq!(segments.len(), 0);
    }
}
