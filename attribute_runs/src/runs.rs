// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Range;

use crate::TextRange;

/// An attribute value that can be stored in runs.
///
/// Values with the same key occupy the same run list, so at any byte offset there is at most one
/// value per key. Values with different keys are independent.
pub trait RunAttribute: Clone + PartialEq + Debug {
    /// Identifies which run list a value belongs to.
    type Key: Copy + Ord + Debug;

    /// Returns the key of this value.
    fn key(&self) -> Self::Key;

    /// Returns `true` if adjacent runs holding `self` and `other` may become one run.
    ///
    /// The merged run keeps one of the two values, so implementations whose equality ignores
    /// some observable detail should compare that detail here too.
    fn merges_with(&self, other: &Self) -> bool {
        self == other
    }
}

/// A value applied over a non-empty byte range.
#[derive(Clone, Debug, PartialEq)]
pub struct Run<A> {
    /// The byte range covered by this run.
    pub range: Range<usize>,
    /// The value applied over `range`.
    pub value: A,
}

/// The runs of a single attribute key.
///
/// Runs are kept sorted by offset, never overlap and are never empty. Adjacent runs whose values
/// [merge](RunAttribute::merges_with) are joined, so the same observable coverage always has the
/// same representation.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeRuns<A> {
    runs: Vec<Run<A>>,
}

impl<A> Default for AttributeRuns<A> {
    fn default() -> Self {
        Self { runs: Vec::new() }
    }
}

impl<A: RunAttribute> AttributeRuns<A> {
    /// Creates an empty run list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of runs.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Returns `true` if no byte is covered.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Iterates over the runs in offset order.
    pub fn iter(&self) -> core::slice::Iter<'_, Run<A>> {
        self.runs.iter()
    }

    /// Returns the value covering `index`, if any.
    pub fn get(&self, index: usize) -> Option<&A> {
        self.get_with_range(index).map(|(value, _)| value)
    }

    /// Returns the value covering `index` along with the full range of its run.
    pub fn get_with_range(&self, index: usize) -> Option<(&A, Range<usize>)> {
        let ix = self.runs.partition_point(|run| run.range.end <= index);
        let run = self.runs.get(ix)?;
        run.range
            .contains(&index)
            .then(|| (&run.value, run.range.clone()))
    }

    /// Iterates over the runs that overlap `range`.
    ///
    /// Yielded runs are not clipped to `range`.
    pub fn overlapping(&self, range: TextRange) -> impl Iterator<Item = &Run<A>> + '_ {
        let first = self.runs.partition_point(|run| run.range.end <= range.start());
        self.runs[first..]
            .iter()
            .take_while(move |run| run.range.start < range.end())
    }

    /// Applies `value` over `range`, replacing whatever this key held there.
    ///
    /// Coverage outside `range` is left untouched. An empty range is a no-op.
    pub fn set(&mut self, range: TextRange, value: A) {
        if range.is_empty() {
            return;
        }
        let ix = self.clear(range);
        self.runs.insert(
            ix,
            Run {
                range: range.as_range(),
                value,
            },
        );
        self.coalesce_around(ix);
    }

    /// Removes coverage inside `range`, splitting runs that straddle its edges.
    ///
    /// Returns the index at which a run starting at `range.start()` would be inserted.
    pub fn clear(&mut self, range: TextRange) -> usize {
        let first = self.runs.partition_point(|run| run.range.end <= range.start());
        if range.is_empty() {
            return first;
        }
        let last = first
            + self.runs[first..].partition_point(|run| run.range.start < range.end());
        if first == last {
            return first;
        }

        let head = &self.runs[first];
        let left = (head.range.start < range.start()).then(|| Run {
            range: head.range.start..range.start(),
            value: head.value.clone(),
        });
        let tail = &self.runs[last - 1];
        let right = (tail.range.end > range.end()).then(|| Run {
            range: range.end()..tail.range.end,
            value: tail.value.clone(),
        });
        log::trace!(
            "clearing {:?}: dropping {} run(s), keeping left {:?} right {:?}",
            range.as_range(),
            last - first,
            left.as_ref().map(|run| run.range.clone()),
            right.as_ref().map(|run| run.range.clone()),
        );

        let insert_at = first + usize::from(left.is_some());
        drop(self.runs.splice(first..last, left.into_iter().chain(right)));
        insert_at
    }

    /// Drops every run.
    pub fn clear_all(&mut self) {
        self.runs.clear();
    }

    fn coalesce_around(&mut self, ix: usize) {
        if ix + 1 < self.runs.len() {
            let (current, next) = (&self.runs[ix], &self.runs[ix + 1]);
            if current.range.end == next.range.start && current.value.merges_with(&next.value) {
                let end = next.range.end;
                self.runs[ix].range.end = end;
                self.runs.remove(ix + 1);
                log::trace!("merged run at {ix} with its successor");
            }
        }
        if ix > 0 {
            let (prev, current) = (&self.runs[ix - 1], &self.runs[ix]);
            if prev.range.end == current.range.start && prev.value.merges_with(&current.value) {
                let end = current.range.end;
                self.runs[ix - 1].range.end = end;
                self.runs.remove(ix);
                log::trace!("merged run at {ix} with its predecessor");
            }
        }
    }
}

impl<'a, A> IntoIterator for &'a AttributeRuns<A> {
    type Item = &'a Run<A>;
    type IntoIter = core::slice::Iter<'a, Run<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{AttributeRuns, Run, RunAttribute};
    use crate::TextRange;
    use alloc::vec::Vec;
    use core::ops::Range;

    impl RunAttribute for char {
        type Key = ();

        fn key(&self) {}
    }

    /// Equal by magnitude, but only merges with the same sign.
    #[derive(Clone, Copy, Debug)]
    struct Signed(i8);

    impl PartialEq for Signed {
        fn eq(&self, other: &Self) -> bool {
            self.0.unsigned_abs() == other.0.unsigned_abs()
        }
    }

    impl RunAttribute for Signed {
        type Key = ();

        fn key(&self) {}

        fn merges_with(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    fn r(range: Range<usize>) -> TextRange {
        TextRange::new_unchecked(range.start, range.end)
    }

    fn snapshot(runs: &AttributeRuns<char>) -> Vec<(Range<usize>, char)> {
        runs.iter()
            .map(|Run { range, value }| (range.clone(), *value))
            .collect()
    }

    #[test]
    fn set_into_empty() {
        let mut runs = AttributeRuns::new();
        runs.set(r(2..5), 'a');
        assert_eq!(snapshot(&runs), [(2..5, 'a')]);
        assert_eq!(runs.get(1), None);
        assert_eq!(runs.get(2), Some(&'a'));
        assert_eq!(runs.get(4), Some(&'a'));
        assert_eq!(runs.get(5), None);
    }

    #[test]
    fn set_overwrites_middle() {
        let mut runs = AttributeRuns::new();
        runs.set(r(0..10), 'a');
        runs.set(r(3..6), 'b');
        assert_eq!(snapshot(&runs), [(0..3, 'a'), (3..6, 'b'), (6..10, 'a')]);
        assert_eq!(runs.get_with_range(7), Some((&'a', 6..10)));
    }

    #[test]
    fn set_spanning_several_runs() {
        let mut runs = AttributeRuns::new();
        runs.set(r(0..2), 'a');
        runs.set(r(3..5), 'b');
        runs.set(r(6..9), 'c');
        runs.set(r(1..7), 'd');
        assert_eq!(snapshot(&runs), [(0..1, 'a'), (1..7, 'd'), (7..9, 'c')]);
    }

    #[test]
    fn set_is_idempotent() {
        let mut once = AttributeRuns::new();
        once.set(r(0..4), 'x');
        once.set(r(2..8), 'y');
        let mut twice = once.clone();
        twice.set(r(2..8), 'y');
        assert_eq!(once, twice);
    }

    #[test]
    fn equal_neighbours_merge() {
        let mut runs = AttributeRuns::new();
        runs.set(r(0..3), 'a');
        runs.set(r(6..9), 'a');
        runs.set(r(3..6), 'a');
        assert_eq!(snapshot(&runs), [(0..9, 'a')]);
        assert_eq!(runs.len(), 1);
    }

    #[test]
    fn different_neighbours_stay_apart() {
        let mut runs = AttributeRuns::new();
        runs.set(r(0..3), 'a');
        runs.set(r(3..6), 'b');
        assert_eq!(snapshot(&runs), [(0..3, 'a'), (3..6, 'b')]);
    }

    #[test]
    fn clear_splits_run() {
        let mut runs = AttributeRuns::new();
        runs.set(r(0..11), 'u');
        runs.clear(r(3..8));
        assert_eq!(snapshot(&runs), [(0..3, 'u'), (8..11, 'u')]);
        for i in 3..8 {
            assert_eq!(runs.get(i), None, "index {i}");
        }
    }

    #[test]
    fn clear_outside_coverage_is_noop() {
        let mut runs = AttributeRuns::new();
        runs.set(r(4..6), 'a');
        let before = runs.clone();
        runs.clear(r(0..4));
        runs.clear(r(6..10));
        runs.clear(r(5..5));
        assert_eq!(runs, before);
    }

    #[test]
    fn clear_whole_runs() {
        let mut runs = AttributeRuns::new();
        runs.set(r(1..2), 'a');
        runs.set(r(4..5), 'b');
        runs.clear(r(0..6));
        assert!(runs.is_empty());
    }

    #[test]
    fn empty_set_is_noop() {
        let mut runs = AttributeRuns::new();
        runs.set(r(0..4), 'a');
        runs.set(r(2..2), 'b');
        assert_eq!(snapshot(&runs), [(0..4, 'a')]);
    }

    #[test]
    fn overlapping_reports_unclipped_runs() {
        let mut runs = AttributeRuns::new();
        runs.set(r(0..2), 'a');
        runs.set(r(3..5), 'b');
        runs.set(r(6..9), 'c');
        let hits: Vec<_> = runs.overlapping(r(1..4)).map(|run| run.value).collect();
        assert_eq!(hits, ['a', 'b']);
        assert_eq!(runs.overlapping(r(2..3)).count(), 0);
    }

    #[test]
    fn merge_follows_merges_with() {
        let mut runs = AttributeRuns::new();
        runs.set(r(0..3), Signed(2));
        runs.set(r(3..6), Signed(-2));
        runs.set(r(6..9), Signed(-2));
        let found: Vec<_> = runs.iter().map(|run| (run.range.clone(), run.value.0)).collect();
        assert_eq!(found, [(0..3, 2), (3..9, -2)]);
        assert_eq!(runs.get(4).map(|value| value.0), Some(-2));
    }
}
