// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::BTreeMap;
use core::fmt::Debug;
use core::ops::Range;

use crate::{AttributeRuns, Error, Run, RunAttribute, Segments, TextRange, TextStorage};

/// A block of text with keyed attribute runs.
///
/// Every key has its own [`AttributeRuns`]; adding or removing one key never disturbs another.
#[derive(Clone, Debug)]
pub struct AttributedText<T: Debug + TextStorage, A: RunAttribute> {
    text: T,
    runs: BTreeMap<A::Key, AttributeRuns<A>>,
}

impl<T: Debug + TextStorage, A: RunAttribute> AttributedText<T, A> {
    /// Creates an `AttributedText` with no attributes applied.
    pub fn new(text: T) -> Self {
        Self {
            text,
            runs: BTreeMap::new(),
        }
    }

    /// Borrows the underlying text storage.
    pub fn text(&self) -> &T {
        &self.text
    }

    /// Returns the length of the underlying text, in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the underlying text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Borrows the underlying text as `&str` when the storage is contiguous.
    pub fn as_str(&self) -> &str
    where
        T: AsRef<str>,
    {
        self.text.as_ref()
    }

    /// Replaces the text and drops every attribute.
    pub fn set_text(&mut self, text: T) {
        self.text = text;
        self.runs.clear();
    }

    /// Validates a byte `range` against this text.
    pub fn range(&self, range: Range<usize>) -> Result<TextRange, Error> {
        TextRange::new(&self.text, range)
    }

    /// Applies `attribute` over a validated `range`.
    ///
    /// Any value with the same key inside `range` is replaced.
    ///
    /// # Panics
    ///
    /// If `range` is reversed or reaches past the end of the text.
    pub fn add_attribute(&mut self, range: TextRange, attribute: A) {
        self.check_range(range);
        self.runs
            .entry(attribute.key())
            .or_default()
            .set(range, attribute);
    }

    /// Applies `attribute` over the byte `range` after validating it.
    ///
    /// On error the text is left unchanged.
    pub fn add_attribute_bytes(&mut self, range: Range<usize>, attribute: A) -> Result<(), Error> {
        let range = self.range(range).inspect_err(|err| {
            log::debug!("rejected add of {:?}: {err}", attribute.key());
        })?;
        self.add_attribute(range, attribute);
        Ok(())
    }

    /// Removes the attribute with `key` inside a validated `range`.
    ///
    /// Other keys, and coverage of `key` outside `range`, are left untouched.
    ///
    /// # Panics
    ///
    /// If `range` is reversed or reaches past the end of the text.
    pub fn remove_attribute(&mut self, range: TextRange, key: A::Key) {
        self.check_range(range);
        if let Some(runs) = self.runs.get_mut(&key) {
            runs.clear(range);
            if runs.is_empty() {
                self.runs.remove(&key);
            }
        }
    }

    /// Removes the attribute with `key` inside the byte `range` after validating it.
    pub fn remove_attribute_bytes(&mut self, range: Range<usize>, key: A::Key) -> Result<(), Error> {
        let range = self.range(range).inspect_err(|err| {
            log::debug!("rejected removal of {key:?}: {err}");
        })?;
        self.remove_attribute(range, key);
        Ok(())
    }

    /// Returns the value of `key` at byte `index`, if any.
    pub fn attribute_at(&self, key: A::Key, index: usize) -> Option<&A> {
        self.runs.get(&key)?.get(index)
    }

    /// Returns the value of `key` at byte `index` and the full range of the run holding it.
    pub fn attribute_with_range(&self, key: A::Key, index: usize) -> Option<(&A, Range<usize>)> {
        self.runs.get(&key)?.get_with_range(index)
    }

    /// Iterates over every attribute covering byte `index`, in key order.
    pub fn attributes_at(&self, index: usize) -> impl Iterator<Item = &A> + '_ {
        self.runs.values().filter_map(move |runs| runs.get(index))
    }

    /// Iterates over every run that overlaps `range`, in key order and then offset order.
    ///
    /// Yielded runs are not clipped to `range`.
    pub fn attributes_for_range(&self, range: TextRange) -> impl Iterator<Item = &Run<A>> + '_ {
        self.runs
            .values()
            .flat_map(move |runs| runs.overlapping(range))
    }

    /// Iterates over the keys that currently cover at least one byte.
    pub fn keys(&self) -> impl Iterator<Item = A::Key> + '_ {
        self.runs.keys().copied()
    }

    /// Returns the runs of `key`, if it covers any byte.
    pub fn runs_for(&self, key: A::Key) -> Option<&AttributeRuns<A>> {
        self.runs.get(&key)
    }

    /// Returns the total number of runs across all keys.
    pub fn run_count(&self) -> usize {
        self.runs.values().map(AttributeRuns::len).sum()
    }

    /// Iterates over the uniform segments of the text.
    pub fn segments(&self) -> Segments<'_, T, A> {
        Segments::new(self)
    }

    /// Drops every attribute.
    pub fn clear_attributes(&mut self) {
        self.runs.clear();
    }

    fn check_range(&self, range: TextRange) {
        assert!(
            range.start() <= range.end(),
            "invalid range {}..{}: start > end",
            range.start(),
            range.end()
        );
        assert!(
            range.end() <= self.len(),
            "range {:?} out of bounds for text of length {}",
            range.as_range(),
            self.len()
        );
    }
}
