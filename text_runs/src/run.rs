// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// A styled interval `[start, end)` of character offsets.
///
/// A `Run` is immutable: edits that move or resize it produce a new `Run`. The style is opaque to
/// this crate; it is stored and handed back, never interpreted.
///
/// A run only checks its own `start <= end`. Whether a sequence of runs partitions a piece of text
/// is checked by [`validate_runs`](crate::validate_runs) and by [`Block`](crate::Block).
///
/// ## Example
///
/// ```
/// use text_runs::Run;
///
/// let run = Run::new(2, 5, "bold");
/// assert_eq!(run.len(), 3);
/// assert_eq!(run.range(), 2..5);
/// assert_eq!(*run.style(), "bold");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Run<S> {
    start: usize,
    end: usize,
    style: S,
}

impl<S> Run<S> {
    /// Creates a run covering characters `start..end`.
    ///
    /// # Panics
    ///
    /// Panics if `end < start`.
    #[inline]
    pub fn new(start: usize, end: usize, style: S) -> Self {
        assert!(end >= start, "run end {end} is before its start {start}");
        Self { start, end, style }
    }

    /// Creates a run without checking `start <= end`.
    #[cfg(test)]
    pub(crate) const fn new_unchecked(start: usize, end: usize, style: S) -> Self {
        Self { start, end, style }
    }

    /// The start character offset.
    #[must_use]
    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// The end character offset (exclusive).
    #[must_use]
    #[inline]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// The number of characters covered by this run.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if this run covers no characters.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the covered offsets as a `Range<usize>`.
    #[must_use]
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The style attached to this run.
    #[inline]
    pub fn style(&self) -> &S {
        &self.style
    }

    /// Consumes the run, returning its style.
    #[inline]
    pub fn into_style(self) -> S {
        self.style
    }
}

impl<S: Clone> Run<S> {
    /// A run with the same style over different bounds.
    #[inline]
    pub(crate) fn with_bounds(&self, start: usize, end: usize) -> Self {
        debug_assert!(end >= start, "rebuilt run {start}..{end} is inverted");
        Self {
            start,
            end,
            style: self.style.clone(),
        }
    }
}

impl<S> From<Run<S>> for Range<usize> {
    #[inline]
    fn from(value: Run<S>) -> Self {
        value.start..value.end
    }
}
