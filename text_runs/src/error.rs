// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// A run list that does not exactly partition its text.
///
/// Carries a non-exhaustive [`ValidationErrorKind`] plus the position of the offending run, so a
/// failure can be traced back to a single entry of the run list.
///
/// A well-formed [`Block`](crate::Block) never produces this from
/// [`splice`](crate::Block::splice); it is reported when construction input is inconsistent, and
/// acts as a self-check on every edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The non-exhaustive category describing this error.
    kind: ValidationErrorKind,

    /// Index of the offending run, or the run count for coverage mismatches.
    index: usize,

    /// Start offset of the offending run, or `0` for coverage mismatches.
    start: usize,

    /// End offset of the offending run, or the covered length for coverage mismatches.
    end: usize,

    /// The offset the check expected to find.
    expected: usize,
}

impl ValidationError {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    /// The index of the offending run.
    ///
    /// For [`ValidationErrorKind::CoverageMismatch`] this is the number of runs checked.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The range of the offending run.
    ///
    /// For [`ValidationErrorKind::CoverageMismatch`] this is the range the runs actually covered.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The offset the failing check expected.
    ///
    /// This is the previous run's end for [`ValidationErrorKind::StartMismatch`], the run start
    /// for [`ValidationErrorKind::InvertedRun`], and the text length for
    /// [`ValidationErrorKind::CoverageMismatch`].
    pub fn expected(&self) -> usize {
        self.expected
    }

    pub(crate) fn start_mismatch(index: usize, run: Range<usize>, expected: usize) -> Self {
        Self {
            kind: ValidationErrorKind::StartMismatch,
            index,
            start: run.start,
            end: run.end,
            expected,
        }
    }

    pub(crate) fn inverted_run(index: usize, run: Range<usize>) -> Self {
        Self {
            kind: ValidationErrorKind::InvertedRun,
            index,
            start: run.start,
            end: run.end,
            expected: run.start,
        }
    }

    pub(crate) fn coverage_mismatch(run_count: usize, covered: usize, len: usize) -> Self {
        Self {
            kind: ValidationErrorKind::CoverageMismatch,
            index: run_count,
            start: 0,
            end: covered,
            expected: len,
        }
    }
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ValidationErrorKind::StartMismatch => write!(
                f,
                "run {} ({}..{}) does not start at previous run end {}",
                self.index, self.start, self.end, self.expected
            ),
            ValidationErrorKind::InvertedRun => write!(
                f,
                "run {} ({}..{}) ends before it starts",
                self.index, self.start, self.end
            ),
            ValidationErrorKind::CoverageMismatch => write!(
                f,
                "{} runs cover {}..{} but text length is {}",
                self.index, self.start, self.end, self.expected
            ),
        }
    }
}

impl core::error::Error for ValidationError {}

/// The non-exhaustive category of a [`ValidationError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationErrorKind {
    /// A run did not start where the previous run ended (a gap or an overlap).
    StartMismatch,

    /// A run ended before it started.
    InvertedRun,

    /// The runs together did not cover exactly the text length.
    CoverageMismatch,
}
