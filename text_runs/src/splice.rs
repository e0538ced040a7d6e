// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Run list rewriting for a single text edit.

use alloc::vec::Vec;

use crate::Run;

/// A normalized edit, in characters.
///
/// The edit removes `remove` characters starting at `offset`, then inserts `insert_len`
/// characters at `offset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Edit {
    pub(crate) offset: usize,
    pub(crate) remove: usize,
    pub(crate) insert_len: usize,
}

impl Edit {
    /// End of the removed window in pre-edit offsets.
    #[inline]
    fn window_end(self) -> usize {
        self.offset + self.remove
    }

    /// Moves a pre-edit offset at or after the removed window to its post-edit position.
    #[inline]
    fn shift(self, offset: usize) -> usize {
        debug_assert!(
            offset >= self.window_end(),
            "only offsets past the removed window can be shifted"
        );
        offset - self.remove + self.insert_len
    }
}

/// Rewrites `runs` so they partition the text produced by `edit`.
///
/// `runs` must partition the pre-edit text. Runs are classified against the removed window
/// `[offset, offset + remove)`:
///
/// - runs ending before `offset` are kept as-is;
/// - the first other run (the one covering `offset`, or ending exactly on it) absorbs the inserted
///   characters and loses whatever part of the window it covered;
/// - runs starting at or after the window end are shifted by the net length change;
/// - runs entirely inside the window are dropped;
/// - a run straddling the window end loses its leading part and starts right after the insert.
///
/// A run whose content is entirely removed is dropped rather than kept as an empty run. If no run
/// absorbs inserted characters (the run list was empty), `fallback` styles them.
pub(crate) fn splice_runs<S: Clone>(
    runs: &[Run<S>],
    edit: Edit,
    fallback: Option<&S>,
) -> Vec<Run<S>> {
    let window_end = edit.window_end();
    let mut out = Vec::with_capacity(runs.len() + 1);
    let mut absorbed = false;

    for run in runs {
        if run.end() < edit.offset {
            out.push(run.clone());
            continue;
        }

        if !absorbed {
            debug_assert!(
                run.start() <= edit.offset,
                "the first run reaching the edit must cover its offset"
            );
            absorbed = true;
            let end = edit.offset.max(run.end().saturating_sub(edit.remove)) + edit.insert_len;
            if end == run.start() && !run.is_empty() {
                continue;
            }
            out.push(run.with_bounds(run.start(), end));
            continue;
        }

        if run.start() >= window_end {
            out.push(run.with_bounds(edit.shift(run.start()), edit.shift(run.end())));
        } else if run.end() > window_end {
            out.push(run.with_bounds(edit.offset + edit.insert_len, edit.shift(run.end())));
        }
    }

    if !absorbed && edit.insert_len > 0 {
        if let Some(style) = fallback {
            out.push(Run::new(
                edit.offset,
                edit.offset + edit.insert_len,
                style.clone(),
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{Edit, splice_runs};
    use crate::Run;
    use alloc::vec;
    use alloc::vec::Vec;

    fn edit(offset: usize, remove: usize, insert_len: usize) -> Edit {
        Edit {
            offset,
            remove,
            insert_len,
        }
    }

    fn abc() -> Vec<Run<char>> {
        vec![Run::new(0, 3, 'a'), Run::new(3, 6, 'b'), Run::new(6, 9, 'c')]
    }

    #[test]
    fn insert_inside_run_grows_it() {
        let out = splice_runs(&abc(), edit(4, 0, 2), None);
        assert_eq!(
            out,
            [Run::new(0, 3, 'a'), Run::new(3, 8, 'b'), Run::new(8, 11, 'c')]
        );
    }

    #[test]
    fn insert_on_boundary_extends_preceding_run() {
        let out = splice_runs(&abc(), edit(3, 0, 1), None);
        assert_eq!(
            out,
            [Run::new(0, 4, 'a'), Run::new(4, 7, 'b'), Run::new(7, 10, 'c')]
        );
    }

    #[test]
    fn insert_at_start_extends_first_run() {
        let out = splice_runs(&abc(), edit(0, 0, 2), None);
        assert_eq!(
            out,
            [Run::new(0, 5, 'a'), Run::new(5, 8, 'b'), Run::new(8, 11, 'c')]
        );
    }

    #[test]
    fn insert_at_end_extends_last_run() {
        let out = splice_runs(&abc(), edit(9, 0, 1), None);
        assert_eq!(
            out,
            [Run::new(0, 3, 'a'), Run::new(3, 6, 'b'), Run::new(6, 10, 'c')]
        );
    }

    #[test]
    fn delete_across_runs_drops_covered_run() {
        // Remove offsets 2..7: the tail of `a`, all of `b`, the head of `c`.
        let out = splice_runs(&abc(), edit(2, 5, 0), None);
        assert_eq!(out, [Run::new(0, 2, 'a'), Run::new(2, 4, 'c')]);
    }

    #[test]
    fn replace_across_runs_puts_insert_in_first_run() {
        let out = splice_runs(&abc(), edit(2, 5, 3), None);
        assert_eq!(out, [Run::new(0, 5, 'a'), Run::new(5, 7, 'c')]);
    }

    #[test]
    fn delete_whole_first_run_leaves_no_empty_run() {
        let out = splice_runs(&abc(), edit(0, 3, 0), None);
        assert_eq!(out, [Run::new(0, 3, 'b'), Run::new(3, 6, 'c')]);
    }

    #[test]
    fn delete_exact_middle_run() {
        let out = splice_runs(&abc(), edit(3, 3, 0), None);
        assert_eq!(out, [Run::new(0, 3, 'a'), Run::new(3, 6, 'c')]);
    }

    #[test]
    fn delete_everything() {
        let out = splice_runs(&abc(), edit(0, 9, 0), None);
        assert!(out.is_empty());
    }

    #[test]
    fn replace_everything_keeps_first_style() {
        let out = splice_runs(&abc(), edit(0, 9, 4), None);
        assert_eq!(out, [Run::new(0, 4, 'a')]);
    }

    #[test]
    fn no_op_on_boundary_is_identity() {
        for offset in 0..=9 {
            assert_eq!(splice_runs(&abc(), edit(offset, 0, 0), None), abc());
        }
    }

    #[test]
    fn existing_empty_runs_survive_unrelated_edits() {
        let runs = vec![Run::new(0, 2, 'a'), Run::new(2, 2, 'z'), Run::new(2, 4, 'b')];
        assert_eq!(splice_runs(&runs, edit(2, 0, 0), None), runs);
        assert_eq!(
            splice_runs(&runs, edit(3, 0, 1), None),
            [Run::new(0, 2, 'a'), Run::new(2, 2, 'z'), Run::new(2, 5, 'b')]
        );
    }

    #[test]
    fn empty_runs_use_fallback() {
        assert_eq!(
            splice_runs::<char>(&[], edit(0, 0, 3), Some(&'d')),
            [Run::new(0, 3, 'd')]
        );
        assert!(splice_runs::<char>(&[], edit(0, 0, 3), None).is_empty());
        assert!(splice_runs::<char>(&[], edit(0, 0, 0), Some(&'d')).is_empty());
    }
}
