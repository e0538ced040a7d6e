// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Run, ValidationError};

/// Checks that `runs` exactly partitions a text of `len` characters.
///
/// Runs must start at `0`, each run must start where the previous one ended, no run may end
/// before it starts, and the last run must end at `len`. An empty run list is valid only for
/// empty text.
///
/// ## Example
///
/// ```
/// use text_runs::{Run, ValidationErrorKind, validate_runs};
///
/// let runs = [Run::new(0, 7, 'a'), Run::new(7, 10, 'b')];
/// assert!(validate_runs(&runs, 10).is_ok());
///
/// let err = validate_runs(&runs, 12).unwrap_err();
/// assert_eq!(err.kind(), ValidationErrorKind::CoverageMismatch);
/// ```
pub fn validate_runs<S>(runs: &[Run<S>], len: usize) -> Result<(), ValidationError> {
    let mut previous_end = 0;
    for (index, run) in runs.iter().enumerate() {
        if run.start() != previous_end {
            return Err(ValidationError::start_mismatch(
                index,
                run.start()..run.end(),
                previous_end,
            ));
        }
        if run.end() < run.start() {
            return Err(ValidationError::inverted_run(index, run.start()..run.end()));
        }
        previous_end = run.end();
    }
    if previous_end != len {
        return Err(ValidationError::coverage_mismatch(
            runs.len(),
            previous_end,
            len,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_runs;
    use crate::{Run, ValidationErrorKind};

    #[test]
    fn accepts_partition() {
        let runs = [Run::new(0, 7, 1), Run::new(7, 10, 2)];
        assert!(validate_runs(&runs, 10).is_ok());
    }

    #[test]
    fn accepts_empty_text() {
        assert!(validate_runs::<()>(&[], 0).is_ok());
        assert!(validate_runs(&[Run::new(0, 0, ())], 0).is_ok());
    }

    #[test]
    fn accepts_zero_length_runs_in_between() {
        let runs = [Run::new(0, 3, 1), Run::new(3, 3, 2), Run::new(3, 5, 3)];
        assert!(validate_runs(&runs, 5).is_ok());
    }

    #[test]
    fn rejects_first_run_not_at_zero() {
        let err = validate_runs(&[Run::new(1, 4, ())], 4).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::StartMismatch);
        assert_eq!(err.index(), 0);
        assert_eq!(err.range(), 1..4);
        assert_eq!(err.expected(), 0);
    }

    #[test]
    fn rejects_gap() {
        let runs = [Run::new(0, 3, 1), Run::new(4, 6, 2)];
        let err = validate_runs(&runs, 6).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::StartMismatch);
        assert_eq!(err.index(), 1);
        assert_eq!(err.expected(), 3);
    }

    #[test]
    fn rejects_overlap() {
        let runs = [Run::new(0, 4, 1), Run::new(3, 6, 2)];
        let err = validate_runs(&runs, 6).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::StartMismatch);
        assert_eq!(err.index(), 1);
        assert_eq!(err.range(), 3..6);
        assert_eq!(err.expected(), 4);
    }

    #[test]
    fn rejects_inverted_run() {
        let runs = [Run::new(0, 2, 1), Run::new_unchecked(2, 1, 2)];
        let err = validate_runs(&runs, 1).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvertedRun);
        assert_eq!(err.index(), 1);
    }

    #[test]
    fn rejects_short_and_long_coverage() {
        let runs = [Run::new(0, 7, 1), Run::new(7, 10, 2)];

        let err = validate_runs(&runs, 11).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::CoverageMismatch);
        assert_eq!(err.index(), 2);
        assert_eq!(err.range(), 0..10);
        assert_eq!(err.expected(), 11);

        let err = validate_runs(&runs, 9).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::CoverageMismatch);
        assert_eq!(err.expected(), 9);
    }

    #[test]
    fn rejects_missing_runs_for_text() {
        let err = validate_runs::<()>(&[], 3).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::CoverageMismatch);
        assert_eq!(err.index(), 0);
        assert_eq!(err.range(), 0..0);
    }
}
