use super::trial::TrialResult;
use crate::FitError;

/// Returns the trial with the lowest mean absolute error.
///
/// Left-to-right scan that only moves on a strict improvement, so the
/// earliest trial wins an exact tie. The result borrows from `results`.
pub fn select_best(results: &[TrialResult]) -> Result<&TrialResult, FitError> {
    let (first, rest) = results
        .split_first()
        .ok_or_else(|| FitError::invalid("no trial results to select from"))?;

    Ok(rest.iter().fold(first, |best, trial| {
        if trial.mean_abs_error < best.mean_abs_error {
            trial
        } else {
            best
        }
    }))
}
