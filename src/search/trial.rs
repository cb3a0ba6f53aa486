use ndarray::Array1;
use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};
use tracing::{debug, trace};

use super::{
    candidate::{evaluate, Candidate},
    params::CandidateRanges,
};
use crate::{points::PointSet, Evaluation, FitError};

#[cfg(feature = "use-rayon")]
use rayon::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct TrialResult {
    pub candidate: Candidate,
    pub mean_abs_error: f64,
    pub per_point_errors: Array1<f64>,
    /// 1-based position in generation order.
    pub trial_index: usize,
}

/// Runs `k` independent trials with the default candidate ranges.
pub fn search<R: Rng + ?Sized>(
    points: &PointSet,
    k: usize,
    rng: &mut R,
) -> Result<Vec<TrialResult>, FitError> {
    search_with(points, k, &CandidateRanges::default(), rng)
}

/// Draws `k` candidates from `ranges` and scores each one against `points`.
///
/// Each trial draws the slope and then the intercept, so a given seed always
/// produces the same candidate stream. No draw depends on an earlier trial's
/// error. With the `use-rayon` feature the scoring runs in parallel, but
/// candidates are still drawn up front and results keep trial order.
pub fn search_with<R: Rng + ?Sized>(
    points: &PointSet,
    k: usize,
    ranges: &CandidateRanges,
    rng: &mut R,
) -> Result<Vec<TrialResult>, FitError> {
    if k == 0 {
        return Err(FitError::invalid("trial count must be positive"));
    }
    if points.is_empty() {
        return Err(FitError::invalid("cannot search over zero points"));
    }
    ranges.validate()?;

    let slope = Uniform::new_inclusive(ranges.slope.0, ranges.slope.1);
    let intercept = Uniform::new_inclusive(ranges.intercept.0, ranges.intercept.1);

    let mut candidates = Vec::with_capacity(k);
    for _ in 0..k {
        let a = slope.sample(rng);
        let b = intercept.sample(rng);
        candidates.push(Candidate::new(a, b));
    }
    debug!(k, n_points = points.len(), "drew candidates");

    let trials_iter;

    #[cfg(not(feature = "use-rayon"))]
    {
        trials_iter = candidates.into_iter().enumerate()
    }
    #[cfg(feature = "use-rayon")]
    {
        trials_iter = candidates.into_par_iter().enumerate()
    }

    trials_iter
        .map(|(i, candidate)| {
            let Evaluation {
                mean_abs_error,
                per_point_errors,
            } = evaluate(points, &candidate)?;
            trace!(trial = i + 1, a = candidate.a, b = candidate.b, mean_abs_error);
            Ok(TrialResult {
                candidate,
                mean_abs_error,
                per_point_errors,
                trial_index: i + 1,
            })
        })
        .collect()
}
