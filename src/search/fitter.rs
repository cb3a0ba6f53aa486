use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};

use super::{params::SearchParams, select::select_best, trial::search_with, TrialResult};
use crate::{
    points::{sample_points, PointSet},
    FitError,
};

/// Frozen result of one run: the point set, every trial and the winner.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    points: PointSet,
    trials: Vec<TrialResult>,
    best_index: usize,
    seed: Option<u64>,
}

impl SearchOutcome {
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn trials(&self) -> &[TrialResult] {
        &self.trials
    }

    pub fn best(&self) -> &TrialResult {
        &self.trials[self.best_index]
    }

    /// Seed the run was started from, if it went through [`fit`].
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Runs the whole pipeline from a seeded [`StdRng`].
///
/// When `params.seed` is unset a seed is drawn from the thread RNG and
/// recorded on the outcome so the run can be replayed.
pub fn fit(params: &SearchParams) -> Result<SearchOutcome, FitError> {
    let seed = params.seed.unwrap_or_else(rand::random);
    info!(seed, "starting random line search");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut outcome = fit_with_rng(params, &mut rng)?;
    outcome.seed = Some(seed);
    Ok(outcome)
}

pub fn fit_with_rng<R: Rng + ?Sized>(
    params: &SearchParams,
    rng: &mut R,
) -> Result<SearchOutcome, FitError> {
    params.validate()?;
    let SearchParams {
        n_points,
        n_trials,
        ranges,
        seed: _,
        top_n: _,
    } = params;

    let points = sample_points(*n_points, rng)?;
    let trials = search_with(&points, *n_trials, ranges, rng)?;
    debug!(n_trials = trials.len(), "search finished");

    let best = select_best(&trials)?;
    info!(
        trial = best.trial_index,
        a = best.candidate.a,
        b = best.candidate.b,
        mean_abs_error = best.mean_abs_error,
        "selected best candidate"
    );
    let best_index = best.trial_index - 1;

    Ok(SearchOutcome {
        points,
        trials,
        best_index,
        seed: None,
    })
}
