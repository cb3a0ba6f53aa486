use std::fmt;

use itertools::{Itertools, MinMaxResult};
use tracing::warn;

use crate::{
    search::{select_best, SearchOutcome, TrialResult},
    FitError,
};

pub mod chart;
pub use chart::{ChartRequest, ChartSink, CsvChartWriter, LineSegment};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl ErrorStats {
    pub fn from_trials(trials: &[TrialResult]) -> Result<Self, FitError> {
        let errors = trials.iter().map(|t| t.mean_abs_error);
        let (min, max) = match errors.clone().minmax_by(f64::total_cmp) {
            MinMaxResult::NoElements => {
                return Err(FitError::invalid("no trial results to summarise"))
            }
            MinMaxResult::OneElement(v) => (v, v),
            MinMaxResult::MinMax(lo, hi) => (lo, hi),
        };
        let mean = errors.sum::<f64>() / trials.len() as f64;
        Ok(Self { min, max, mean })
    }
}

/// Textual report of a run, rendered through [`fmt::Display`].
#[derive(Debug, Clone)]
pub struct Summary<'a> {
    pub n_points: usize,
    pub n_trials: usize,
    pub seed: Option<u64>,
    pub best: &'a TrialResult,
    pub stats: ErrorStats,
    /// Lowest errors first; equal errors keep trial order.
    pub top: Vec<&'a TrialResult>,
}

impl<'a> Summary<'a> {
    /// Reuses the best trial the pipeline already selected.
    pub fn new(outcome: &'a SearchOutcome, top_n: usize) -> Result<Self, FitError> {
        let mut summary = Self::with_best(
            outcome.points().len(),
            outcome.trials(),
            outcome.best(),
            top_n,
        )?;
        summary.seed = outcome.seed();
        Ok(summary)
    }

    /// Summarises a bare trial slice, selecting its best trial first.
    pub fn from_trials(
        n_points: usize,
        trials: &'a [TrialResult],
        top_n: usize,
    ) -> Result<Self, FitError> {
        let best = select_best(trials)?;
        Self::with_best(n_points, trials, best, top_n)
    }

    fn with_best(
        n_points: usize,
        trials: &'a [TrialResult],
        best: &'a TrialResult,
        top_n: usize,
    ) -> Result<Self, FitError> {
        let stats = ErrorStats::from_trials(trials)?;
        let top = rank_trials(trials).into_iter().take(top_n).collect();
        Ok(Self {
            n_points,
            n_trials: trials.len(),
            seed: None,
            best,
            stats,
            top,
        })
    }
}

/// Hands the best-fit chart to `sink`, then builds the text summary.
///
/// A sink failure is logged and dropped; the summary is built from the
/// outcome either way.
pub fn summarise<'a>(
    outcome: &'a SearchOutcome,
    top_n: usize,
    sink: Option<&mut dyn ChartSink>,
) -> Result<Summary<'a>, FitError> {
    if let Some(sink) = sink {
        if let Err(err) = sink.render(&ChartRequest::best_fit(outcome)) {
            warn!(%err, "could not render chart");
        }
    }
    Summary::new(outcome, top_n)
}

/// Sorts trials by ascending error, breaking ties by trial index.
pub fn rank_trials(trials: &[TrialResult]) -> Vec<&TrialResult> {
    trials
        .iter()
        .sorted_by(|l, r| {
            l.mean_abs_error
                .total_cmp(&r.mean_abs_error)
                .then(l.trial_index.cmp(&r.trial_index))
        })
        .collect()
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== TRIAL AND ERROR LINE FITTING RESULTS ===")?;
        writeln!(
            f,
            "Parameters: N={} points, K={} trials",
            self.n_points, self.n_trials
        )?;
        if let Some(seed) = self.seed {
            writeln!(f, "Seed: {seed}")?;
        }
        writeln!(f)?;

        let best = self.best;
        writeln!(f, "=== BEST LINE ===")?;
        writeln!(f, "Trial number: {}", best.trial_index)?;
        writeln!(f, "a (slope): {:.6}", best.candidate.a)?;
        writeln!(f, "b (intercept): {:.6}", best.candidate.b)?;
        writeln!(f, "Equation: {}", best.candidate)?;
        writeln!(f, "Minimal average error: {:.6}", best.mean_abs_error)?;
        writeln!(f)?;

        writeln!(f, "General Statistics:")?;
        writeln!(f, "Smallest error: {:.6}", self.stats.min)?;
        writeln!(f, "Largest error: {:.6}", self.stats.max)?;
        writeln!(f, "Average error of all trials: {:.6}", self.stats.mean)?;
        writeln!(f)?;

        writeln!(f, "=== TOP {} RESULTS ===", self.top.len())?;
        for (rank, trial) in self.top.iter().enumerate() {
            writeln!(
                f,
                "{}. Trial {}: a={:.4}, b={:.4}, error={:.6}",
                rank + 1,
                trial.trial_index,
                trial.candidate.a,
                trial.candidate.b,
                trial.mean_abs_error
            )?;
        }
        Ok(())
    }
}
