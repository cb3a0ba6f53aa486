use crate::FitError;

pub const DEFAULT_N_POINTS: usize = 1000;
pub const DEFAULT_N_TRIALS: usize = 100;
pub const DEFAULT_TOP_N: usize = 5;

/// Closed intervals the slope `a` and intercept `b` of each candidate are drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateRanges {
    pub slope: (f64, f64),
    pub intercept: (f64, f64),
}

impl CandidateRanges {
    pub fn validate(&self) -> Result<(), FitError> {
        check_range("slope", self.slope)?;
        check_range("intercept", self.intercept)
    }
}

fn check_range(name: &str, (lo, hi): (f64, f64)) -> Result<(), FitError> {
    if !lo.is_finite() || !hi.is_finite() {
        return Err(FitError::invalid(format!(
            "{name} range bounds must be finite, got [{lo}, {hi}]"
        )));
    }
    if lo > hi {
        return Err(FitError::invalid(format!(
            "{name} range is empty: [{lo}, {hi}]"
        )));
    }
    if !(hi - lo).is_finite() {
        return Err(FitError::invalid(format!(
            "{name} range is too wide to sample: [{lo}, {hi}]"
        )));
    }
    Ok(())
}

impl Default for CandidateRanges {
    fn default() -> Self {
        Self {
            slope: (-2.0, 2.0),
            intercept: (-1.0, 2.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub n_points: usize,
    pub n_trials: usize,
    pub ranges: CandidateRanges,
    /// `None` lets [`fit`](super::fit) pick a fresh seed per run.
    pub seed: Option<u64>,
    pub top_n: usize,
}

impl SearchParams {
    pub fn validate(&self) -> Result<(), FitError> {
        if self.n_points == 0 {
            return Err(FitError::invalid("n_points must be positive"));
        }
        if self.n_trials == 0 {
            return Err(FitError::invalid("n_trials must be positive"));
        }
        if self.top_n == 0 {
            return Err(FitError::invalid("top_n must be positive"));
        }
        self.ranges.validate()
    }
}

// Builder for SearchParams
#[derive(Debug, Clone)]
pub struct SearchParamsBuilder {
    n_points: usize,
    n_trials: usize,
    ranges: CandidateRanges,
    seed: Option<u64>,
    top_n: usize,
}

impl SearchParamsBuilder {
    pub fn new() -> Self {
        Self {
            n_points: DEFAULT_N_POINTS,
            n_trials: DEFAULT_N_TRIALS,
            ranges: CandidateRanges::default(),
            seed: None,
            top_n: DEFAULT_TOP_N,
        }
    }

    pub fn n_points(mut self, n_points: usize) -> Self {
        self.n_points = n_points;
        self
    }

    pub fn n_trials(mut self, n_trials: usize) -> Self {
        self.n_trials = n_trials;
        self
    }

    pub fn slope_range(mut self, lo: f64, hi: f64) -> Self {
        self.ranges.slope = (lo, hi);
        self
    }

    pub fn intercept_range(mut self, lo: f64, hi: f64) -> Self {
        self.ranges.intercept = (lo, hi);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn build(self) -> SearchParams {
        SearchParams {
            n_points: self.n_points,
            n_trials: self.n_trials,
            ranges: self.ranges,
            seed: self.seed,
            top_n: self.top_n,
        }
    }
}

impl Default for SearchParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParamsBuilder::new().build()
    }
}
