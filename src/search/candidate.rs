use std::fmt;

use ndarray::{Array1, ArrayView1};

use crate::{points::PointSet, Evaluation, FitError, FittedModel};

#[cfg(test)]
mod tests;

/// A proposed line `y = a * x + b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub a: f64,
    pub b: f64,
}

impl Candidate {
    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn predict_single(&self, x: f64) -> f64 {
        self.a * x + self.b
    }
}

impl FittedModel for Candidate {
    fn predict(&self, x: ArrayView1<f64>) -> Array1<f64> {
        x.mapv(|v| self.predict_single(v))
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y = {:.6} * x + {:.6}", self.a, self.b)
    }
}

/// Scores `candidate` by mean absolute error over every point.
pub fn evaluate(points: &PointSet, candidate: &Candidate) -> Result<Evaluation, FitError> {
    if points.is_empty() {
        return Err(FitError::invalid("cannot evaluate a candidate on zero points"));
    }

    let y_hat = candidate.predict(points.xs());
    let mut per_point_errors = &points.ys() - &y_hat;
    per_point_errors.mapv_inplace(f64::abs);
    let mean_abs_error = per_point_errors.sum() / points.len() as f64;

    Ok(Evaluation {
        mean_abs_error,
        per_point_errors,
    })
}
