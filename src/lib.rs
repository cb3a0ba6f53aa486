pub mod error;
pub mod points;
pub mod report;
pub mod search;
use ndarray::{Array1, ArrayView1};

pub use error::{FitError, ReportError};

/// Scores of one candidate line against a point set.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub mean_abs_error: f64,
    /// `|y_i - predicted_i|`, aligned with the points it was computed from.
    pub per_point_errors: Array1<f64>,
}

pub trait FittedModel {
    fn predict(&self, x: ArrayView1<f64>) -> Array1<f64>;
}
