use ndarray::Array1;
use rand::Rng;
use tracing::debug;

use super::PointSet;
use crate::FitError;

/// Draws `n` points with both coordinates uniform on `[0, 1)`.
///
/// Consumes exactly `2 * n` draws from `rng`, x before y for each point.
/// The coordinates are independent, so there is no line to recover and the
/// best fit keeps a non-trivial error floor.
pub fn sample_points<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<PointSet, FitError> {
    if n == 0 {
        return Err(FitError::invalid("point count must be positive"));
    }

    let mut xs = Array1::zeros(n);
    let mut ys = Array1::zeros(n);
    for i in 0..n {
        xs[i] = rng.gen::<f64>();
        ys[i] = rng.gen::<f64>();
    }
    debug!(n, "sampled point set");

    PointSet::new(xs, ys)
}
