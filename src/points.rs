use ndarray::{Array1, ArrayView1};

use crate::FitError;

pub mod sampler;
pub use sampler::sample_points;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Fixed, ordered point set shared by every trial of a run.
///
/// Coordinates are stored column-wise so candidates can be scored with
/// whole-array operations; `get` and `iter` hand back plain [`Point`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    xs: Array1<f64>,
    ys: Array1<f64>,
}

impl PointSet {
    pub fn new(xs: Array1<f64>, ys: Array1<f64>) -> Result<Self, FitError> {
        if xs.len() != ys.len() {
            return Err(FitError::invalid(format!(
                "x and y columns differ in length ({} vs {})",
                xs.len(),
                ys.len()
            )));
        }
        Ok(Self { xs, ys })
    }

    pub fn from_points(points: &[Point]) -> Self {
        let xs = points.iter().map(|p| p.x).collect::<Array1<f64>>();
        let ys = points.iter().map(|p| p.y).collect::<Array1<f64>>();
        Self { xs, ys }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn xs(&self) -> ArrayView1<'_, f64> {
        self.xs.view()
    }

    pub fn ys(&self) -> ArrayView1<'_, f64> {
        self.ys.view()
    }

    pub fn get(&self, i: usize) -> Option<Point> {
        Some(Point {
            x: *self.xs.get(i)?,
            y: *self.ys.get(i)?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.xs
            .iter()
            .zip(self.ys.iter())
            .map(|(&x, &y)| Point { x, y })
    }
}
