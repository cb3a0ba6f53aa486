use approx::assert_abs_diff_eq;
use ndarray::array;
use rand::{rngs::StdRng, SeedableRng};

use super::*;
use crate::points::{sample_points, Point};

fn diagonal() -> PointSet {
    PointSet::from_points(&[Point { x: 0.0, y: 0.0 }, Point { x: 1.0, y: 1.0 }])
}

#[test]
fn test_exact_fit_has_zero_error() {
    let eval = evaluate(&diagonal(), &Candidate::new(1.0, 0.0)).unwrap();
    assert_eq!(eval.mean_abs_error, 0.0);
    assert_eq!(eval.per_point_errors, array![0.0, 0.0]);
}

#[test]
fn test_flat_line_through_middle() {
    let eval = evaluate(&diagonal(), &Candidate::new(0.0, 0.5)).unwrap();
    assert_eq!(eval.per_point_errors, array![0.5, 0.5]);
    assert_eq!(eval.mean_abs_error, 0.5);
}

#[test]
fn test_empty_points_rejected() {
    let empty = PointSet::from_points(&[]);
    let res = evaluate(&empty, &Candidate::new(1.0, 0.0));
    assert!(matches!(res, Err(FitError::InvalidArgument(_))));
}

#[test]
fn test_single_point() {
    let points = PointSet::from_points(&[Point { x: 0.25, y: 0.75 }]);
    let eval = evaluate(&points, &Candidate::new(2.0, -1.0)).unwrap();
    // 2 * 0.25 - 1 = -0.5, |0.75 + 0.5| = 1.25
    assert_abs_diff_eq!(eval.mean_abs_error, 1.25, epsilon = 1e-12);
    assert!(eval.mean_abs_error.is_finite());
}

#[test]
fn test_errors_aligned_with_points_and_averaged() {
    let mut rng = StdRng::seed_from_u64(42);
    let points = sample_points(200, &mut rng).unwrap();
    let candidate = Candidate::new(-1.3, 0.8);
    let eval = evaluate(&points, &candidate).unwrap();

    assert_eq!(eval.per_point_errors.len(), points.len());
    for (p, &err) in points.iter().zip(eval.per_point_errors.iter()) {
        assert_abs_diff_eq!(err, (p.y - candidate.predict_single(p.x)).abs(), epsilon = 1e-12);
        assert!(err >= 0.0);
    }
    let mean = eval.per_point_errors.mean().unwrap();
    assert_abs_diff_eq!(eval.mean_abs_error, mean, epsilon = 1e-12);
}

#[test]
fn test_predict_and_display() {
    let candidate = Candidate::new(0.5, -0.25);
    assert_eq!(candidate.predict(array![0.0, 1.0].view()), array![-0.25, 0.25]);
    assert_eq!(candidate.to_string(), "y = 0.500000 * x + -0.250000");
}
