
#[cfg(test)]
mod tests {
    use super::test_data::{setup_diagonal, setup_seeded_outcome};
    use rand::{rngs::StdRng, SeedableRng};
    use trial_fit::{
        points::sample_points,
        search::{evaluate, fit_with_rng, search, select_best, Candidate, SearchParamsBuilder},
        FitError,
    };

    #[test]
    fn test_exact_and_flat_candidates() {
        let points = setup_diagonal();

        let exact = evaluate(&points, &Candidate::new(1.0, 0.0)).unwrap();
        assert_eq!(exact.mean_abs_error, 0.0);

        let flat = evaluate(&points, &Candidate::new(0.0, 0.5)).unwrap();
        assert_eq!(flat.per_point_errors.to_vec(), vec![0.5, 0.5]);
        assert_eq!(flat.mean_abs_error, 0.5);
    }

    #[test]
    fn test_pipeline_reproducibility() {
        let first = setup_seeded_outcome(1000, 100, 42);
        let second = setup_seeded_outcome(1000, 100, 42);

        assert_eq!(first.points(), second.points());
        assert_eq!(first.trials(), second.trials());
    }

    #[test]
    fn test_pipeline_matches_manual_steps() {
        // Driving the stages by hand with the same RNG gives the same run.
        let mut rng = StdRng::seed_from_u64(3);
        let points = sample_points(300, &mut rng).unwrap();
        let trials = search(&points, 40, &mut rng).unwrap();
        let best = select_best(&trials).unwrap();

        let params = SearchParamsBuilder::new().n_points(300).n_trials(40).build();
        let outcome = fit_with_rng(&params, &mut StdRng::seed_from_u64(3)).unwrap();

        assert_eq!(outcome.points(), &points);
        assert_eq!(outcome.trials(), trials.as_slice());
        assert_eq!(outcome.best(), best);
        assert_eq!(outcome.seed(), None);
    }

    #[test]
    fn test_outcome_invariants() {
        let outcome = setup_seeded_outcome(500, 60, 9);
        let points = outcome.points();

        assert!(points
            .iter()
            .all(|p| (0.0..1.0).contains(&p.x) && (0.0..1.0).contains(&p.y)));

        for (i, trial) in outcome.trials().iter().enumerate() {
            assert_eq!(trial.trial_index, i + 1);
            assert_eq!(trial.per_point_errors.len(), points.len());
            let mean = trial.per_point_errors.mean().unwrap();
            assert!((trial.mean_abs_error - mean).abs() < 1e-12);
        }

        let best = outcome.best();
        assert!(outcome
            .trials()
            .iter()
            .all(|t| best.mean_abs_error <= t.mean_abs_error));
        // The first trial reaching the minimum is the one reported.
        let first_min = outcome
            .trials()
            .iter()
            .position(|t| t.mean_abs_error == best.mean_abs_error)
            .unwrap();
        assert_eq!(best.trial_index, first_min + 1);
    }

    #[test]
    fn test_uncorrelated_points_leave_error_floor() {
        // x and y are independent, so no line gets close to zero error.
        let outcome = setup_seeded_outcome(1000, 100, 42);
        assert!(outcome.best().mean_abs_error > 0.1);
    }

    #[test]
    fn test_minimal_run() {
        let outcome = setup_seeded_outcome(1, 1, 0);
        assert_eq!(outcome.points().len(), 1);
        assert_eq!(outcome.trials().len(), 1);
        assert_eq!(outcome.best().trial_index, 1);
        assert!(outcome.best().mean_abs_error.is_finite());
    }

    #[test]
    fn test_invalid_arguments() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            sample_points(0, &mut rng),
            Err(FitError::InvalidArgument(_))
        ));

        let params = SearchParamsBuilder::new().n_points(0).seed(1).build();
        assert!(matches!(
            trial_fit::search::fit(&params),
            Err(FitError::InvalidArgument(_))
        ));
    }
}
