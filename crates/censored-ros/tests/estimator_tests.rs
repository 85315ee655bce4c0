//! End-to-end tests for the ROS estimator
//!
//! The multiple-limit scenario below is worked through by hand: every
//! count, exceedance probability, plotting position, and imputed value is
//! checked against the closed-form arithmetic.

use approx::assert_relative_eq;
use censored_ros::{ImputationStrategy, Observation, QuantileFamily, RosEstimator};

/// Twelve observations censored at three distinct limits (2, 4, and 10).
///
/// Canonical order equals id order: four nondetects ascending, then eight
/// detects ascending.
fn multiple_limit_observations() -> Vec<Observation> {
    vec![
        Observation::nondetect(0, 2.0),
        Observation::nondetect(1, 4.0),
        Observation::nondetect(2, 4.0),
        Observation::nondetect(3, 10.0),
        Observation::detected(4, 3.0),
        Observation::detected(5, 5.0),
        Observation::detected(6, 6.0),
        Observation::detected(7, 10.0),
        Observation::detected(8, 12.0),
        Observation::detected(9, 40.0),
        Observation::detected(10, 78.0),
        Observation::detected(11, 120.0),
    ]
}

#[test]
fn test_multiple_limits_cohn_counts() {
    let result = RosEstimator::new()
        .estimate(&multiple_limit_observations())
        .unwrap();

    let limits = result.detection_limits();
    assert_eq!(limits.len(), 3);

    assert_eq!(limits[0].limit, 2.0);
    assert_eq!(limits[1].limit, 4.0);
    assert_eq!(limits[2].limit, 10.0);

    assert_eq!(
        limits.iter().map(|l| l.detects).collect::<Vec<_>>(),
        vec![1, 2, 5]
    );
    assert_eq!(
        limits.iter().map(|l| l.below).collect::<Vec<_>>(),
        vec![1, 4, 7]
    );
    assert_eq!(
        limits.iter().map(|l| l.censored_at).collect::<Vec<_>>(),
        vec![1, 2, 1]
    );

    // pe[i] = pe[i+1] + A/(A+B) * (1 - pe[i+1]), folded from the top limit
    assert_relative_eq!(limits[0].exceedance, 29.0 / 36.0, epsilon = 1e-12);
    assert_relative_eq!(limits[1].exceedance, 11.0 / 18.0, epsilon = 1e-12);
    assert_relative_eq!(limits[2].exceedance, 5.0 / 12.0, epsilon = 1e-12);
}

#[test]
fn test_multiple_limits_ranks() {
    let result = RosEstimator::new()
        .estimate(&multiple_limit_observations())
        .unwrap();
    let records = result.records();

    let indices: Vec<usize> = records.iter().map(|r| r.limit_index.unwrap()).collect();
    assert_eq!(indices, vec![0, 1, 1, 2, 0, 1, 1, 2, 2, 2, 2, 2]);

    let ranks: Vec<u32> = records.iter().map(|r| r.raw_rank.unwrap()).collect();
    assert_eq!(ranks, vec![1, 1, 2, 1, 1, 1, 2, 1, 2, 3, 4, 5]);

    // No detected ties here, so averaged ranks coincide with raw ranks.
    for record in records {
        assert_relative_eq!(
            record.averaged_rank.unwrap(),
            record.raw_rank.unwrap() as f64,
            epsilon = 1e-12
        );
    }
}

#[test]
fn test_multiple_limits_plotting_positions() {
    let result = RosEstimator::new()
        .estimate(&multiple_limit_observations())
        .unwrap();
    let positions: Vec<f64> = result
        .records()
        .iter()
        .map(|r| r.plotting_position.unwrap())
        .collect();

    let expected = [
        // censored: (1 - pe[i]) * rank / (C + 1)
        7.0 / 72.0,
        7.0 / 54.0,
        7.0 / 27.0,
        7.0 / 24.0,
        // detected: (1 - pe[i]) + (pe[i] - pe[i+1]) * rank / (A + 1)
        7.0 / 24.0,
        49.0 / 108.0,
        14.0 / 27.0,
        47.0 / 72.0,
        13.0 / 18.0,
        19.0 / 24.0,
        31.0 / 36.0,
        67.0 / 72.0,
    ];
    for (actual, expected) in positions.iter().zip(expected) {
        assert_relative_eq!(*actual, expected, epsilon = 1e-12);
    }
}

#[test]
fn test_multiple_limits_fit_and_imputation() {
    let result = RosEstimator::new()
        .estimate(&multiple_limit_observations())
        .unwrap();
    assert_eq!(result.strategy(), ImputationStrategy::Regression);
    assert_eq!(result.n_total(), 12);
    assert_eq!(result.n_censored(), 4);
    assert_eq!(result.n_detected(), 8);

    let fit = result.fit().unwrap();
    assert_relative_eq!(fit.slope, 1.9788476705667544, epsilon = 1e-6);
    assert_relative_eq!(fit.intercept, 1.8395963181817931, epsilon = 1e-6);
    assert_relative_eq!(fit.correlation, 0.9721755045083502, epsilon = 1e-6);

    let imputed: Vec<f64> = result
        .censored_records()
        .iter()
        .map(|r| r.final_value)
        .collect();
    let expected = [
        0.48285277591155323,
        0.6751447907195415,
        1.754162287553551,
        2.1258129136223656,
    ];
    for (actual, expected) in imputed.iter().zip(expected) {
        assert_relative_eq!(*actual, expected, epsilon = 1e-6);
    }

    // Every imputed value sits below its reported limit.
    for record in result.censored_records() {
        assert!(record.final_value < record.value);
        assert!(record.final_value > 0.0);
    }

    // Detected observations are never altered.
    for record in result.records().iter().filter(|r| !r.censored) {
        assert_eq!(record.final_value, record.value);
        assert!(record.estimate.is_none());
    }
}

#[test]
fn test_detected_ties_average_their_ranks() {
    let observations = vec![
        Observation::nondetect(0, 2.0),
        Observation::detected(1, 4.0),
        Observation::detected(2, 4.0),
        Observation::detected(3, 9.0),
    ];
    let result = RosEstimator::new().estimate(&observations).unwrap();
    let records = result.records();

    assert_eq!(records[1].raw_rank, Some(1));
    assert_eq!(records[2].raw_rank, Some(2));
    assert_relative_eq!(records[1].averaged_rank.unwrap(), 1.5, epsilon = 1e-12);
    assert_relative_eq!(records[2].averaged_rank.unwrap(), 1.5, epsilon = 1e-12);
    assert_relative_eq!(records[3].averaged_rank.unwrap(), 3.0, epsilon = 1e-12);
}

#[test]
fn test_minimum_below_all_limits_gets_synthetic_entry() {
    // The detect at 1.0 sits below the only recorded limit, so an entry at
    // the data minimum anchors the table.
    let observations = vec![
        Observation::nondetect(0, 5.0),
        Observation::detected(1, 1.0),
        Observation::detected(2, 7.0),
    ];
    let result = RosEstimator::new().estimate(&observations).unwrap();
    assert_eq!(result.strategy(), ImputationStrategy::Regression);

    let limits = result.detection_limits();
    assert_eq!(limits.len(), 2);
    assert_eq!(limits[0].limit, 1.0);
    assert_eq!(limits[1].limit, 5.0);
    assert_eq!(limits[0].detects, 1);
    assert_eq!(limits[0].below, 0);
    assert_eq!(limits[0].censored_at, 0);
    assert_eq!(limits[1].detects, 1);
    assert_eq!(limits[1].below, 2);
    assert_eq!(limits[1].censored_at, 1);

    // Nothing falls below the data minimum, so its exceedance is exactly 1.
    assert_relative_eq!(limits[0].exceedance, 1.0, epsilon = 1e-12);
    assert_relative_eq!(limits[1].exceedance, 1.0 / 3.0, epsilon = 1e-12);

    // The nondetect shares the plotting position of the detect at 1.0, so
    // the (exact, two-point) fit reproduces that detect's value.
    let fit = result.fit().unwrap();
    assert_relative_eq!(fit.correlation, 1.0, epsilon = 1e-9);
    assert_relative_eq!(
        result.censored_records()[0].final_value,
        1.0,
        epsilon = 1e-9
    );
}

#[test]
fn test_passthrough_preserves_everything() {
    let observations = vec![
        Observation::detected(0, 9.0),
        Observation::detected(1, 3.0),
        Observation::detected(2, 6.0),
    ];
    let result = RosEstimator::new().estimate(&observations).unwrap();

    assert_eq!(result.strategy(), ImputationStrategy::PassThrough);
    assert!(result.fit().is_none());
    assert!(result.detection_limits().is_empty());
    assert_eq!(result.n_censored(), 0);
    assert_eq!(result.censored_fraction(), 0.0);

    // Records come back in ascending value order, untouched.
    assert_eq!(result.final_values(), vec![3.0, 6.0, 9.0]);
    for record in result.records() {
        assert_eq!(record.final_value, record.value);
        assert!(record.plotting_position.is_none());
        assert!(record.raw_rank.is_none());
    }
}

#[test]
fn test_half_limit_when_single_detect() {
    let observations = vec![
        Observation::nondetect(0, 2.0),
        Observation::nondetect(1, 2.0),
        Observation::nondetect(2, 2.0),
        Observation::detected(3, 5.0),
    ];
    let result = RosEstimator::new().estimate(&observations).unwrap();

    assert_eq!(result.strategy(), ImputationStrategy::HalfLimit);
    assert!(result.fit().is_none());
    for record in result.censored_records() {
        assert_eq!(record.final_value, 1.0);
        assert!(record.plotting_position.is_none());
        assert!(record.quantile_score.is_none());
        assert!(record.estimate.is_none());
        // Ranks and limit indices are still reported for diagnostics.
        assert!(record.raw_rank.is_some());
        assert!(record.limit_index.is_some());
    }

    let limits = result.detection_limits();
    assert_eq!(limits.len(), 1);
    assert_eq!(limits[0].detects, 1);
    assert_eq!(limits[0].below, 3);
    assert_eq!(limits[0].censored_at, 3);
    assert_eq!(limits[0].exceedance, 0.0);
}

#[test]
fn test_half_limit_when_heavily_censored() {
    // 9 of 11 censored (~82%) exceeds the 80% threshold even though two
    // detects are available.
    let mut observations: Vec<Observation> =
        (0..9).map(|i| Observation::nondetect(i, 4.0)).collect();
    observations.push(Observation::detected(9, 5.0));
    observations.push(Observation::detected(10, 10.0));

    let result = RosEstimator::new().estimate(&observations).unwrap();
    assert_eq!(result.strategy(), ImputationStrategy::HalfLimit);
    for record in result.censored_records() {
        assert_eq!(record.final_value, 2.0);
    }
}

#[test]
fn test_inverse_transform_matches_fit_space() {
    let observations = multiple_limit_observations();

    // Log-space fitting exponentiates the predicted score.
    let logged = RosEstimator::new().estimate(&observations).unwrap();
    let fit = logged.fit().unwrap();
    for record in logged.censored_records() {
        let predicted = fit.predict(record.quantile_score.unwrap());
        assert_relative_eq!(record.estimate.unwrap(), predicted.exp(), epsilon = 1e-12);
    }

    // Plain fitting uses the prediction as-is.
    let plain = RosEstimator::new()
        .with_fit_logs(false)
        .estimate(&observations)
        .unwrap();
    let fit = plain.fit().unwrap();
    for record in plain.censored_records() {
        let predicted = fit.predict(record.quantile_score.unwrap());
        assert_relative_eq!(record.estimate.unwrap(), predicted, epsilon = 1e-12);
    }
}

#[test]
fn test_uniform_family_scores_equal_positions() {
    let result = RosEstimator::new()
        .with_family(QuantileFamily::Uniform)
        .estimate(&multiple_limit_observations())
        .unwrap();
    for record in result.records() {
        assert_relative_eq!(
            record.quantile_score.unwrap(),
            record.plotting_position.unwrap(),
            epsilon = 1e-12
        );
    }
}

#[test]
fn test_families_disagree_on_imputation() {
    let normal = RosEstimator::new()
        .estimate(&multiple_limit_observations())
        .unwrap();
    let cauchy = RosEstimator::new()
        .with_family(QuantileFamily::Cauchy)
        .estimate(&multiple_limit_observations())
        .unwrap();

    let diff = (normal.censored_records()[0].final_value
        - cauchy.censored_records()[0].final_value)
        .abs();
    assert!(diff > 1e-6);
}

#[test]
fn test_runs_are_deterministic() {
    let observations = multiple_limit_observations();
    let first = RosEstimator::new().estimate(&observations).unwrap();
    let second = RosEstimator::new().estimate(&observations).unwrap();

    // Bit-identical, not merely close.
    assert_eq!(first.final_values(), second.final_values());
    assert_eq!(first.fit().unwrap().slope, second.fit().unwrap().slope);
}

#[test]
fn test_input_order_does_not_matter() {
    let observations = multiple_limit_observations();
    let mut reversed = observations.clone();
    reversed.reverse();

    let forward = RosEstimator::new().estimate(&observations).unwrap();
    let backward = RosEstimator::new().estimate(&reversed).unwrap();

    let key = |result: &censored_ros::RosResult| {
        result
            .records()
            .iter()
            .map(|r| (r.value, r.censored, r.final_value))
            .collect::<Vec<_>>()
    };
    assert_eq!(key(&forward), key(&backward));
}

#[test]
fn test_validation_failures_surface() {
    let negative = vec![
        Observation::detected(0, -3.0),
        Observation::nondetect(1, 2.0),
    ];
    assert!(RosEstimator::new().estimate(&negative).is_err());

    let nan = vec![Observation::detected(0, f64::NAN)];
    assert!(RosEstimator::new().estimate(&nan).is_err());

    let duplicated = vec![
        Observation::detected(7, 1.0),
        Observation::nondetect(7, 2.0),
    ];
    assert!(RosEstimator::new().estimate(&duplicated).is_err());
}
