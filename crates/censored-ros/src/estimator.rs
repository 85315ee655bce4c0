//! The ROS estimator
//!
//! Orchestrates the pipeline: validation, canonical sort, detection-limit
//! table, ranks, exceedance probabilities, plotting positions, regression,
//! and imputation. Runs are pure; the input slice is never modified and no
//! state survives between calls.

use crate::cohn::CohnTable;
use crate::types::{ImputationStrategy, RosRecord, RosResult};
use crate::{position, rank, regression, sort};
use censored_core::{observation, Observation, QuantileFamily, Result};
use tracing::{debug, instrument};

/// Minimum number of detected observations for the regression path
pub const MIN_DETECTS: usize = 2;

/// Censored fraction above which the regression path is abandoned
pub const MAX_CENSORED_FRACTION: f64 = 0.8;

/// Regression-on-order-statistics estimator for censored data
///
/// Censored values are imputed from a least-squares fit of the detected
/// observations against their quantile scores (Hirsch and Stedinger 1987).
/// Data sets without censored values pass through untouched; data sets with
/// fewer than [`MIN_DETECTS`] detects or more than [`MAX_CENSORED_FRACTION`]
/// censored fall back to half the detection limit.
///
/// # Example
///
/// ```rust
/// use censored_ros::{Observation, RosEstimator};
///
/// let observations = vec![
///     Observation::nondetect(0, 2.0),
///     Observation::detected(1, 3.0),
///     Observation::detected(2, 8.0),
///     Observation::detected(3, 20.0),
/// ];
///
/// let result = RosEstimator::new().estimate(&observations).unwrap();
/// let imputed = result.records()[0].final_value;
/// assert!(imputed > 0.0 && imputed < 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct RosEstimator {
    fit_logs: bool,
    family: QuantileFamily,
}

impl Default for RosEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl RosEstimator {
    /// Create an estimator with the defaults: log-space fitting and the
    /// normal quantile family
    pub fn new() -> Self {
        Self {
            fit_logs: true,
            family: QuantileFamily::Normal,
        }
    }

    /// Set whether the regression runs in log space
    ///
    /// When enabled (the default), detected values are log-transformed
    /// before the fit and imputed values are exponentiated back. Values are
    /// validated positive either way, so the transform is always defined.
    pub fn with_fit_logs(mut self, fit_logs: bool) -> Self {
        self.fit_logs = fit_logs;
        self
    }

    /// Set the quantile family used to score plotting positions
    pub fn with_family(mut self, family: QuantileFamily) -> Self {
        self.family = family;
        self
    }

    /// Whether the regression runs in log space
    pub fn fit_logs(&self) -> bool {
        self.fit_logs
    }

    /// The configured quantile family
    pub fn family(&self) -> QuantileFamily {
        self.family
    }

    /// Estimate the censored values of a data set
    ///
    /// Records come back in canonical order (censored ascending, then
    /// detected ascending). An empty input yields an empty pass-through
    /// result.
    #[instrument(skip(self, observations), fields(n = observations.len(), fit_logs = self.fit_logs))]
    pub fn estimate(&self, observations: &[Observation]) -> Result<RosResult> {
        observation::validate(observations)?;

        let sorted = sort::ros_sort(observations);
        let n_total = sorted.len();
        let n_censored = sorted.iter().filter(|o| o.censored).count();
        let n_detected = n_total - n_censored;

        if n_censored == 0 {
            debug!(n_total, "no censored observations, passing values through");
            let records = sorted
                .iter()
                .map(|o| RosRecord {
                    id: o.id,
                    value: o.value,
                    censored: false,
                    limit_index: None,
                    raw_rank: None,
                    averaged_rank: None,
                    plotting_position: None,
                    quantile_score: None,
                    estimate: None,
                    final_value: o.value,
                })
                .collect();
            return Ok(RosResult::new(
                records,
                Vec::new(),
                None,
                ImputationStrategy::PassThrough,
                n_total,
                0,
            ));
        }

        let table = CohnTable::build(&sorted);
        let indices = rank::limit_indices(&sorted, &table);
        let raw = rank::raw_ranks(&sorted, &indices);
        let averaged = rank::averaged_ranks(&sorted, &indices, &raw);
        debug!(
            limits = table.num_limits(),
            n_censored, "built detection-limit table"
        );

        let censored_fraction = n_censored as f64 / n_total as f64;
        if n_detected < MIN_DETECTS || censored_fraction > MAX_CENSORED_FRACTION {
            debug!(
                n_detected,
                censored_fraction, "too little detected data, substituting half the limit"
            );
            let records = (0..n_total)
                .map(|n| {
                    let o = &sorted[n];
                    RosRecord {
                        id: o.id,
                        value: o.value,
                        censored: o.censored,
                        limit_index: Some(indices[n]),
                        raw_rank: Some(raw[n]),
                        averaged_rank: Some(averaged[n]),
                        plotting_position: None,
                        quantile_score: None,
                        estimate: None,
                        final_value: if o.censored { 0.5 * o.value } else { o.value },
                    }
                })
                .collect();
            return Ok(RosResult::new(
                records,
                table.into_real_entries(),
                None,
                ImputationStrategy::HalfLimit,
                n_total,
                n_censored,
            ));
        }

        let pe = position::exceedance_probabilities(&table)?;
        let table = table.with_exceedances(&pe);
        let positions = position::plotting_positions(&sorted, &indices, &raw, &table)?;
        let scores = position::quantile_scores(&positions, self.family)?;

        let mut detect_scores = Vec::with_capacity(n_detected);
        let mut detect_values = Vec::with_capacity(n_detected);
        for n in 0..n_total {
            if !sorted[n].censored {
                detect_scores.push(scores[n]);
                detect_values.push(self.transform(sorted[n].value));
            }
        }
        let fit = regression::fit_line(&detect_scores, &detect_values)?;
        debug!(
            slope = fit.slope,
            intercept = fit.intercept,
            correlation = fit.correlation,
            "fitted detected observations"
        );

        let records = (0..n_total)
            .map(|n| {
                let o = &sorted[n];
                let estimate = o
                    .censored
                    .then(|| self.inverse(fit.predict(scores[n])));
                RosRecord {
                    id: o.id,
                    value: o.value,
                    censored: o.censored,
                    limit_index: Some(indices[n]),
                    raw_rank: Some(raw[n]),
                    averaged_rank: Some(averaged[n]),
                    plotting_position: Some(positions[n]),
                    quantile_score: Some(scores[n]),
                    estimate,
                    final_value: estimate.unwrap_or(o.value),
                }
            })
            .collect();

        Ok(RosResult::new(
            records,
            table.into_real_entries(),
            Some(fit),
            ImputationStrategy::Regression,
            n_total,
            n_censored,
        ))
    }

    fn transform(&self, value: f64) -> f64 {
        if self.fit_logs {
            value.ln()
        } else {
            value
        }
    }

    fn inverse(&self, value: f64) -> f64 {
        if self.fit_logs {
            value.exp()
        } else {
            value
        }
    }
}
