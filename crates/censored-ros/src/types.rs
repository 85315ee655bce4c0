//! Types produced by ROS estimation

use crate::cohn::DetectionLimit;
use std::fmt;

/// How the final values of a run were produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImputationStrategy {
    /// No censored observations; values pass through untouched
    PassThrough,
    /// Too little detected data for a fit; censored values become half
    /// their detection limit
    HalfLimit,
    /// Censored values imputed from the regression fit
    Regression,
}

impl fmt::Display for ImputationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PassThrough => write!(f, "pass-through"),
            Self::HalfLimit => write!(f, "half detection limit"),
            Self::Regression => write!(f, "regression on order statistics"),
        }
    }
}

/// Least-squares line fitted to the detected observations
///
/// The abscissa is the quantile score, the ordinate the (optionally
/// log-transformed) detected value. Censored estimates come from
/// evaluating this line at their quantile scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    /// Slope of the fitted line
    pub slope: f64,
    /// Intercept of the fitted line
    pub intercept: f64,
    /// Pearson correlation of the fitted points
    pub correlation: f64,
}

impl LineFit {
    /// Evaluate the fitted line at a quantile score
    pub fn predict(&self, score: f64) -> f64 {
        self.intercept + self.slope * score
    }
}

impl fmt::Display for LineFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LineFit {{ slope: {:.4}, intercept: {:.4}, r: {:.4} }}",
            self.slope, self.intercept, self.correlation
        )
    }
}

/// Per-observation output of an estimation run
///
/// Rows appear in canonical order: censored observations ascending by value,
/// then detected observations ascending by value. The optional fields mirror
/// the intermediate quantities of the method; they are `None` on paths that
/// never compute them (everything on pass-through, the probability fields on
/// the half-limit fallback, the modeled estimate on detected rows).
#[derive(Debug, Clone, PartialEq)]
pub struct RosRecord {
    /// Identity of the originating observation
    pub id: u64,
    /// Reported value (the detection limit when censored)
    pub value: f64,
    /// Whether the observation is censored
    pub censored: bool,
    /// Index into the detection-limit table governing this row
    pub limit_index: Option<usize>,
    /// Rank within the (limit, censorship) run
    pub raw_rank: Option<u32>,
    /// Tie-averaged rank; equals the raw rank for censored rows
    pub averaged_rank: Option<f64>,
    /// Plotting position in (0, 1)
    pub plotting_position: Option<f64>,
    /// Quantile score of the plotting position
    pub quantile_score: Option<f64>,
    /// Modeled value from the regression; censored rows only
    pub estimate: Option<f64>,
    /// Value to use downstream: observed for detects, imputed or halved
    /// for censored rows
    pub final_value: f64,
}

/// Result of a ROS estimation run
#[derive(Debug, Clone)]
pub struct RosResult {
    /// Per-observation records in canonical order
    records: Vec<RosRecord>,
    /// Detection-limit table (real entries only, no sentinel)
    limits: Vec<DetectionLimit>,
    /// Fitted line, present on the regression path
    fit: Option<LineFit>,
    /// Strategy that produced the final values
    strategy: ImputationStrategy,
    /// Total number of observations
    n_total: usize,
    /// Number of censored observations
    n_censored: usize,
}

impl RosResult {
    pub(crate) fn new(
        records: Vec<RosRecord>,
        limits: Vec<DetectionLimit>,
        fit: Option<LineFit>,
        strategy: ImputationStrategy,
        n_total: usize,
        n_censored: usize,
    ) -> Self {
        Self {
            records,
            limits,
            fit,
            strategy,
            n_total,
            n_censored,
        }
    }

    /// Get the per-observation records in canonical order
    pub fn records(&self) -> &[RosRecord] {
        &self.records
    }

    /// Get the detection-limit table
    pub fn detection_limits(&self) -> &[DetectionLimit] {
        &self.limits
    }

    /// Get the fitted line, if the regression path ran
    pub fn fit(&self) -> Option<&LineFit> {
        self.fit.as_ref()
    }

    /// Get the strategy that produced the final values
    pub fn strategy(&self) -> ImputationStrategy {
        self.strategy
    }

    /// Total number of observations
    pub fn n_total(&self) -> usize {
        self.n_total
    }

    /// Number of censored observations
    pub fn n_censored(&self) -> usize {
        self.n_censored
    }

    /// Number of detected observations
    pub fn n_detected(&self) -> usize {
        self.n_total - self.n_censored
    }

    /// Fraction of observations that are censored
    pub fn censored_fraction(&self) -> f64 {
        if self.n_total == 0 {
            0.0
        } else {
            self.n_censored as f64 / self.n_total as f64
        }
    }

    /// Final values in canonical order
    pub fn final_values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.final_value).collect()
    }

    /// Records of the censored observations only
    pub fn censored_records(&self) -> Vec<&RosRecord> {
        self.records.iter().filter(|r| r.censored).collect()
    }
}

impl fmt::Display for RosResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ROS Estimation Result:")?;
        writeln!(f, "  Strategy: {}", self.strategy)?;
        writeln!(
            f,
            "  Observations: {} ({} censored)",
            self.n_total, self.n_censored
        )?;
        writeln!(f, "  Detection limits: {}", self.limits.len())?;
        if let Some(fit) = &self.fit {
            writeln!(f, "  Fit: {}", fit)?;
        }
        Ok(())
    }
}
