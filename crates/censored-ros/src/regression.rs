//! Least-squares fit of detected values against quantile scores

use crate::types::LineFit;
use censored_core::{Error, Result};

/// Fit an ordinary least-squares line through `(scores[i], values[i])`
///
/// `values` are already transformed (log space or identity) by the caller.
/// The correlation is clamped to `[-1, 1]` against floating-point drift and
/// reported as zero when either side has no variance.
pub(crate) fn fit_line(scores: &[f64], values: &[f64]) -> Result<LineFit> {
    if scores.len() != values.len() {
        return Err(Error::InvalidInput(format!(
            "score and value lengths differ: {} vs {}",
            scores.len(),
            values.len()
        )));
    }
    if scores.len() < 2 {
        return Err(Error::InvalidInput(
            "need at least 2 detected observations to fit a line".to_string(),
        ));
    }

    let n = scores.len() as f64;
    let mean_x = scores.iter().sum::<f64>() / n;
    let mean_y = values.iter().sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut variance_x = 0.0;
    let mut variance_y = 0.0;
    for (&x, &y) in scores.iter().zip(values) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        variance_x += dx * dx;
        variance_y += dy * dy;
    }

    if variance_x == 0.0 {
        return Err(Error::Computation(
            "quantile scores have zero variance".to_string(),
        ));
    }

    let slope = covariance / variance_x;
    let intercept = mean_y - slope * mean_x;
    let correlation = if variance_y == 0.0 {
        0.0
    } else {
        (covariance / (variance_x * variance_y).sqrt()).clamp(-1.0, 1.0)
    };

    Ok(LineFit {
        slope,
        intercept,
        correlation,
    })
}
