//! Extension trait for censored-data estimation on Polars DataFrames

use crate::{Error, Result, RosAnalysis, RosConfig};
use censored_core::Observation;
use censored_ros::RosEstimator;
use polars::prelude::*;

/// Extension trait for ROS operations on Polars DataFrames
pub trait CensoredStatsExt {
    /// Impute censored values in place of nondetects
    ///
    /// # Arguments
    /// * `config` - Column names and estimator settings
    ///
    /// # Returns
    /// DataFrame in canonical order with columns `row`, `{value}`,
    /// `censored`, and `{value}_final`
    fn ros_impute(&self, config: &RosConfig) -> Result<DataFrame>;

    /// Run the full ROS analysis, keeping all diagnostics
    ///
    /// # Arguments
    /// * `config` - Column names and estimator settings
    ///
    /// # Returns
    /// [`RosAnalysis`] exposing the result and its DataFrame views
    fn ros_analysis(&self, config: &RosConfig) -> Result<RosAnalysis>;
}

impl CensoredStatsExt for DataFrame {
    fn ros_impute(&self, config: &RosConfig) -> Result<DataFrame> {
        self.ros_analysis(config)?.data_frame()
    }

    fn ros_analysis(&self, config: &RosConfig) -> Result<RosAnalysis> {
        let observations = extract_observations(self, config)?;
        let estimator = RosEstimator::new()
            .with_fit_logs(config.fit_logs)
            .with_family(config.family);
        let result = estimator.estimate(&observations)?;
        Ok(RosAnalysis::new(result, config.clone()))
    }
}

/// Pull `(value, censored)` rows out of the configured columns.
///
/// Row positions become observation ids, so results can be joined back
/// against the source frame.
fn extract_observations(df: &DataFrame, config: &RosConfig) -> Result<Vec<Observation>> {
    let value_col = df
        .column(&config.value_column)
        .map_err(|_| Error::InvalidColumn(config.value_column.clone()))?;
    let qual_col = df
        .column(&config.qualifier_column)
        .map_err(|_| Error::InvalidColumn(config.qualifier_column.clone()))?;

    // Accept any numeric column and compute in f64. String columns are
    // parsed; anything unparseable becomes a null and is rejected below.
    let values = match value_col.dtype() {
        DataType::Float64 => value_col.clone(),
        DataType::Float32
        | DataType::Int64
        | DataType::Int32
        | DataType::Int16
        | DataType::Int8
        | DataType::UInt64
        | DataType::UInt32
        | DataType::UInt16
        | DataType::UInt8
        | DataType::String => value_col.cast(&DataType::Float64)?,
        dt => {
            return Err(Error::TypeMismatch {
                expected: "numeric".to_string(),
                got: format!("{:?}", dt),
            });
        }
    };
    let ca = values.f64()?;
    if ca.null_count() > 0 {
        return Err(Error::InvalidInput(format!(
            "column '{}' contains null or non-numeric entries",
            config.value_column
        )));
    }

    let quals = match qual_col.dtype() {
        DataType::String => qual_col.str()?,
        dt => {
            return Err(Error::TypeMismatch {
                expected: "string qualifier".to_string(),
                got: format!("{:?}", dt),
            });
        }
    };

    // A null qualifier means the row is an ordinary detected value.
    let observations = ca
        .into_no_null_iter()
        .enumerate()
        .map(|(row, value)| Observation {
            id: row as u64,
            value,
            censored: matches!(quals.get(row), Some(q) if q == config.nd_symbol),
        })
        .collect();
    Ok(observations)
}
