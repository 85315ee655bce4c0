//! DataFrame views over a ROS result

use crate::{Result, RosConfig};
use censored_ros::RosResult;
use polars::prelude::*;

/// A completed ROS analysis with DataFrame accessors
///
/// Wraps the underlying [`RosResult`] so callers can stay in DataFrame
/// land or drop down to the records when they need to.
pub struct RosAnalysis {
    result: RosResult,
    config: RosConfig,
}

impl RosAnalysis {
    pub(crate) fn new(result: RosResult, config: RosConfig) -> Self {
        Self { result, config }
    }

    /// The underlying estimation result
    pub fn result(&self) -> &RosResult {
        &self.result
    }

    /// Consume the analysis, returning the estimation result
    pub fn into_result(self) -> RosResult {
        self.result
    }

    /// Compact output: one row per observation in canonical order
    ///
    /// Columns are `row` (position in the source frame), the configured
    /// value column, `censored`, and `{value}_final`.
    pub fn data_frame(&self) -> Result<DataFrame> {
        let records = self.result.records();
        let rows: Vec<u64> = records.iter().map(|r| r.id).collect();
        let values: Vec<f64> = records.iter().map(|r| r.value).collect();
        let censored: Vec<bool> = records.iter().map(|r| r.censored).collect();
        let finals: Vec<f64> = records.iter().map(|r| r.final_value).collect();

        let final_name = format!("{}_final", self.config.value_column);
        let columns = vec![
            Series::new("row".into(), rows).into(),
            Series::new(self.config.value_column.as_str().into(), values).into(),
            Series::new("censored".into(), censored).into(),
            Series::new(final_name.as_str().into(), finals).into(),
        ];
        Ok(DataFrame::new(columns)?)
    }

    /// Full per-observation diagnostics
    ///
    /// Adds the detection-limit index, ranks, plotting position, quantile
    /// score, and raw regression estimate to the compact output. Fields
    /// that do not apply to a row (or to the chosen strategy) are null.
    pub fn diagnostics_frame(&self) -> Result<DataFrame> {
        let records = self.result.records();
        let rows: Vec<u64> = records.iter().map(|r| r.id).collect();
        let values: Vec<f64> = records.iter().map(|r| r.value).collect();
        let censored: Vec<bool> = records.iter().map(|r| r.censored).collect();
        let limit_indices: Vec<Option<u32>> = records
            .iter()
            .map(|r| r.limit_index.map(|i| i as u32))
            .collect();
        let raw_ranks: Vec<Option<u32>> = records.iter().map(|r| r.raw_rank).collect();
        let averaged_ranks: Vec<Option<f64>> =
            records.iter().map(|r| r.averaged_rank).collect();
        let positions: Vec<Option<f64>> =
            records.iter().map(|r| r.plotting_position).collect();
        let scores: Vec<Option<f64>> = records.iter().map(|r| r.quantile_score).collect();
        let estimates: Vec<Option<f64>> = records.iter().map(|r| r.estimate).collect();
        let finals: Vec<f64> = records.iter().map(|r| r.final_value).collect();

        let final_name = format!("{}_final", self.config.value_column);
        let columns = vec![
            Series::new("row".into(), rows).into(),
            Series::new(self.config.value_column.as_str().into(), values).into(),
            Series::new("censored".into(), censored).into(),
            Series::new("limit_index".into(), limit_indices).into(),
            Series::new("raw_rank".into(), raw_ranks).into(),
            Series::new("averaged_rank".into(), averaged_ranks).into(),
            Series::new("plotting_position".into(), positions).into(),
            Series::new("quantile_score".into(), scores).into(),
            Series::new("estimate".into(), estimates).into(),
            Series::new(final_name.as_str().into(), finals).into(),
        ];
        Ok(DataFrame::new(columns)?)
    }

    /// One row per detection limit, in ascending limit order
    pub fn limits_frame(&self) -> Result<DataFrame> {
        let limits = self.result.detection_limits();
        let values: Vec<f64> = limits.iter().map(|l| l.limit).collect();
        let detects: Vec<u32> = limits.iter().map(|l| l.detects as u32).collect();
        let below: Vec<u32> = limits.iter().map(|l| l.below as u32).collect();
        let censored_at: Vec<u32> = limits.iter().map(|l| l.censored_at as u32).collect();
        let exceedance: Vec<f64> = limits.iter().map(|l| l.exceedance).collect();

        let columns = vec![
            Series::new("limit".into(), values).into(),
            Series::new("detects".into(), detects).into(),
            Series::new("below".into(), below).into(),
            Series::new("censored_at".into(), censored_at).into(),
            Series::new("exceedance".into(), exceedance).into(),
        ];
        Ok(DataFrame::new(columns)?)
    }
}
