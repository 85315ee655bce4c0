//! Common test utilities for censored-polars tests

use polars::prelude::*;

/// Twelve observations censored at three limits (2, 4, and 10), using the
/// default `res`/`qual` column names.
pub fn multiple_limit_df() -> DataFrame {
    df![
        "res" => [2.0, 4.0, 4.0, 10.0, 3.0, 5.0, 6.0, 10.0, 12.0, 40.0, 78.0, 120.0],
        "qual" => ["ND", "ND", "ND", "ND", "", "", "", "", "", "", "", ""],
    ]
    .unwrap()
}

/// Extract a non-null f64 column from a result DataFrame
pub fn extract_f64(df: &DataFrame, col_name: &str) -> Vec<f64> {
    df.column(col_name)
        .unwrap()
        .f64()
        .unwrap()
        .into_no_null_iter()
        .collect()
}

/// Extract a nullable f64 column from a result DataFrame
pub fn extract_opt_f64(df: &DataFrame, col_name: &str) -> Vec<Option<f64>> {
    df.column(col_name).unwrap().f64().unwrap().into_iter().collect()
}

/// Extract a non-null u32 column from a result DataFrame
pub fn extract_u32(df: &DataFrame, col_name: &str) -> Vec<u32> {
    df.column(col_name)
        .unwrap()
        .u32()
        .unwrap()
        .into_no_null_iter()
        .collect()
}

/// Extract a bool column from a result DataFrame
pub fn extract_bool(df: &DataFrame, col_name: &str) -> Vec<bool> {
    df.column(col_name)
        .unwrap()
        .bool()
        .unwrap()
        .into_no_null_iter()
        .collect()
}
