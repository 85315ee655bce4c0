//! Configuration for ROS analysis of DataFrame columns

use censored_core::QuantileFamily;

/// Column names and estimator settings for ROS on a DataFrame
///
/// The defaults follow common lab-export layouts: measured values in a
/// `res` column, censorship qualifiers in a `qual` column, and nondetects
/// flagged with the string `"ND"`.
#[derive(Debug, Clone)]
pub struct RosConfig {
    /// Name of the column holding measured values
    pub value_column: String,
    /// Name of the column holding censorship qualifiers
    pub qualifier_column: String,
    /// Qualifier string that marks an observation as censored
    pub nd_symbol: String,
    /// Fit the regression in log space
    pub fit_logs: bool,
    /// Quantile family used to score plotting positions
    pub family: QuantileFamily,
}

impl Default for RosConfig {
    fn default() -> Self {
        Self {
            value_column: "res".to_string(),
            qualifier_column: "qual".to_string(),
            nd_symbol: "ND".to_string(),
            fit_logs: true,
            family: QuantileFamily::Normal,
        }
    }
}

impl RosConfig {
    /// Create a configuration with the default column names
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value column name
    pub fn with_value_column(mut self, name: impl Into<String>) -> Self {
        self.value_column = name.into();
        self
    }

    /// Set the qualifier column name
    pub fn with_qualifier_column(mut self, name: impl Into<String>) -> Self {
        self.qualifier_column = name.into();
        self
    }

    /// Set the qualifier string that marks nondetects
    pub fn with_nd_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.nd_symbol = symbol.into();
        self
    }

    /// Set whether the regression runs in log space
    pub fn with_fit_logs(mut self, fit_logs: bool) -> Self {
        self.fit_logs = fit_logs;
        self
    }

    /// Set the quantile family
    pub fn with_family(mut self, family: QuantileFamily) -> Self {
        self.family = family;
        self
    }
}
