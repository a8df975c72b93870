//! Descriptive statistics per KPI.

use serde::{Deserialize, Serialize};

/// Descriptive statistics for one numeric column.
///
/// Values that are undefined for the available count are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiStatistics {
    pub column: String,
    pub mean: Option<f64>,
    /// Sample standard deviation (n - 1).
    pub std_dev: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub count: usize,
}

impl KpiStatistics {
    /// Report table headers, in column order.
    pub const HEADERS: [&'static str; 6] = ["KPI", "Mean", "Std Dev", "Min", "Max", "Count"];
}
