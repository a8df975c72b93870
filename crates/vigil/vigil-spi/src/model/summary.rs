//! Consolidated anomaly summary.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::findings::DetectionMethod;

/// Severity derived from the total anomaly count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
}

impl Severity {
    /// Fixed banding: 0 None, 1-5 Low, 6-15 Medium, above 15 High.
    pub fn from_count(total: usize) -> Self {
        match total {
            0 => Severity::None,
            1..=5 => Severity::Low,
            6..=15 => Severity::Medium,
            _ => Severity::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "None",
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the summary detail table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyDetail {
    pub date: Option<NaiveDateTime>,
    pub kpi: String,
    pub method: DetectionMethod,
    pub value: f64,
    pub score: f64,
}

/// Aggregate view over all findings supplied to the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalySummary {
    pub total_anomalies: usize,
    pub severity: Severity,
    /// Affected KPI names in first-seen order.
    pub affected_kpis: Vec<String>,
    pub by_method: BTreeMap<DetectionMethod, usize>,
    pub details: Vec<AnomalyDetail>,
}

impl AnomalySummary {
    /// Details for a single KPI.
    pub fn details_for<'a>(&'a self, kpi: &'a str) -> impl Iterator<Item = &'a AnomalyDetail> {
        self.details.iter().filter(move |d| d.kpi == kpi)
    }

    /// Count reported for a method, zero when it was not run.
    pub fn method_count(&self, method: DetectionMethod) -> usize {
        self.by_method.get(&method).copied().unwrap_or(0)
    }
}
