//! Outlier records and per-method findings.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Detection method tag.
///
/// Ordering is the fixed reporting order: z-score first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DetectionMethod {
    #[serde(rename = "zscore")]
    ZScore,
    #[serde(rename = "rolling_deviation")]
    RollingDeviation,
}

impl DetectionMethod {
    /// Machine tag, e.g. `zscore`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionMethod::ZScore => "zscore",
            DetectionMethod::RollingDeviation => "rolling_deviation",
        }
    }

    /// Human-readable label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            DetectionMethod::ZScore => "Z-Score",
            DetectionMethod::RollingDeviation => "Rolling Deviation",
        }
    }
}

impl fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters a detection run used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectionParameters {
    pub threshold: f64,
    /// Rolling window size, for windowed methods.
    pub window: Option<usize>,
}

/// A point a detector flagged within one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesHit {
    pub row: usize,
    pub value: f64,
    /// Column mean or local median the value was compared with.
    pub reference: f64,
    pub score: f64,
}

/// One detected anomaly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierRecord {
    pub timestamp: Option<NaiveDateTime>,
    /// Row position in the normalized table.
    pub row: usize,
    pub column: String,
    pub value: f64,
    pub method: DetectionMethod,
    /// Z-score magnitude, or percentage deviation from the local median.
    pub score: f64,
    pub reference: f64,
}

/// Records of one method for one column, in row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnFindings {
    pub column: String,
    pub records: Vec<OutlierRecord>,
}

/// Immutable output of a single detector run.
///
/// Only columns with at least one record are listed, in table column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodFindings {
    pub method: DetectionMethod,
    pub parameters: DetectionParameters,
    pub columns: Vec<ColumnFindings>,
}

impl MethodFindings {
    pub fn new(method: DetectionMethod, parameters: DetectionParameters) -> Self {
        Self {
            method,
            parameters,
            columns: Vec::new(),
        }
    }

    /// Total records across all columns.
    pub fn total(&self) -> usize {
        self.columns.iter().map(|c| c.records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Records for one column; empty when the column had none.
    pub fn get(&self, column: &str) -> &[OutlierRecord] {
        self.columns
            .iter()
            .find(|c| c.column == column)
            .map(|c| c.records.as_slice())
            .unwrap_or(&[])
    }

    /// All records, column by column.
    pub fn records(&self) -> impl Iterator<Item = &OutlierRecord> {
        self.columns.iter().flat_map(|c| c.records.iter())
    }

    /// Columns with at least one record.
    pub fn affected_columns(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.column.as_str()).collect()
    }
}

/// Caller-owned collection of the latest findings per method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FindingSet {
    runs: BTreeMap<DetectionMethod, MethodFindings>,
}

impl FindingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store findings, replacing any earlier run of the same method.
    pub fn record(&mut self, findings: MethodFindings) -> Option<MethodFindings> {
        self.runs.insert(findings.method, findings)
    }

    /// Builder-style variant of [`FindingSet::record`].
    pub fn with(mut self, findings: MethodFindings) -> Self {
        self.record(findings);
        self
    }

    pub fn get(&self, method: DetectionMethod) -> Option<&MethodFindings> {
        self.runs.get(&method)
    }

    /// Runs in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = &MethodFindings> {
        self.runs.values()
    }

    pub fn methods(&self) -> Vec<DetectionMethod> {
        self.runs.keys().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn clear(&mut self) {
        self.runs.clear();
    }
}

impl FromIterator<MethodFindings> for FindingSet {
    fn from_iter<I: IntoIterator<Item = MethodFindings>>(iter: I) -> Self {
        let mut set = FindingSet::new();
        for findings in iter {
            set.record(findings);
        }
        set
    }
}
