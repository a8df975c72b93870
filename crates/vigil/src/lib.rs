//! # vigil
//!
//! KPI drift detection for multi-column time series.
//!
//! Flags statistically abnormal points per KPI column (global z-score and
//! rolling-median deviation), merges the findings into a severity-ranked
//! summary, and offers per-KPI statistics and seasonal decomposition for
//! report and chart consumers.
//!
//! ```
//! use vigil::{generate_anomaly_summary, CellValue, DriftDetector, FindingSet, RawTable, Severity};
//!
//! let mut raw = RawTable::new(["date", "revenue"]);
//! for day in 1..=28 {
//!     let revenue = if day == 14 { 900.0 } else { 100.0 };
//!     raw.push_row(vec![
//!         CellValue::from(format!("2024-02-{:02}", day)),
//!         CellValue::from(revenue),
//!     ])?;
//! }
//!
//! let engine = DriftDetector::new(&raw, "date")?;
//! let findings = FindingSet::new().with(engine.detect_zscore_outliers(3.0)?);
//! let summary = generate_anomaly_summary(&findings);
//!
//! assert_eq!(summary.total_anomalies, 1);
//! assert_eq!(summary.severity, Severity::Low);
//! # Ok::<(), vigil::DriftError>(())
//! ```

pub use vigil_facade::*;
