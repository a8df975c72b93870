//! Drift Detection Core
//!
//! Implementations for table normalization, outlier detection, seasonal
//! decomposition, anomaly aggregation and KPI statistics.

mod aggregation;
mod decomposition;
mod detectors;
mod engine;
mod normalizer;
mod series;
mod statistics;

pub use aggregation::{generate_anomaly_summary, summarize};
pub use decomposition::{decompose_additive, AdditiveDecomposer};
pub use detectors::{RollingDeviationDetector, ZScoreOutlierDetector};
pub use engine::DriftDetector;
pub use normalizer::{normalize, parse_timestamp};
pub use statistics::{column_statistics, kpi_statistics};
