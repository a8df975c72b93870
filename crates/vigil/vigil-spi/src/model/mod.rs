//! Data models for drift detection.
//!
//! This module contains data structures used throughout the drift detection system.

mod decomposition;
mod findings;
mod statistics;
mod summary;
mod table;

pub use decomposition::{DecompositionResult, SeasonalComponents, SeasonalDecomposition};
pub use findings::{
    ColumnFindings, DetectionMethod, DetectionParameters, FindingSet, MethodFindings,
    OutlierRecord, SeriesHit,
};
pub use statistics::KpiStatistics;
pub use summary::{AnomalyDetail, AnomalySummary, Severity};
pub use table::{CellValue, NumericColumn, RawTable, TimeSeriesTable};
