//! Drift Detection Service Provider Interface
//!
//! Defines the data model, error type and detector contracts shared by the
//! vigil crates.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Decomposer, OutlierDetector};
pub use error::{DriftError, Result};
pub use model::{
    AnomalyDetail, AnomalySummary, CellValue, ColumnFindings, DecompositionResult,
    DetectionMethod, DetectionParameters, FindingSet, KpiStatistics, MethodFindings,
    NumericColumn, OutlierRecord, RawTable, SeasonalComponents, SeasonalDecomposition,
    SeriesHit, Severity, TimeSeriesTable,
};
