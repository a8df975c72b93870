//! Trait for time series decomposition

use crate::error::Result;
use crate::model::DecompositionResult;

/// Trait for time series decomposition
pub trait Decomposer: Send + Sync {
    /// Decompose a dense series into trend, seasonal, and residual components.
    ///
    /// Callers guarantee at least two full periods of data.
    fn decompose(&self, data: &[f64], period: usize) -> Result<DecompositionResult>;
}
