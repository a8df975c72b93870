//! Seasonal decomposition results.

use serde::{Deserialize, Serialize};

/// Raw output of a decomposer over a dense series.
#[derive(Debug, Clone, PartialEq)]
pub struct DecompositionResult {
    /// Trend component
    pub trend: Vec<f64>,
    /// Seasonal component
    pub seasonal: Vec<f64>,
    /// Residual component
    pub residual: Vec<f64>,
}

/// Components aligned to the table rows; `None` where the source value is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalComponents {
    pub column: String,
    pub period: usize,
    pub original: Vec<Option<f64>>,
    pub trend: Vec<Option<f64>>,
    pub seasonal: Vec<Option<f64>>,
    pub residual: Vec<Option<f64>>,
}

/// Outcome of a seasonal analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SeasonalDecomposition {
    Decomposed(SeasonalComponents),
    Unavailable { column: String, message: String },
}

impl SeasonalDecomposition {
    pub fn is_decomposed(&self) -> bool {
        matches!(self, SeasonalDecomposition::Decomposed(_))
    }

    pub fn components(&self) -> Option<&SeasonalComponents> {
        match self {
            SeasonalDecomposition::Decomposed(c) => Some(c),
            SeasonalDecomposition::Unavailable { .. } => None,
        }
    }

    /// Failure reason, if the decomposition is unavailable.
    pub fn message(&self) -> Option<&str> {
        match self {
            SeasonalDecomposition::Decomposed(_) => None,
            SeasonalDecomposition::Unavailable { message, .. } => Some(message),
        }
    }
}
