//! Error types for drift detection.
//!
//! This module contains error types and the Result alias.

mod drift_error;

pub use drift_error::{DriftError, Result};
