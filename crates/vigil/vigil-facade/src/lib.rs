//! Drift Detection Facade
//!
//! Unified re-exports for the drift detection module.
//!
//! This facade provides a single entry point to all drift detection functionality:
//! - Data model, `DriftError` and the `OutlierDetector`/`Decomposer` contracts from SPI
//! - Configuration types from API
//! - Detectors, decomposition, aggregation and the `DriftDetector` engine from Core

// Re-export everything from SPI
pub use vigil_spi::*;

// Re-export everything from API
pub use vigil_api::*;

// Re-export everything from Core
pub use vigil_core::*;
