//! Drift Detection API
//!
//! Configuration types and builders for the drift engine.
//!
//! The defaults (3.0 sigma, a 7-row window at 25%, a 7-row seasonal period)
//! are policy values, not tuned constants; override them per dataset.

mod config;

pub use config::{
    EngineConfig, EngineConfigBuilder, RollingDeviationConfig, SeasonalConfig, ZScoreConfig,
    DEFAULT_TIMESTAMP_COLUMN,
};

// Re-export SPI types
pub use vigil_spi::{DriftError, Result};
