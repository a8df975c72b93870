//! Engine configuration types.

use serde::{Deserialize, Serialize};
use vigil_spi::{DriftError, Result};

/// Timestamp column used when none is configured.
pub const DEFAULT_TIMESTAMP_COLUMN: &str = "date";

fn check_threshold(name: &str, threshold: f64) -> Result<()> {
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(DriftError::invalid_parameter(
            name,
            "must be a positive finite number",
        ));
    }
    Ok(())
}

fn check_at_least_one(name: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(DriftError::invalid_parameter(name, "must be at least 1"));
    }
    Ok(())
}

// ============================================================================
// Detector Configuration
// ============================================================================

/// Z-Score detector configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZScoreConfig {
    /// Z-score threshold for outlier detection (default: 3.0).
    pub threshold: f64,
}

impl Default for ZScoreConfig {
    fn default() -> Self {
        Self { threshold: 3.0 }
    }
}

impl ZScoreConfig {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn validate(&self) -> Result<()> {
        check_threshold("threshold", self.threshold)
    }
}

/// Rolling-median deviation detector configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollingDeviationConfig {
    /// Centered window size in rows (default: 7).
    pub window: usize,
    /// Relative deviation threshold as a fraction (default: 0.25 = 25%).
    pub threshold: f64,
}

impl Default for RollingDeviationConfig {
    fn default() -> Self {
        Self {
            window: 7,
            threshold: 0.25,
        }
    }
}

impl RollingDeviationConfig {
    pub fn new(window: usize, threshold: f64) -> Self {
        Self { window, threshold }
    }

    pub fn validate(&self) -> Result<()> {
        check_at_least_one("window", self.window)?;
        check_threshold("threshold", self.threshold)
    }
}

/// Seasonal decomposition configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonalConfig {
    /// Seasonal period in rows (default: 7, weekly for daily data).
    pub period: usize,
}

impl Default for SeasonalConfig {
    fn default() -> Self {
        Self { period: 7 }
    }
}

impl SeasonalConfig {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    pub fn validate(&self) -> Result<()> {
        check_at_least_one("period", self.period)
    }
}

// ============================================================================
// Engine Configuration
// ============================================================================

/// Full engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Name of the timestamp column (default: "date").
    pub timestamp_column: String,
    pub zscore: ZScoreConfig,
    pub rolling: RollingDeviationConfig,
    pub seasonal: SeasonalConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            timestamp_column: DEFAULT_TIMESTAMP_COLUMN.to_string(),
            zscore: ZScoreConfig::default(),
            rolling: RollingDeviationConfig::default(),
            seasonal: SeasonalConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Default configuration with a custom timestamp column.
    pub fn with_timestamp_column(timestamp_column: &str) -> Self {
        Self {
            timestamp_column: timestamp_column.to_string(),
            ..Self::default()
        }
    }

    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::new()
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.zscore.validate()?;
        self.rolling.validate()?;
        self.seasonal.validate()
    }
}

/// Builder for EngineConfig.
#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    timestamp_column: Option<String>,
    zscore_threshold: Option<f64>,
    rolling_window: Option<usize>,
    deviation_threshold: Option<f64>,
    seasonal_period: Option<usize>,
}

impl EngineConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timestamp column.
    pub fn timestamp_column(mut self, column: &str) -> Self {
        self.timestamp_column = Some(column.to_string());
        self
    }

    /// Set the z-score threshold.
    pub fn zscore_threshold(mut self, threshold: f64) -> Self {
        self.zscore_threshold = Some(threshold);
        self
    }

    /// Set the rolling window size.
    pub fn rolling_window(mut self, window: usize) -> Self {
        self.rolling_window = Some(window);
        self
    }

    /// Set the rolling deviation threshold.
    pub fn deviation_threshold(mut self, threshold: f64) -> Self {
        self.deviation_threshold = Some(threshold);
        self
    }

    /// Set the seasonal period.
    pub fn seasonal_period(mut self, period: usize) -> Self {
        self.seasonal_period = Some(period);
        self
    }

    /// Build the configuration, filling unset values with defaults.
    pub fn build(self) -> Result<EngineConfig> {
        let defaults = EngineConfig::default();
        let config = EngineConfig {
            timestamp_column: self.timestamp_column.unwrap_or(defaults.timestamp_column),
            zscore: ZScoreConfig {
                threshold: self.zscore_threshold.unwrap_or(defaults.zscore.threshold),
            },
            rolling: RollingDeviationConfig {
                window: self.rolling_window.unwrap_or(defaults.rolling.window),
                threshold: self
                    .deviation_threshold
                    .unwrap_or(defaults.rolling.threshold),
            },
            seasonal: SeasonalConfig {
                period: self.seasonal_period.unwrap_or(defaults.seasonal.period),
            },
        };
        config.validate()?;
        Ok(config)
    }
}
