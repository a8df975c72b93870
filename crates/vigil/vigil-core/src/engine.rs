//! The drift engine: owns a normalized table and runs detectors over it.

use tracing::{info, warn};
use vigil_api::{EngineConfig, RollingDeviationConfig, ZScoreConfig};
use vigil_spi::{
    Decomposer, DriftError, FindingSet, KpiStatistics, MethodFindings, OutlierDetector, RawTable,
    Result, SeasonalComponents, SeasonalDecomposition, TimeSeriesTable,
};

use crate::decomposition::AdditiveDecomposer;
use crate::detectors::{RollingDeviationDetector, ZScoreOutlierDetector};
use crate::normalizer::normalize;
use crate::statistics::kpi_statistics;

/// Detects outliers and drift in multi-column KPI time series.
///
/// The table is normalized once at construction and never mutated. Every
/// detection call returns its own [`MethodFindings`]; collect them in a
/// [`FindingSet`] to summarize.
#[derive(Debug, Clone)]
pub struct DriftDetector {
    table: TimeSeriesTable,
    config: EngineConfig,
}

impl DriftDetector {
    /// Normalize `raw` around `timestamp_column` with default policy settings.
    pub fn new(raw: &RawTable, timestamp_column: &str) -> Result<Self> {
        Self::with_config(raw, EngineConfig::with_timestamp_column(timestamp_column))
    }

    /// Normalize `raw` using a full configuration.
    pub fn with_config(raw: &RawTable, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let table = normalize(raw, &config.timestamp_column)?;
        Ok(Self { table, config })
    }

    /// Wrap an already normalized table.
    ///
    /// [`TimeSeriesTable::new`] rejects unsorted timestamps, so the table is
    /// ordered like one produced by [`normalize`].
    pub fn from_table(table: TimeSeriesTable, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { table, config })
    }

    pub fn table(&self) -> &TimeSeriesTable {
        &self.table
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Numeric KPI columns recognized at construction.
    pub fn numeric_columns(&self) -> Vec<&str> {
        self.table.numeric_column_names()
    }

    /// Run any detector over the table.
    pub fn detect_with<D: OutlierDetector + ?Sized>(&self, detector: &D) -> MethodFindings {
        let findings = detector.detect(&self.table);
        let parameters = findings.parameters;
        info!(
            method = %findings.method,
            threshold = parameters.threshold,
            window = ?parameters.window,
            total = findings.total(),
            affected = findings.columns.len(),
            "detection run complete"
        );
        findings
    }

    /// Global z-score outliers per column.
    pub fn detect_zscore_outliers(&self, threshold: f64) -> Result<MethodFindings> {
        let detector = ZScoreOutlierDetector::from_config(ZScoreConfig::new(threshold))?;
        Ok(self.detect_with(&detector))
    }

    /// Deviations from a centered rolling median per column.
    pub fn detect_rolling_deviation(&self, window: usize, threshold: f64) -> Result<MethodFindings> {
        let detector =
            RollingDeviationDetector::from_config(RollingDeviationConfig::new(window, threshold))?;
        Ok(self.detect_with(&detector))
    }

    /// Run both detectors with the configured defaults.
    pub fn run_configured(&self) -> Result<FindingSet> {
        let zscore = ZScoreOutlierDetector::from_config(self.config.zscore)?;
        let rolling = RollingDeviationDetector::from_config(self.config.rolling)?;
        Ok(FindingSet::new()
            .with(self.detect_with(&zscore))
            .with(self.detect_with(&rolling)))
    }

    /// Additive seasonal decomposition of one column.
    ///
    /// Errors only for an unknown column or a zero period; insufficient data
    /// and internal failures come back as [`SeasonalDecomposition::Unavailable`].
    pub fn seasonal_analysis(&self, column: &str, period: usize) -> Result<SeasonalDecomposition> {
        self.seasonal_analysis_with(&AdditiveDecomposer, column, period)
    }

    /// Seasonal analysis with the configured period.
    pub fn seasonal_analysis_default(&self, column: &str) -> Result<SeasonalDecomposition> {
        self.seasonal_analysis(column, self.config.seasonal.period)
    }

    /// Seasonal analysis with a caller-supplied decomposer.
    pub fn seasonal_analysis_with<D: Decomposer + ?Sized>(
        &self,
        decomposer: &D,
        column: &str,
        period: usize,
    ) -> Result<SeasonalDecomposition> {
        let series = self
            .table
            .column(column)
            .ok_or_else(|| DriftError::UnknownColumn(column.to_string()))?;
        if period == 0 {
            return Err(DriftError::invalid_parameter("period", "must be at least 1"));
        }

        let rows: Vec<usize> = series
            .values
            .iter()
            .enumerate()
            .filter_map(|(row, v)| v.map(|_| row))
            .collect();
        let dense = series.present();
        let required = period.saturating_mul(2);

        if dense.len() < required {
            warn!(column, period, observations = dense.len(), "not enough data for seasonal analysis");
            return Ok(SeasonalDecomposition::Unavailable {
                column: column.to_string(),
                message: format!(
                    "Insufficient data for seasonal analysis (need at least {} points, got {})",
                    required,
                    dense.len()
                ),
            });
        }

        match decomposer.decompose(&dense, period) {
            Ok(result) => {
                let align = |component: &[f64]| {
                    let mut out = vec![None; self.table.len()];
                    for (&row, &value) in rows.iter().zip(component) {
                        out[row] = Some(value);
                    }
                    out
                };
                Ok(SeasonalDecomposition::Decomposed(SeasonalComponents {
                    column: column.to_string(),
                    period,
                    original: series.values.clone(),
                    trend: align(&result.trend),
                    seasonal: align(&result.seasonal),
                    residual: align(&result.residual),
                }))
            }
            Err(e) => {
                warn!(column, period, error = %e, "seasonal analysis failed");
                let reason = match e {
                    DriftError::DecompositionFailed(reason) => reason,
                    other => other.to_string(),
                };
                Ok(SeasonalDecomposition::Unavailable {
                    column: column.to_string(),
                    message: format!("Seasonal analysis failed: {}", reason),
                })
            }
        }
    }

    /// Descriptive statistics for every numeric column.
    pub fn get_kpi_statistics(&self) -> Vec<KpiStatistics> {
        kpi_statistics(&self.table)
    }
}
