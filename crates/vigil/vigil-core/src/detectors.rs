//! Outlier detector implementations.

use tracing::debug;
use vigil_api::{RollingDeviationConfig, ZScoreConfig};
use vigil_spi::{DetectionMethod, DetectionParameters, OutlierDetector, Result, SeriesHit};

use crate::series::{mean, median, round_to, sample_std_dev};

// ============================================================================
// Z-Score Detector
// ============================================================================

/// Global z-score outlier detector.
///
/// Flags values whose distance from the column mean exceeds `threshold`
/// sample standard deviations. Constant columns never produce outliers.
#[derive(Debug, Clone)]
pub struct ZScoreOutlierDetector {
    threshold: f64,
}

impl ZScoreOutlierDetector {
    /// Create a new detector; `threshold` must be positive.
    pub fn new(threshold: f64) -> Result<Self> {
        Self::from_config(ZScoreConfig::new(threshold))
    }

    /// Create from configuration.
    pub fn from_config(config: ZScoreConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            threshold: config.threshold,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for ZScoreOutlierDetector {
    fn default() -> Self {
        Self {
            threshold: ZScoreConfig::default().threshold,
        }
    }
}

impl OutlierDetector for ZScoreOutlierDetector {
    fn method(&self) -> DetectionMethod {
        DetectionMethod::ZScore
    }

    fn parameters(&self) -> DetectionParameters {
        DetectionParameters {
            threshold: self.threshold,
            window: None,
        }
    }

    fn detect_series(&self, values: &[Option<f64>]) -> Vec<SeriesHit> {
        let present: Vec<f64> = values.iter().flatten().copied().collect();
        let (Some(mu), Some(sigma)) = (mean(&present), sample_std_dev(&present)) else {
            return Vec::new();
        };
        // Rounding in the mean can leave a tiny non-zero sigma on constant data.
        let constant = present.iter().all(|&x| x == present[0]);
        if constant || sigma == 0.0 || !sigma.is_finite() {
            debug!(sigma, "degenerate standard deviation; no z-score outliers");
            return Vec::new();
        }

        values
            .iter()
            .enumerate()
            .filter_map(|(row, &v)| {
                let value = v?;
                let z = (value - mu).abs() / sigma;
                (z > self.threshold).then_some(SeriesHit {
                    row,
                    value,
                    reference: mu,
                    score: z,
                })
            })
            .collect()
    }
}

// ============================================================================
// Rolling-Median Deviation Detector
// ============================================================================

/// Local deviation detector against a centered rolling median.
///
/// For window `w` the median at row `i` covers rows `i - w/2 ..= i - w/2 + w - 1`.
/// Rows within `w/2` of either end, windows containing a missing value and
/// zero medians are never flagged. Scores are percentages rounded to two
/// decimals.
#[derive(Debug, Clone)]
pub struct RollingDeviationDetector {
    window: usize,
    threshold: f64,
}

impl RollingDeviationDetector {
    /// Create a new detector; `window >= 1`, `threshold` is a positive fraction.
    pub fn new(window: usize, threshold: f64) -> Result<Self> {
        Self::from_config(RollingDeviationConfig::new(window, threshold))
    }

    /// Create from configuration.
    pub fn from_config(config: RollingDeviationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            window: config.window,
            threshold: config.threshold,
        })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Centered rolling median per row; `None` where no full window exists.
    pub fn rolling_median(&self, values: &[Option<f64>]) -> Vec<Option<f64>> {
        let n = values.len();
        let half = self.window / 2;
        let mut out = vec![None; n];
        if n < self.window {
            return out;
        }

        let mut scratch = Vec::with_capacity(self.window);
        for (row, slot) in out.iter_mut().enumerate().take(n - half).skip(half) {
            let start = row - half;
            let end = start + self.window;
            scratch.clear();
            for v in &values[start..end] {
                match v {
                    Some(x) => scratch.push(*x),
                    None => break,
                }
            }
            if scratch.len() == self.window {
                *slot = median(&mut scratch);
            }
        }
        out
    }
}

impl Default for RollingDeviationDetector {
    fn default() -> Self {
        let config = RollingDeviationConfig::default();
        Self {
            window: config.window,
            threshold: config.threshold,
        }
    }
}

impl OutlierDetector for RollingDeviationDetector {
    fn method(&self) -> DetectionMethod {
        DetectionMethod::RollingDeviation
    }

    fn parameters(&self) -> DetectionParameters {
        DetectionParameters {
            threshold: self.threshold,
            window: Some(self.window),
        }
    }

    fn detect_series(&self, values: &[Option<f64>]) -> Vec<SeriesHit> {
        self.rolling_median(values)
            .into_iter()
            .zip(values)
            .enumerate()
            .filter_map(|(row, (med, &v))| {
                let value = v?;
                let med = med?;
                if med == 0.0 {
                    return None;
                }
                let deviation = ((value - med) / med).abs();
                (deviation > self.threshold).then(|| SeriesHit {
                    row,
                    value,
                    reference: med,
                    score: round_to(deviation * 100.0, 2),
                })
            })
            .collect()
    }
}
