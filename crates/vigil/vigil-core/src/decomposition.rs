//! Classical additive decomposition: Y = T + S + R

use vigil_spi::{Decomposer, DecompositionResult, DriftError, Result};

use crate::series::{fit_line, mean};

/// Additive decomposer with a centered moving-average trend.
///
/// Trend edges the moving average leaves undefined are filled by linear
/// least-squares extrapolation over the nearest `period` trend values.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdditiveDecomposer;

impl AdditiveDecomposer {
    pub fn new() -> Self {
        Self
    }
}

impl Decomposer for AdditiveDecomposer {
    fn decompose(&self, data: &[f64], period: usize) -> Result<DecompositionResult> {
        decompose_additive(data, period)
    }
}

/// Centered moving average of width `period`.
///
/// Even periods use the 2 x period weights `[0.5, 1, .., 1, 0.5] / period`.
/// The first and last `period / 2` entries are `None`.
fn centered_moving_average(data: &[f64], period: usize) -> Vec<Option<f64>> {
    let n = data.len();
    let half = period / 2;
    let weights: Vec<f64> = if period % 2 == 0 {
        let mut w = vec![1.0; period + 1];
        w[0] = 0.5;
        w[period] = 0.5;
        w
    } else {
        vec![1.0; period]
    };

    let mut trend = vec![None; n];
    if n < weights.len() {
        return trend;
    }
    for (i, slot) in trend.iter_mut().enumerate().take(n - half).skip(half) {
        let window = &data[i - half..i - half + weights.len()];
        let sum: f64 = window.iter().zip(&weights).map(|(x, w)| x * w).sum();
        *slot = Some(sum / period as f64);
    }
    trend
}

/// Fill undefined trend edges by linear extrapolation from `npoints` neighbours.
///
/// With fewer than two neighbours the edge value is carried flat.
fn extrapolate_trend(trend: &[Option<f64>], npoints: usize) -> Result<Vec<f64>> {
    let front = trend
        .iter()
        .position(Option::is_some)
        .ok_or_else(|| DriftError::DecompositionFailed("trend is undefined everywhere".into()))?;
    let back = trend
        .iter()
        .rposition(Option::is_some)
        .ok_or_else(|| DriftError::DecompositionFailed("trend is undefined everywhere".into()))?;

    let defined: Vec<f64> = trend[front..=back]
        .iter()
        .map(|v| v.ok_or_else(|| DriftError::DecompositionFailed("gap inside trend".into())))
        .collect::<Result<_>>()?;
    let at = |i: usize| defined[i - front];

    let mut out = vec![0.0; trend.len()];
    for i in front..=back {
        out[i] = at(i);
    }

    let front_last = (front + npoints).min(back);
    let head: Vec<f64> = (front..front_last).map(at).collect();
    let (slope, intercept) = fit_line(front, &head).unwrap_or((0.0, at(front)));
    for (i, slot) in out.iter_mut().enumerate().take(front) {
        *slot = slope * i as f64 + intercept;
    }

    let back_first = front.max(back.saturating_sub(npoints));
    let tail: Vec<f64> = (back_first..back).map(at).collect();
    let (slope, intercept) = fit_line(back_first, &tail).unwrap_or((0.0, at(back)));
    for (i, slot) in out.iter_mut().enumerate().skip(back + 1) {
        *slot = slope * i as f64 + intercept;
    }

    Ok(out)
}

/// Perform additive decomposition over a dense series.
///
/// Needs at least two full periods.
pub fn decompose_additive(data: &[f64], period: usize) -> Result<DecompositionResult> {
    let n = data.len();
    if period == 0 {
        return Err(DriftError::invalid_parameter("period", "must be at least 1"));
    }
    if n < period.saturating_mul(2) {
        return Err(DriftError::DecompositionFailed(format!(
            "series of {} points is shorter than two periods of {}",
            n, period
        )));
    }

    let trend = extrapolate_trend(&centered_moving_average(data, period), period)?;
    let detrended: Vec<f64> = data.iter().zip(&trend).map(|(d, t)| d - t).collect();

    // Seasonal component (average by period position, centered)
    let mut phase_means = Vec::with_capacity(period);
    for pos in 0..period {
        let values: Vec<f64> = detrended.iter().skip(pos).step_by(period).copied().collect();
        phase_means.push(mean(&values).unwrap_or(0.0));
    }
    let offset = mean(&phase_means).unwrap_or(0.0);
    for m in &mut phase_means {
        *m -= offset;
    }
    let seasonal: Vec<f64> = (0..n).map(|i| phase_means[i % period]).collect();

    let residual: Vec<f64> = data
        .iter()
        .zip(&trend)
        .zip(&seasonal)
        .map(|((d, t), s)| d - t - s)
        .collect();

    for (name, component) in [("trend", &trend), ("seasonal", &seasonal), ("residual", &residual)] {
        if component.iter().any(|v| !v.is_finite()) {
            return Err(DriftError::DecompositionFailed(format!(
                "non-finite values in {} component",
                name
            )));
        }
    }

    Ok(DecompositionResult {
        trend,
        seasonal,
        residual,
    })
}
