//! Numeric helpers over dense series.

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(data.iter().sum::<f64>() / data.len() as f64)
}

/// Sample standard deviation (n - 1); `None` with fewer than two values.
pub fn sample_std_dev(data: &[f64]) -> Option<f64> {
    if data.len() < 2 {
        return None;
    }
    let m = mean(data)?;
    let variance = data.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (data.len() - 1) as f64;
    Some(variance.sqrt())
}

/// Median of a window; sorts the slice in place.
pub fn median(window: &mut [f64]) -> Option<f64> {
    if window.is_empty() {
        return None;
    }
    window.sort_by(f64::total_cmp);
    let mid = window.len() / 2;
    if window.len() % 2 == 0 {
        Some((window[mid - 1] + window[mid]) / 2.0)
    } else {
        Some(window[mid])
    }
}

/// Round to a fixed number of decimals.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Least-squares line `y = slope * x + intercept` through `(x_start + i, ys[i])`.
///
/// `None` with fewer than two points.
pub fn fit_line(x_start: usize, ys: &[f64]) -> Option<(f64, f64)> {
    match ys.len() {
        0 | 1 => None,
        n => {
            let xs: Vec<f64> = (x_start..x_start + n).map(|x| x as f64).collect();
            let x_mean = mean(&xs)?;
            let y_mean = mean(ys)?;
            let (mut sxy, mut sxx) = (0.0, 0.0);
            for (x, y) in xs.iter().zip(ys) {
                sxy += (x - x_mean) * (y - y_mean);
                sxx += (x - x_mean).powi(2);
            }
            let slope = sxy / sxx;
            Some((slope, y_mean - slope * x_mean))
        }
    }
}
