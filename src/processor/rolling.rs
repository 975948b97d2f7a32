//! Trailing-window statistics over series that may contain undefined (`None`) values.
//!
//! Any arithmetic on an undefined operand is undefined, and so is any result that is not finite.

use crate::constants::MIN_PERIODS_FLOOR;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RollingStats {
    pub mean: Vec<Option<f64>>,
    pub std:  Vec<Option<f64>>,
}

fn finite(value: f64) -> Option<f64> { value.is_finite().then_some(value) }

/// `max(3, window / 3)`
pub fn default_min_periods(window: usize) -> usize { MIN_PERIODS_FLOOR.max(window / 3) }

/// Fractional change from the previous price. The first entry and any division by a zero
/// price are undefined.
pub fn compute_returns(prices: &[f64]) -> Vec<Option<f64>> {
    let mut returns = Vec::with_capacity(prices.len());
    if prices.is_empty() {
        return returns;
    }
    returns.push(None);
    returns.extend(prices.windows(2).map(|pair| {
        let (prev, curr) = (pair[0], pair[1]);
        if prev == 0.0 {
            return None;
        }
        finite((curr - prev) / prev)
    }));
    returns
}

/// Population mean and standard deviation of the trailing `window` values ending at each index.
/// Undefined values inside the window are skipped; with fewer than `min_periods` defined values
/// both statistics are undefined.
pub fn rolling_stat(
    series: &[Option<f64>],
    window: usize,
    min_periods: usize,
) -> RollingStats {
    let window = window.max(1);
    let mut stats = RollingStats {
        mean: Vec::with_capacity(series.len()),
        std:  Vec::with_capacity(series.len()),
    };

    for i in 0..series.len() {
        let start = (i + 1).saturating_sub(window);
        let defined: Vec<f64> = series[start..=i].iter().filter_map(|v| v.and_then(finite)).collect();

        if defined.is_empty() || defined.len() < min_periods {
            stats.mean.push(None);
            stats.std.push(None);
            continue;
        }

        let n = defined.len() as f64;
        let mean = defined.iter().sum::<f64>() / n;
        let variance = defined.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        stats.mean.push(finite(mean));
        stats.std.push(finite(variance.sqrt()));
    }

    stats
}

/// `(value - mean) / std`, undefined when any operand is undefined or the deviation is zero.
pub fn z_score(
    value: Option<f64>,
    mean: Option<f64>,
    std: Option<f64>,
) -> Option<f64> {
    let (value, mean, std) = (value?, mean?, std?);
    if std == 0.0 {
        return None;
    }
    finite((value - mean) / std)
}

/// Z-score of each value against its own trailing window, using the default min-periods policy.
pub fn rolling_z(
    series: &[f64],
    window: usize,
) -> Vec<Option<f64>> {
    let values: Vec<Option<f64>> = series.iter().copied().map(finite).collect();
    let stats = rolling_stat(&values, window, default_min_periods(window));
    values
        .iter()
        .zip(stats.mean.iter().zip(stats.std.iter()))
        .map(|(&value, (&mean, &std))| z_score(value, mean, std))
        .collect()
}
