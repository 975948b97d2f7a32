use tracing::debug;

use super::rolling::compute_returns;
use super::rolling::default_min_periods;
use super::rolling::rolling_stat;
use super::rolling::z_score;
use crate::model::AnomalyRow;
use crate::model::MarketSample;
use crate::model::SpikeFlags;

/// Augments a timestamp-ascending table with returns, rolling volume/return statistics,
/// z-scores and spike flags. Volume and returns share the window and min-periods policy.
pub fn detect_anomalies(
    samples: &[MarketSample],
    z_threshold: f64,
    window: usize,
) -> Vec<AnomalyRow> {
    let min_periods = default_min_periods(window);

    let prices: Vec<f64> = samples.iter().map(|s| s.price).collect();
    let returns = compute_returns(&prices);
    let volumes: Vec<Option<f64>> = samples.iter().map(|s| Some(s.volume)).collect();

    let volume_stats = rolling_stat(&volumes, window, min_periods);
    let return_stats = rolling_stat(&returns, window, min_periods);

    let rows: Vec<AnomalyRow> = samples
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let volume_z = z_score(volumes[i], volume_stats.mean[i], volume_stats.std[i]);
            let return_z = z_score(returns[i], return_stats.mean[i], return_stats.std[i]);

            AnomalyRow {
                timestamp: sample.timestamp,
                price: sample.price,
                volume: sample.volume,
                ret: returns[i],
                volume_mean: volume_stats.mean[i],
                volume_std: volume_stats.std[i],
                volume_z,
                return_mean: return_stats.mean[i],
                return_std: return_stats.std[i],
                return_z,
                flags: SpikeFlags::from_z_scores(volume_z, return_z, z_threshold),
            }
        })
        .collect();

    debug!(
        "anomaly::detected::rows::{}::flagged::{}::window::{}::z::{}",
        rows.len(),
        rows.iter().filter(|row| row.is_flagged()).count(),
        window,
        z_threshold
    );
    rows
}

/// The last `tail` rows with any flag set, in table order.
pub fn flagged_rows(
    rows: &[AnomalyRow],
    tail: usize,
) -> Vec<&AnomalyRow> {
    let flagged: Vec<&AnomalyRow> = rows.iter().filter(|row| row.is_flagged()).collect();
    let skip = flagged.len().saturating_sub(tail);
    flagged.into_iter().skip(skip).collect()
}
