use std::collections::HashMap;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketSample {
    pub timestamp: DateTime<Utc>,
    pub price:     f64,
    pub volume:    f64,
}

/// Response of the CoinGecko `market_chart` endpoint: parallel `[ms, value]` series.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketChart {
    #[serde(default)]
    pub prices:        Vec<(f64, f64)>,
    #[serde(default)]
    pub total_volumes: Vec<(f64, f64)>,
}

impl MarketChart {
    /// Inner-joins prices and volumes on their millisecond timestamp and sorts by time.
    ///
    /// Price order is kept for equal timestamps and every matching volume produces a sample,
    /// so duplicated timestamps are preserved rather than collapsed.
    pub fn into_samples(self) -> Vec<MarketSample> {
        let mut volumes_by_ts: HashMap<i64, Vec<f64>> = HashMap::new();
        for (ts, volume) in &self.total_volumes {
            volumes_by_ts.entry(*ts as i64).or_default().push(*volume);
        }

        let mut samples: Vec<MarketSample> = self
            .prices
            .iter()
            .filter_map(|(ts, price)| {
                let ms = *ts as i64;
                let timestamp = DateTime::<Utc>::from_timestamp_millis(ms)?;
                let volumes = volumes_by_ts.get(&ms)?;
                Some(volumes.iter().map(move |volume| MarketSample { timestamp, price: *price, volume: *volume }))
            })
            .flatten()
            .collect();

        samples.sort_by_key(|sample| sample.timestamp);
        samples
    }
}
