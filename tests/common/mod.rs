#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Duration;
use chrono::TimeZone;
use chrono::Utc;
use muraqib::config::Config;
use muraqib::config::FetchConfig;
use muraqib::datasource::MarketSource;
use muraqib::datasource::TransactionSource;
use muraqib::error::FetchError;
use muraqib::model::MarketSample;
use muraqib::model::RawTransaction;
use reqwest::StatusCode;

/// Test fixtures for creating consistent test data
pub struct TestFixtures;

impl TestFixtures {
    pub fn tx(
        hash: &str,
        inputs: &[&str],
        outputs: &[&str],
    ) -> RawTransaction {
        RawTransaction::new(hash, inputs, outputs)
    }

    pub fn tx_owned(
        hash: &str,
        inputs: &[String],
        outputs: &[String],
    ) -> RawTransaction {
        let inputs: Vec<&str> = inputs.iter().map(String::as_str).collect();
        let outputs: Vec<&str> = outputs.iter().map(String::as_str).collect();
        RawTransaction::new(hash, &inputs, &outputs)
    }

    /// Hourly samples starting 2024-01-01 00:00 UTC.
    pub fn samples(
        prices: &[f64],
        volumes: &[f64],
    ) -> Vec<MarketSample> {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        prices
            .iter()
            .zip(volumes)
            .enumerate()
            .map(|(i, (&price, &volume))| MarketSample {
                timestamp: start + Duration::hours(i as i64),
                price,
                volume,
            })
            .collect()
    }

    /// Flat price and volume with a single volume spike.
    pub fn flat_with_volume_spike(
        len: usize,
        spike_at: usize,
    ) -> Vec<MarketSample> {
        let prices = vec![100.0; len];
        let mut volumes = vec![1_000.0; len];
        volumes[spike_at] = 5_000.0;
        Self::samples(&prices, &volumes)
    }

    /// Price oscillating between 100 and 101 with constant volume, then a jump to `last_price`.
    pub fn oscillating_then_jump(
        len: usize,
        last_price: f64,
    ) -> Vec<MarketSample> {
        let mut prices: Vec<f64> = (0..len).map(|i| if i % 2 == 0 { 100.0 } else { 101.0 }).collect();
        prices.push(last_price);
        let volumes = vec![1_000.0; prices.len()];
        Self::samples(&prices, &volumes)
    }

    /// Config whose outputs and logs land in `dir`, with fast retries.
    pub fn config_in(dir: &std::path::Path) -> Config {
        let mut config = Config::default();
        config.wallet_graph.output = dir.join("graph.dot").display().to_string();
        config.anomaly.output = dir.join("anomalies.json").display().to_string();
        config.logging.directory = Some(dir.join("logs").display().to_string());
        config.fetch = Self::fast_fetch_config("http://127.0.0.1:1");
        config
    }

    pub fn fast_fetch_config(base_url: &str) -> FetchConfig {
        FetchConfig {
            blockchain_info_url: base_url.to_string(),
            coingecko_url:       base_url.to_string(),
            timeout_secs:        5,
            max_retries:         2,
            base_retry_delay_ms: 1,
            max_retry_delay_ms:  5,
        }
    }
}

fn unavailable() -> FetchError {
    FetchError::StatusError { url: "http://mock".to_string(), status: StatusCode::SERVICE_UNAVAILABLE }
}

/// Returns fixed transactions, or a 503 when constructed with `None`. Records requested limits.
pub struct StaticTransactionSource {
    pub txs:      Option<Vec<RawTransaction>>,
    pub requests: Mutex<Vec<(String, usize)>>,
}

impl StaticTransactionSource {
    pub fn new(txs: Option<Vec<RawTransaction>>) -> Self { Self { txs, requests: Mutex::new(Vec::new()) } }
}

#[async_trait]
impl TransactionSource for StaticTransactionSource {
    async fn fetch_transactions(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<Vec<RawTransaction>, FetchError> {
        self.requests.lock().unwrap().push((address.to_string(), limit));
        self.txs.clone().ok_or_else(unavailable)
    }
}

pub struct StaticMarketSource {
    pub samples: Option<Vec<MarketSample>>,
}

#[async_trait]
impl MarketSource for StaticMarketSource {
    async fn fetch_market(
        &self,
        _coin_id: &str,
        _vs_currency: &str,
        _days: u32,
    ) -> Result<Vec<MarketSample>, FetchError> {
        self.samples.clone().ok_or_else(unavailable)
    }
}
