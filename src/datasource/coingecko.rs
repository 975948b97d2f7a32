use async_trait::async_trait;
use tracing::info;

use super::HttpFetcher;
use super::MarketSource;
use super::join_url;
use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::model::MarketChart;
use crate::model::MarketSample;

#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    http:     HttpFetcher,
    base_url: String,
}

impl CoinGeckoClient {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        Ok(Self {
            http:     HttpFetcher::new(config)?,
            base_url: config.coingecko_url.clone(),
        })
    }
}

#[async_trait]
impl MarketSource for CoinGeckoClient {
    async fn fetch_market(
        &self,
        coin_id: &str,
        vs_currency: &str,
        days: u32,
    ) -> Result<Vec<MarketSample>, FetchError> {
        let url = join_url(&self.base_url, &["coins", coin_id, "market_chart"]);
        let query = [("vs_currency", vs_currency.to_string()), ("days", days.to_string())];

        let chart: MarketChart = self.http.get_json(&url, &query).await?;
        let samples = chart.into_samples();
        info!("coingecko::fetched::{}::samples::{}", coin_id, samples.len());
        Ok(samples)
    }
}
