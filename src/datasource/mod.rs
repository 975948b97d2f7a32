pub mod blockchain_info;
pub mod coingecko;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio_retry::RetryIf;
use tracing::debug;
use tracing::warn;

pub use blockchain_info::BlockchainInfoClient;
pub use coingecko::CoinGeckoClient;

use crate::config::FetchConfig;
use crate::constants::USER_AGENT;
use crate::error::FetchError;
use crate::model::MarketSample;
use crate::model::RawTransaction;
use crate::utils::retry_schedule;

/// Source of the most recent transactions touching an address.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    async fn fetch_transactions(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<Vec<RawTransaction>, FetchError>;
}

/// Source of a timestamp-ascending price/volume table for a coin.
#[async_trait]
pub trait MarketSource: Send + Sync {
    async fn fetch_market(
        &self,
        coin_id: &str,
        vs_currency: &str,
        days: u32,
    ) -> Result<Vec<MarketSample>, FetchError>;
}

/// JSON-over-HTTP GET with a request timeout and jittered retries on transient failures.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    config: FetchConfig,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::ClientBuildError)?;
        Ok(Self { client, config: config.clone() })
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let schedule =
            retry_schedule(self.config.max_retries, self.config.base_retry_delay_ms, self.config.max_retry_delay_ms);

        RetryIf::start(
            schedule,
            || self.get_json_once(url, query),
            |e: &FetchError| {
                let retry = e.is_retryable();
                if retry {
                    warn!("fetch::retrying::{}", e);
                }
                retry
            },
        )
        .await
    }

    async fn get_json_once<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        debug!("fetch::get::{}::{:?}", url, query);
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| FetchError::RequestError { url: url.to_string(), source: e })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::StatusError { url: url.to_string(), status });
        }

        let body = response.text().await.map_err(|e| FetchError::RequestError { url: url.to_string(), source: e })?;
        serde_json::from_str(&body).map_err(|e| FetchError::DecodeError { url: url.to_string(), source: e })
    }
}

pub(crate) fn join_url(
    base: &str,
    segments: &[&str],
) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        url.push('/');
        url.push_str(&urlencoding::encode(segment));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_encodes_segments_and_trims_slashes() {
        assert_eq!(join_url("http://host/", &["rawaddr", "1abc"]), "http://host/rawaddr/1abc");
        assert_eq!(join_url("http://host/api/v3", &["coins", "a b/c"]), "http://host/api/v3/coins/a%20b%2Fc");
    }
}
