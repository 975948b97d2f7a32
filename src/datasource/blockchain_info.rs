use async_trait::async_trait;
use tracing::info;

use super::HttpFetcher;
use super::TransactionSource;
use super::join_url;
use crate::config::FetchConfig;
use crate::constants::BLOCKCHAIN_INFO_MIN_FETCH_LIMIT;
use crate::error::FetchError;
use crate::model::RawAddressResponse;
use crate::model::RawTransaction;

#[derive(Debug, Clone)]
pub struct BlockchainInfoClient {
    http:     HttpFetcher,
    base_url: String,
}

impl BlockchainInfoClient {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        Ok(Self {
            http:     HttpFetcher::new(config)?,
            base_url: config.blockchain_info_url.clone(),
        })
    }
}

#[async_trait]
impl TransactionSource for BlockchainInfoClient {
    async fn fetch_transactions(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<Vec<RawTransaction>, FetchError> {
        let url = join_url(&self.base_url, &["rawaddr", address]);
        let request_limit = limit.max(BLOCKCHAIN_INFO_MIN_FETCH_LIMIT);

        let response: RawAddressResponse = self.http.get_json(&url, &[("limit", request_limit.to_string())]).await?;

        let mut txs = response.txs;
        txs.truncate(limit);
        info!("blockchain_info::fetched::{}::transactions::{}", address, txs.len());
        Ok(txs)
    }
}
