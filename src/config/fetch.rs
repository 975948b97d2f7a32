use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use crate::constants::BLOCKCHAIN_INFO_BASE_URL;
use crate::constants::COINGECKO_BASE_URL;
use crate::constants::DEFAULT_BASE_RETRY_DELAY_MS;
use crate::constants::DEFAULT_MAX_RETRIES;
use crate::constants::DEFAULT_MAX_RETRY_DELAY_MS;
use crate::constants::DEFAULT_TIMEOUT_SECS;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub blockchain_info_url: String,
    pub coingecko_url:       String,
    pub timeout_secs:        u64,
    pub max_retries:         usize,
    pub base_retry_delay_ms: u64,
    pub max_retry_delay_ms:  u64,
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration { Duration::from_secs(self.timeout_secs) }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            blockchain_info_url: BLOCKCHAIN_INFO_BASE_URL.to_string(),
            coingecko_url:       COINGECKO_BASE_URL.to_string(),
            timeout_secs:        DEFAULT_TIMEOUT_SECS,
            max_retries:         DEFAULT_MAX_RETRIES,
            base_retry_delay_ms: DEFAULT_BASE_RETRY_DELAY_MS,
            max_retry_delay_ms:  DEFAULT_MAX_RETRY_DELAY_MS,
        }
    }
}
