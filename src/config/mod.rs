pub mod anomaly;
pub mod fetch;
pub mod graph;
pub mod log;

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use toml;

pub use anomaly::AnomalyConfig;
pub use fetch::FetchConfig;
pub use graph::WalletGraphConfig;
pub use log::LoggingConfig;

use crate::err_with_loc;
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch:        FetchConfig,
    pub wallet_graph: WalletGraphConfig,
    pub anomaly:      AnomalyConfig,
    pub logging:      LoggingConfig,
}

impl Config {
    pub fn validate(&self) -> crate::Result<()> {
        if self.anomaly.window == 0 {
            return Err(err_with_loc!(ConfigError::InvalidValue("anomaly.window must be at least 1".to_string())));
        }
        if !self.anomaly.z_threshold.is_finite() {
            return Err(err_with_loc!(ConfigError::InvalidValue(format!(
                "anomaly.z_threshold must be finite, got {}",
                self.anomaly.z_threshold
            ))));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(err_with_loc!(ConfigError::InvalidValue("fetch.timeout_secs must be at least 1".to_string())));
        }
        Ok(())
    }
}

pub fn load_config(path: impl AsRef<Path>) -> crate::Result<Config> {
    let path = path.as_ref();
    let config_str = std::fs::read_to_string(path).map_err(|e| {
        err_with_loc!(ConfigError::OpenFileError { path: path.display().to_string(), source: e })
    })?;
    let config: Config = toml::from_str(&config_str).map_err(|e| {
        err_with_loc!(ConfigError::ParseError { path: path.display().to_string(), source: e })
    })?;
    config.validate()?;
    Ok(config)
}

/// Loads the config file if it exists. `None` means the caller runs on defaults;
/// a file that exists but cannot be parsed is still an error.
pub fn load_config_if_present(path: impl AsRef<Path>) -> crate::Result<Option<Config>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    load_config(path).map(Some)
}
