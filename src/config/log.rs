use serde::Deserialize;
use serde::Serialize;

use crate::constants::DEFAULT_LOG_DIRECTORY;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    // Directory where logs will be stored
    pub directory: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: Some(DEFAULT_LOG_DIRECTORY.to_string()),
        }
    }
}
