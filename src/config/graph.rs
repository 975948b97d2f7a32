use serde::Deserialize;
use serde::Serialize;

use crate::constants::DEFAULT_GRAPH_OUTPUT;
use crate::constants::DEFAULT_TOP_LABELS;
use crate::constants::DEFAULT_TRANSACTION_LIMIT;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletGraphConfig {
    /// Number of most recent transactions to include
    pub limit:      usize,
    /// Number of highest-degree addresses labelled in the DOT output
    pub top_labels: usize,
    pub output:     String,
}

impl Default for WalletGraphConfig {
    fn default() -> Self {
        Self {
            limit:      DEFAULT_TRANSACTION_LIMIT,
            top_labels: DEFAULT_TOP_LABELS,
            output:     DEFAULT_GRAPH_OUTPUT.to_string(),
        }
    }
}
