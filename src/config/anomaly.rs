use serde::Deserialize;
use serde::Serialize;

use crate::constants::DEFAULT_ANOMALY_OUTPUT;
use crate::constants::DEFAULT_DAYS;
use crate::constants::DEFAULT_FLAGGED_TAIL;
use crate::constants::DEFAULT_VS_CURRENCY;
use crate::constants::DEFAULT_WINDOW;
use crate::constants::DEFAULT_Z_THRESHOLD;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnomalyConfig {
    pub z_threshold:  f64,
    pub window:       usize,
    pub days:         u32,
    pub vs_currency:  String,
    /// How many of the most recent flagged rows are printed
    pub flagged_tail: usize,
    pub output:       String,
}

impl Default for AnomalyConfig {
    fn default() -> Self {
        Self {
            z_threshold:  DEFAULT_Z_THRESHOLD,
            window:       DEFAULT_WINDOW,
            days:         DEFAULT_DAYS,
            vs_currency:  DEFAULT_VS_CURRENCY.to_string(),
            flagged_tail: DEFAULT_FLAGGED_TAIL,
            output:       DEFAULT_ANOMALY_OUTPUT.to_string(),
        }
    }
}
