use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Volume, pump and dump indicators for one row. An undefined z-score never flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpikeFlags {
    pub volume_spike: bool,
    pub pump_spike:   bool,
    pub dump_spike:   bool,
}

impl SpikeFlags {
    pub fn from_z_scores(
        volume_z: Option<f64>,
        return_z: Option<f64>,
        z_threshold: f64,
    ) -> Self {
        Self {
            volume_spike: volume_z.is_some_and(|z| z > z_threshold),
            pump_spike:   return_z.is_some_and(|z| z > z_threshold),
            dump_spike:   return_z.is_some_and(|z| z < -z_threshold),
        }
    }

    pub fn any(&self) -> bool { self.volume_spike || self.pump_spike || self.dump_spike }
}

/// A market sample with its rolling statistics. `None` marks an undefined value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyRow {
    pub timestamp:   DateTime<Utc>,
    pub price:       f64,
    pub volume:      f64,
    #[serde(rename = "return")]
    pub ret:         Option<f64>,
    pub volume_mean: Option<f64>,
    pub volume_std:  Option<f64>,
    pub volume_z:    Option<f64>,
    pub return_mean: Option<f64>,
    pub return_std:  Option<f64>,
    pub return_z:    Option<f64>,
    #[serde(flatten)]
    pub flags:       SpikeFlags,
}

impl AnomalyRow {
    pub fn is_flagged(&self) -> bool { self.flags.any() }
}
