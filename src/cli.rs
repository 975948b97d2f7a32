use clap::Parser;

use crate::config::Config;
use crate::constants::DEFAULT_CONFIG_PATH;

/// Flags left unset fall back to the config file, then to built-in defaults.
#[derive(Debug, Clone, Parser)]
#[command(name = "baseer", version, about = "Builds the transaction graph around a Bitcoin address")]
pub struct BaseerArgs {
    /// Address whose recent transactions are fetched
    #[arg(long)]
    pub address: String,

    /// Number of most recent transactions to include
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output path of the Graphviz DOT file
    #[arg(long)]
    pub out: Option<String>,

    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,
}

impl BaseerArgs {
    pub fn apply(
        &self,
        config: &mut Config,
    ) {
        if let Some(limit) = self.limit {
            config.wallet_graph.limit = limit;
        }
        if let Some(out) = &self.out {
            config.wallet_graph.output = out.clone();
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "raqib", version, about = "Flags volume spikes, pumps and dumps in a coin's market history")]
pub struct RaqibArgs {
    /// CoinGecko coin identifier, e.g. `bitcoin`
    #[arg(long)]
    pub token_id: String,

    /// Days of history to fetch
    #[arg(long)]
    pub days: Option<u32>,

    /// Quote currency
    #[arg(long)]
    pub vs: Option<String>,

    /// Z-score threshold
    #[arg(long)]
    pub z: Option<f64>,

    /// Rolling window length in samples
    #[arg(long)]
    pub win: Option<usize>,

    /// Output path of the JSON report
    #[arg(long)]
    pub out: Option<String>,

    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,
}

impl RaqibArgs {
    pub fn apply(
        &self,
        config: &mut Config,
    ) {
        let anomaly = &mut config.anomaly;
        if let Some(days) = self.days {
            anomaly.days = days;
        }
        if let Some(vs) = &self.vs {
            anomaly.vs_currency = vs.clone();
        }
        if let Some(z) = self.z {
            anomaly.z_threshold = z;
        }
        if let Some(win) = self.win {
            anomaly.window = win;
        }
        if let Some(out) = &self.out {
            anomaly.output = out.clone();
        }
    }
}
