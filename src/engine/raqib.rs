use std::sync::Arc;

use tracing::error;
use tracing::info;
use tracing::warn;

use crate::cli::RaqibArgs;
use crate::config::Config;
use crate::config::load_config_if_present;
use crate::datasource::CoinGeckoClient;
use crate::datasource::MarketSource;
use crate::err_with_loc;
use crate::error::Result;
use crate::model::AnomalyRow;
use crate::processor::detect_anomalies;
use crate::processor::flagged_rows;
use crate::report::print_flagged;
use crate::report::write_anomalies_json;
use crate::tracing::setup_tracing;

#[derive(Clone)]
pub struct Raqib {
  pub config: Config,
  pub source: Arc<dyn MarketSource>,
}

impl Raqib {
  pub fn new(
    config: Config,
    source: Arc<dyn MarketSource>,
  ) -> Self {
    Self { config, source }
  }

  pub async fn run(args: RaqibArgs) -> Result<()> {
    let loaded = load_config_if_present(&args.config)?;
    let config_found = loaded.is_some();
    let mut config = loaded.unwrap_or_default();
    args.apply(&mut config);
    config.validate()?;

    let _guard = setup_tracing("raqib", &config.logging)?;
    info!("Starting Raqib (رقيب): The Watchful Guardian");
    if !config_found {
      warn!("raqib::config_not_found::{}::using_defaults", args.config);
    }

    let client = CoinGeckoClient::new(&config.fetch).map_err(|e| err_with_loc!(e))?;
    let raqib = Raqib::new(config, Arc::new(client));

    raqib.analyze(&args.token_id).await?;

    info!("raqib::shutdown");
    Ok(())
  }

  /// Fetches one coin's market history, flags anomalies and reports them. Returns `None`
  /// without writing anything when the fetch fails.
  pub async fn analyze(
    &self,
    coin_id: &str,
  ) -> Result<Option<Vec<AnomalyRow>>> {
    let anomaly = &self.config.anomaly;

    let samples = match self.source.fetch_market(coin_id, &anomaly.vs_currency, anomaly.days).await {
      Ok(samples) => samples,
      Err(e) => {
        error!("raqib::fetch_failed::{}::{}", coin_id, e);
        eprintln!("[!] Failed to fetch market data for {}: {}", coin_id, e);
        return Ok(None);
      },
    };
    info!("raqib::samples_fetched::{}::{}", coin_id, samples.len());

    let rows = detect_anomalies(&samples, anomaly.z_threshold, anomaly.window);
    write_anomalies_json(&rows, &anomaly.output)?;
    print_flagged(&flagged_rows(&rows, anomaly.flagged_tail));

    Ok(Some(rows))
  }
}
