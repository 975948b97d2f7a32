use std::sync::Arc;

use tracing::error;
use tracing::info;
use tracing::warn;

use crate::cli::BaseerArgs;
use crate::config::Config;
use crate::config::load_config_if_present;
use crate::datasource::BlockchainInfoClient;
use crate::datasource::TransactionSource;
use crate::err_with_loc;
use crate::error::Result;
use crate::model::WalletGraph;
use crate::processor::build_graph;
use crate::report::print_graph_summary;
use crate::report::write_graph_dot;
use crate::tracing::setup_tracing;

#[derive(Clone)]
pub struct Baseer {
  pub config: Config,
  pub source: Arc<dyn TransactionSource>,
}

impl Baseer {
  pub fn new(
    config: Config,
    source: Arc<dyn TransactionSource>,
  ) -> Self {
    Self { config, source }
  }

  pub async fn run(args: BaseerArgs) -> Result<()> {
    let loaded = load_config_if_present(&args.config)?;
    let config_found = loaded.is_some();
    let mut config = loaded.unwrap_or_default();
    args.apply(&mut config);
    config.validate()?;

    let _guard = setup_tracing("baseer", &config.logging)?;
    info!("Starting Baseer (بصير): The Analyzer");
    if !config_found {
      warn!("baseer::config_not_found::{}::using_defaults", args.config);
    }

    let client = BlockchainInfoClient::new(&config.fetch).map_err(|e| err_with_loc!(e))?;
    let baseer = Baseer::new(config, Arc::new(client));

    baseer.analyze(&args.address).await?;

    info!("baseer::shutdown");
    Ok(())
  }

  /// Fetches, aggregates and reports one address. Returns `None` without writing anything
  /// when the fetch fails.
  pub async fn analyze(
    &self,
    address: &str,
  ) -> Result<Option<WalletGraph>> {
    let limit = self.config.wallet_graph.limit;

    let txs = match self.source.fetch_transactions(address, limit).await {
      Ok(txs) => txs,
      Err(e) => {
        error!("baseer::fetch_failed::{}::{}", address, e);
        eprintln!("[!] Failed to fetch transactions for {}: {}", address, e);
        return Ok(None);
      },
    };
    info!("baseer::transactions_fetched::{}::{}", address, txs.len());

    let graph = build_graph(&txs);
    print_graph_summary(&graph);
    write_graph_dot(&graph, &self.config.wallet_graph.output, self.config.wallet_graph.top_labels)?;

    Ok(Some(graph))
  }
}
