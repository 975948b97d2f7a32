// ─────────────────────────────────────────────────────────────────────────────
//  Raqib — Token Activity Monitor
//  Part of the Al-Hafiz Project, the Guardian Layer of BismillahDAO.
//
//  Raqib (رقيب): "The Watchful Guardian" — watches a token's price and volume
//  history and highlights spikes, pumps and dumps.
//
//  In the name of Allah, the Most Gracious, the Most Merciful.
// ─────────────────────────────────────────────────────────────────────────────

use clap::Parser;
use muraqib::cli::RaqibArgs;
use muraqib::engine::Raqib;
use muraqib::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
  dotenvy::dotenv().ok();
  Raqib::run(RaqibArgs::parse()).await?;
  Ok(())
}
