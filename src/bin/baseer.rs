// ─────────────────────────────────────────────────────────────────────────────
//  Baseer — Wallet Analyzer
//  Part of the Al-Hafiz Project, the Guardian Layer of BismillahDAO.
//
//  Baseer (بصير): "The Analyzer" — maps where a wallet's funds come from and
//  where they go, one transaction graph at a time.
//
//  In the name of Allah, the Most Gracious, the Most Merciful.
// ─────────────────────────────────────────────────────────────────────────────

use clap::Parser;
use muraqib::cli::BaseerArgs;
use muraqib::engine::Baseer;
use muraqib::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
  dotenvy::dotenv().ok();
  Baseer::run(BaseerArgs::parse()).await?;
  Ok(())
}
