//! `fleetscope algos` command.
//!
//! Lists the distinct algorithm names recorded in the store, one per
//! line, without starting the HTTP server.

use clap::Args;

use fleetscope_config::FleetscopeConfig;

use crate::shared;

/// List the algorithms recorded in the store.
#[derive(Debug, Args)]
pub struct AlgosArgs {
    /// Database path (overrides the configured path).
    #[arg(long)]
    pub db: Option<String>,
}

/// Executes the algos command.
pub async fn execute(args: &AlgosArgs, config: &FleetscopeConfig) -> anyhow::Result<()> {
    let store = shared::open_store(&args.db, config)?;
    let algos = store
        .list_algos()
        .await
        .map_err(|e| anyhow::anyhow!("store query: {e}"))?;

    if algos.is_empty() {
        println!("no algorithms recorded");
        return Ok(());
    }
    for algo in &algos {
        println!("{algo}");
    }

    Ok(())
}
