//! `fleetscope serve` command.
//!
//! Starts the analytics HTTP API, exposing algorithm discovery and
//! series retrieval over JSON.

use clap::Args;

use fleetscope_config::FleetscopeConfig;
use fleetscope_http::HttpServer;

use crate::shared;

/// Start the analytics HTTP API.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// TCP port (overrides the configured port).
    #[arg(long)]
    pub port: Option<u16>,
    /// Database path (overrides the configured path).
    #[arg(long)]
    pub db: Option<String>,
}

/// Executes the serve command.
pub async fn execute(args: &ServeArgs, config: &FleetscopeConfig) -> anyhow::Result<()> {
    let store = shared::open_store(&args.db, config)?;
    let port = args.port.unwrap_or(config.http.port);

    let server = HttpServer::new(store, port);
    tokio::select! {
        result = server.run() => {
            result.map_err(|e| anyhow::anyhow!("server error: {e}"))?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_args_default_to_config() {
        let args = ServeArgs {
            port: None,
            db: None,
        };
        let config = FleetscopeConfig::default();
        assert_eq!(args.port.unwrap_or(config.http.port), 8080);
        assert!(args.db.is_none());
    }

    #[test]
    fn serve_args_port_override_wins() {
        let args = ServeArgs {
            port: Some(9090),
            db: None,
        };
        let config = FleetscopeConfig::default();
        assert_eq!(args.port.unwrap_or(config.http.port), 9090);
    }
}
