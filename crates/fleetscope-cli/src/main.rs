//! Fleetscope CLI - analytics read API over stored algorithm output.

use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

mod commands;
pub(crate) mod shared;

/// Fleetscope - read-only HTTP API over fleet analytics output.
#[derive(Debug, Parser)]
#[command(name = "fleetscope", version, about)]
struct Cli {
    /// Configuration file path.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format: plain (default) or json (for log aggregation).
    #[arg(long, global = true, default_value = "plain", value_parser = ["plain", "json"])]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the analytics HTTP API.
    Serve(commands::serve::ServeArgs),
    /// List the algorithms recorded in the store.
    Algos(commands::algos::AlgosArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Config must load before tracing init: the filter falls back to the
    // configured level when no -v flag is given.
    let config = fleetscope_config::load_config(cli.config.as_deref())?;

    let filter = match cli.verbose {
        0 => EnvFilter::new(&config.logging.level),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    match cli.log_format.as_str() {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .init(),
        _ => tracing_subscriber::fmt().with_env_filter(filter).init(),
    };

    tracing::debug!("fleetscope starting with config: {:?}", cli.config);

    match &cli.command {
        Commands::Serve(args) => commands::serve::execute(args, &config).await,
        Commands::Algos(args) => commands::algos::execute(args, &config).await,
    }
}
