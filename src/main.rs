//! Mock node-status data service.
//!
//! ```text
//!   client ──GET /data──▶ http::server ──▶ state::DataState ──▶ records::generator
//!          ◀──JSON array── (Access-Control-Allow-Origin: *)
//! ```
//!
//! Every second request regenerates the batch; the first request always
//! fills it.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use node_status_mock::lifecycle::{self, StartupOptions};
use node_status_mock::observability::logging;

#[derive(Parser)]
#[command(name = "node-status-mock")]
#[command(about = "Mock HTTP backend serving randomly generated node statuses", long_about = None)]
struct Cli {
    /// TOML config file (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address, overriding the config file
    #[arg(short, long)]
    bind: Option<String>,

    /// Reload generator settings when the config file changes
    #[arg(long, requires = "config")]
    watch: bool,

    /// Seed for reproducible record batches
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match lifecycle::resolve_config(cli.config.as_deref(), cli.bind.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    logging::init_logging(&config.observability.log_level);
    tracing::info!("node-status-mock v{} starting", env!("CARGO_PKG_VERSION"));

    let options = StartupOptions {
        watch_path: if cli.watch { cli.config } else { None },
        seed: cli.seed,
    };

    if let Err(e) = lifecycle::run(config, options).await {
        tracing::error!(error = %e, "Service failed");
        return ExitCode::FAILURE;
    }

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
