//! S.P.A.R.C. CLI binary.
//!
//! Manages personas and campaigns, generates and adapts content, delivers it
//! and records passive schedules and analytics.

use anyhow::Context;
use clap::Parser;
use sparc::cli::{Cli, execute};
use sparc::{AppState, SparcConfig, init_logging};

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => SparcConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => SparcConfig::load().context("Failed to load configuration")?,
    };
    let state = AppState::open(config).context("Failed to initialise S.P.A.R.C.")?;
    execute(&state, cli.command).await
}

#[tokio::main]
async fn main() {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.json_logs) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
