mod commands;
mod config;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use config::Config;
use folio_client::PortfolioApiClient;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Terminal dashboard for a portfolio tracking API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show net worth and the market/sector/ticker distribution charts
    Dashboard(commands::dashboard::DashboardArgs),
    /// List or modify holdings
    #[command(subcommand)]
    Holdings(commands::holdings::HoldingsCommand),
    /// Capture a snapshot of the current portfolio into history
    Snapshot,
    /// Inspect or manage snapshot history
    #[command(subcommand)]
    History(commands::history::HistoryCommand),
    /// Download a backup file of all portfolio data
    Export(commands::backup::ExportArgs),
    /// Import a previously exported backup file
    Import(commands::backup::ImportArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    init_tracing();
    let cli = Cli::parse();

    let client = PortfolioApiClient::with_timeout(&config.api_url, config.request_timeout)?;
    tracing::debug!("Using portfolio API at {}", config.api_url);

    match cli.command {
        Commands::Dashboard(args) => commands::dashboard::execute(&client, args).await?,
        Commands::Holdings(command) => commands::holdings::execute(&client, command).await?,
        Commands::Snapshot => commands::snapshot::execute(&client).await?,
        Commands::History(command) => commands::history::execute(&client, command).await?,
        Commands::Export(args) => commands::backup::export(&client, &config, args).await?,
        Commands::Import(args) => commands::backup::import(&client, args).await?,
    }

    Ok(())
}
