use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;
use clap::{Args, ValueEnum};

use folio_client::{PortfolioApi, PortfolioApiClient};
use folio_core::backup::{backup_file_name, BackupPayload, ImportStrategy};

use crate::commands::confirm;
use crate::config::Config;

#[derive(Args)]
pub struct ExportArgs {
    /// Directory to write the backup into (default: the download directory)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    /// Update the current holdings and keep all history
    Current,
    /// Replace everything, history included
    Full,
}

impl From<StrategyArg> for ImportStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Current => ImportStrategy::Current,
            StrategyArg::Full => ImportStrategy::Full,
        }
    }
}

#[derive(Args)]
pub struct ImportArgs {
    /// Backup file to import
    pub file: PathBuf,

    /// How the server applies the backup
    #[arg(long, value_enum, default_value_t = StrategyArg::Current)]
    pub strategy: StrategyArg,

    /// Skip the confirmation prompt for a full overwrite
    #[arg(long)]
    pub yes: bool,
}

pub async fn export(client: &PortfolioApiClient, config: &Config, args: ExportArgs) -> Result<()> {
    let payload = client.export_data().await?;
    let dir = args.out.unwrap_or_else(|| config.download_dir.clone());
    let file = write_backup(&dir, &payload)?;

    let (holdings, snapshots) = payload.record_counts();
    println!(
        "Exported {holdings} holdings and {snapshots} snapshots to {}",
        file.display()
    );
    Ok(())
}

pub async fn import(client: &PortfolioApiClient, args: ImportArgs) -> Result<()> {
    let text = fs::read_to_string(&args.file)?;
    // Parse before any network call: a broken file is reported here and
    // never reaches the server.
    let payload = BackupPayload::parse(&text)?;

    let strategy: ImportStrategy = args.strategy.into();
    if strategy.is_destructive()
        && !args.yes
        && !confirm("Warning: this will CLEAR ALL existing history and overwrite everything. Continue?")?
    {
        println!("Import cancelled.");
        return Ok(());
    }

    let ack = client.import_data(&payload, strategy).await?;
    match ack.message {
        Some(message) => println!("{message}"),
        None => println!("Import complete."),
    }
    Ok(())
}

/// Write the backup into `dir` under the date-stamped file name.
fn write_backup(dir: &Path, payload: &BackupPayload) -> Result<PathBuf> {
    let file = dir.join(backup_file_name(Local::now().date_naive()));
    fs::write(&file, payload.to_pretty_json())?;
    Ok(file)
}
