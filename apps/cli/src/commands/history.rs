use anyhow::Result;
use clap::{Args, Subcommand};

use folio_client::{PortfolioApi, PortfolioApiClient};

use crate::commands::confirm;
use crate::render;

#[derive(Subcommand)]
pub enum HistoryCommand {
    /// List saved snapshots
    List,
    /// Delete a snapshot from history
    Delete(SnapshotIdArgs),
    /// Replace the current holdings with a past snapshot's holdings
    Restore(RestoreArgs),
}

#[derive(Args)]
pub struct SnapshotIdArgs {
    /// Snapshot id
    pub id: String,
}

#[derive(Args)]
pub struct RestoreArgs {
    /// Snapshot id
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

pub async fn execute(client: &PortfolioApiClient, command: HistoryCommand) -> Result<()> {
    match command {
        HistoryCommand::List => {
            let history = client.get_history().await?;
            render::history(&history);
        }
        HistoryCommand::Delete(args) => {
            client.delete_snapshot(&args.id).await?;
            println!("Deleted snapshot {}", args.id);
        }
        HistoryCommand::Restore(args) => {
            if !args.yes
                && !confirm(
                    "This replaces the current holdings with the snapshot's holdings. Continue?",
                )?
            {
                println!("Restore cancelled.");
                return Ok(());
            }
            let ack = client.restore_snapshot(&args.id).await?;
            match ack.message {
                Some(message) => println!("{message}"),
                None => println!("Snapshot {} restored.", args.id),
            }
            println!("Run `folio snapshot` to save the restored state to history.");
        }
    }
    Ok(())
}
