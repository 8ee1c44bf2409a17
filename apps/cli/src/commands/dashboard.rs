use anyhow::Result;
use clap::Args;

use folio_client::{PortfolioApi, PortfolioApiClient};
use folio_core::errors::Error;
use folio_core::portfolio::dashboard::DashboardState;
use folio_core::portfolio::snapshot::PortfolioSnapshot;

use crate::render;

#[derive(Args)]
pub struct DashboardArgs {
    /// View a historical snapshot (by id or date) instead of the current
    /// portfolio. Snapshot views are read-only and their charts are
    /// recomputed from the captured holdings.
    #[arg(long)]
    pub snapshot: Option<String>,
}

pub async fn execute(client: &PortfolioApiClient, args: DashboardArgs) -> Result<()> {
    let summary = client.get_summary().await?;
    let history = client.get_history().await?;

    let mut state = DashboardState::new(summary);
    if let Some(wanted) = &args.snapshot {
        let snapshot = find_snapshot(&history, wanted)?;
        state.select_snapshot(snapshot.clone());
    }

    render::dashboard(&state.display(), &history);
    Ok(())
}

fn find_snapshot<'a>(
    history: &'a [PortfolioSnapshot],
    wanted: &str,
) -> Result<&'a PortfolioSnapshot, Error> {
    history
        .iter()
        .find(|snapshot| {
            snapshot.id.as_deref() == Some(wanted) || snapshot.date.to_string() == wanted
        })
        .ok_or_else(|| Error::NotFound(format!("snapshot '{wanted}'")))
}
