use anyhow::Result;

use folio_client::{PortfolioApi, PortfolioApiClient};

pub async fn execute(client: &PortfolioApiClient) -> Result<()> {
    let created = client.create_snapshot().await?;
    println!(
        "Snapshot {} saved ({} holdings, net worth HKD {})",
        created.snapshot.date,
        created.snapshot.holdings_snapshot.len(),
        created.snapshot.total_net_worth_hkd.round_dp(2)
    );
    Ok(())
}
