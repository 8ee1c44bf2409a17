//! Server-computed portfolio summary for the current view.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::allocation::{CategoryDistribution, MarketDistribution};
use crate::portfolio::holdings::Holding;

/// The `GET /portfolio/summary` payload: valued holdings, total net worth
/// and the three distributions, all computed server-side.
///
/// For the current view these figures are used verbatim; the client never
/// recomputes them. Local aggregation only happens when viewing a
/// historical snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_net_worth_hkd: Decimal,

    #[serde(default)]
    pub holdings: Vec<Holding>,

    #[serde(default)]
    pub market_distribution: MarketDistribution,
    #[serde(default)]
    pub sector_distribution: CategoryDistribution,
    #[serde(default)]
    pub ticker_distribution: CategoryDistribution,
}
