//! Aggregation of a holdings list into the three distribution charts.

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::{OPTION_SECTOR, UNKNOWN_SECTOR};
use crate::portfolio::holdings::{AssetType, Holding};

use super::{CategoryDistribution, MarketDistribution, PortfolioDistributions};

/// Aggregate holdings into market, sector and ticker distributions.
///
/// Pure and order-independent: each holding contributes once and every
/// accumulation is a plain sum. Cash counts only toward the market chart's
/// `Cash` bucket. Stocks contribute their market value everywhere. Options
/// contribute their own carrying value to the market chart but their
/// underlying notional exposure to the sector and ticker charts, so a
/// short put and the same amount of long stock show comparable slices
/// there.
///
/// Net worth is not computed here; the summary endpoint supplies it for
/// the current view and snapshots carry their own captured total.
pub fn aggregate_holdings(holdings: &[Holding]) -> PortfolioDistributions {
    let mut market = MarketDistribution::default();
    let mut sector = CategoryDistribution::new();
    let mut ticker = CategoryDistribution::new();

    for holding in holdings {
        let value = holding.market_value();
        match holding.asset_type {
            AssetType::Cash => {
                market.credit_cash(value);
            }
            AssetType::Stock => {
                market.credit(holding.market, value);
                sector.credit(sector_label(holding, UNKNOWN_SECTOR), value);
                if let Some(symbol) = holding.ticker.as_deref() {
                    ticker.credit(symbol, value);
                }
            }
            AssetType::Option => {
                market.credit(holding.market, value);
                let exposure = holding.exposure_value();
                sector.credit(sector_label(holding, OPTION_SECTOR), exposure);
                if let Some(symbol) = holding.ticker.as_deref() {
                    ticker.credit(symbol, exposure);
                }
            }
        }
    }

    // Zero-valued categories are dropped before presentation; the market
    // chart keeps its four fixed buckets even at zero.
    sector.retain_nonzero();
    ticker.retain_nonzero();

    debug!(
        "Aggregated {} holdings into {} sectors and {} tickers",
        holdings.len(),
        sector.len(),
        ticker.len()
    );

    PortfolioDistributions {
        market,
        sector,
        ticker,
    }
}

/// Share of `value` in `total` as a percentage rounded to two decimals.
pub fn percent_of(value: Decimal, total: Decimal) -> Decimal {
    if total == Decimal::ZERO {
        return Decimal::ZERO;
    }
    (value / total * dec!(100)).round_dp(2)
}

fn sector_label<'a>(holding: &'a Holding, fallback: &'a str) -> &'a str {
    holding
        .sector
        .as_deref()
        .filter(|sector| !sector.is_empty())
        .unwrap_or(fallback)
}
