//! Distribution models for portfolio breakdown charts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::portfolio::holdings::Market;

/// Breakdown by market with fixed, always-present buckets.
///
/// The four keys exist even at zero so that charts built on them keep
/// stable, comparable slices; markets with no holdings render as zero
/// rather than disappearing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketDistribution {
    #[serde(rename = "US", default)]
    pub us: Decimal,
    #[serde(rename = "HK", default)]
    pub hk: Decimal,
    #[serde(rename = "CN", default)]
    pub cn: Decimal,
    #[serde(rename = "Cash", default)]
    pub cash: Decimal,
}

impl MarketDistribution {
    /// Accumulate a value into one of the market buckets.
    pub fn credit(&mut self, market: Market, value: Decimal) {
        match market {
            Market::Us => self.us += value,
            Market::Hk => self.hk += value,
            Market::Cn => self.cn += value,
        }
    }

    /// Accumulate a value into the cash bucket.
    pub fn credit_cash(&mut self, value: Decimal) {
        self.cash += value;
    }

    /// Sum over all four buckets.
    pub fn total(&self) -> Decimal {
        self.us + self.hk + self.cn + self.cash
    }

    /// The four buckets in fixed display order.
    pub fn entries(&self) -> [(&'static str, Decimal); 4] {
        [
            ("US", self.us),
            ("HK", self.hk),
            ("CN", self.cn),
            ("Cash", self.cash),
        ]
    }
}

/// Open-keyed breakdown used for the sector and ticker charts.
///
/// Keys are created on first contribution. Contributions are summed as
/// given - a short option's negative carrying value is never clamped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryDistribution(HashMap<String, Decimal>);

impl CategoryDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate a value under a category key.
    pub fn credit(&mut self, key: &str, value: Decimal) {
        *self.0.entry(key.to_string()).or_insert(Decimal::ZERO) += value;
    }

    pub fn get(&self, key: &str) -> Decimal {
        self.0.get(key).copied().unwrap_or_default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn total(&self) -> Decimal {
        self.0.values().copied().sum()
    }

    /// Drop zero-valued categories; they convey nothing on a pie chart.
    pub fn retain_nonzero(&mut self) {
        self.0.retain(|_, value| *value != Decimal::ZERO);
    }

    /// Entries sorted by value descending (key ascending on ties) for
    /// presentation.
    pub fn entries_by_value(&self) -> Vec<(&str, Decimal)> {
        let mut entries: Vec<(&str, Decimal)> = self
            .0
            .iter()
            .map(|(key, value)| (key.as_str(), *value))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

/// The three category breakdowns computed from one holdings list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioDistributions {
    pub market: MarketDistribution,
    pub sector: CategoryDistribution,
    pub ticker: CategoryDistribution,
}
