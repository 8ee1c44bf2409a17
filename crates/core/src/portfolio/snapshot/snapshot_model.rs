//! Portfolio snapshot domain model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::holdings::Holding;

/// An immutable, dated capture of the full holdings list and its total
/// net worth, created by an explicit "update snapshot" action.
///
/// The stored total and the holdings list are two independently captured
/// values; both are trusted as-is. A snapshot is never mutated after
/// creation, only deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub date: NaiveDate,

    /// Net worth in HKD as computed when the snapshot was taken. Never
    /// re-derived from `holdings_snapshot`, even if price data has since
    /// moved.
    pub total_net_worth_hkd: Decimal,

    /// Valued holdings as they were at capture time.
    #[serde(default)]
    pub holdings_snapshot: Vec<Holding>,
}

impl PortfolioSnapshot {
    /// Identifier label for logs and error messages.
    pub fn label(&self) -> String {
        match &self.id {
            Some(id) => format!("{} ({})", self.date, id),
            None => self.date.to_string(),
        }
    }
}
