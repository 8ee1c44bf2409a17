//! Dashboard view model: current portfolio vs. a selected snapshot.

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::portfolio::allocation::{aggregate_holdings, PortfolioDistributions};
use crate::portfolio::holdings::Holding;
use crate::portfolio::snapshot::PortfolioSnapshot;
use crate::portfolio::summary::PortfolioSummary;

/// Everything the dashboard renders for one view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub net_worth_hkd: Decimal,
    pub holdings: Vec<Holding>,
    pub distributions: PortfolioDistributions,
    /// Set when the data describes a historical snapshot.
    pub snapshot_date: Option<NaiveDate>,
}

/// Explicit view state for the dashboard.
///
/// Exactly two states exist: showing the current portfolio, or viewing one
/// historical snapshot. Transitions happen only on explicit selection and
/// deselection. While a snapshot is selected every holding mutation is
/// refused before any network call is issued, so an edit can never land on
/// the wrong holdings set.
#[derive(Debug, Clone)]
pub struct DashboardState {
    summary: PortfolioSummary,
    selected: Option<PortfolioSnapshot>,
}

impl DashboardState {
    pub fn new(summary: PortfolioSummary) -> Self {
        Self {
            summary,
            selected: None,
        }
    }

    /// Replace the current summary after a re-fetch. The selected snapshot,
    /// if any, is unaffected.
    pub fn refresh(&mut self, summary: PortfolioSummary) {
        self.summary = summary;
    }

    /// Switch to viewing a historical snapshot.
    pub fn select_snapshot(&mut self, snapshot: PortfolioSnapshot) {
        debug!("Viewing snapshot {}", snapshot.label());
        self.selected = Some(snapshot);
    }

    /// Return to the current portfolio. The previously fetched summary is
    /// reused as-is; no re-fetch is needed.
    pub fn return_to_current(&mut self) {
        if let Some(snapshot) = self.selected.take() {
            debug!("Leaving snapshot {}", snapshot.label());
        }
    }

    pub fn is_viewing_snapshot(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected_snapshot(&self) -> Option<&PortfolioSnapshot> {
        self.selected.as_ref()
    }

    pub fn summary(&self) -> &PortfolioSummary {
        &self.summary
    }

    /// Guard for add/edit/delete: historical data is read-only, and the
    /// current holdings must not be mutated while a stale view is shown.
    pub fn ensure_mutable(&self) -> Result<()> {
        match self.selected {
            Some(_) => Err(Error::ReadOnlyView),
            None => Ok(()),
        }
    }

    /// Resolve what to render.
    ///
    /// The current view uses the server-computed summary verbatim. A
    /// snapshot view recomputes the distributions locally from the
    /// captured holdings and pairs them with the stored total - the total
    /// is never re-derived.
    pub fn display(&self) -> DashboardData {
        match &self.selected {
            None => DashboardData {
                net_worth_hkd: self.summary.total_net_worth_hkd,
                holdings: self.summary.holdings.clone(),
                distributions: PortfolioDistributions {
                    market: self.summary.market_distribution.clone(),
                    sector: self.summary.sector_distribution.clone(),
                    ticker: self.summary.ticker_distribution.clone(),
                },
                snapshot_date: None,
            },
            Some(snapshot) => DashboardData {
                net_worth_hkd: snapshot.total_net_worth_hkd,
                holdings: snapshot.holdings_snapshot.clone(),
                distributions: aggregate_holdings(&snapshot.holdings_snapshot),
                snapshot_date: Some(snapshot.date),
            },
        }
    }
}
