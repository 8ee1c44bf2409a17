//! Canonicalization of user-entered holding data.
//!
//! The asset form lets fields go stale: switching the type away from
//! Option keeps the old strike around, and short option quantities are
//! usually typed as positive magnitudes. `HoldingDraft::normalize` is the
//! single place those fixups happen before a record is sent anywhere.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{AssetType, Holding, Market, OptionType, PositionSide};

/// User-entered form state for creating or editing a holding.
///
/// Unlike [`Holding`], a draft may carry contradictory leftovers; calling
/// [`HoldingDraft::normalize`] produces the canonical record.
#[derive(Debug, Clone, PartialEq)]
pub struct HoldingDraft {
    /// Present when editing an existing holding, absent when creating.
    pub id: Option<String>,
    pub asset_type: AssetType,
    pub market: Market,
    pub ticker: Option<String>,
    pub company_name: Option<String>,
    pub sector: Option<String>,
    pub quantity: Decimal,
    pub cost_basis: Decimal,
    pub option_type: Option<OptionType>,
    pub strike_price: Option<Decimal>,
    pub expiry_date: Option<NaiveDate>,
    pub side: Option<PositionSide>,
}

impl HoldingDraft {
    /// Produce the canonical stored record.
    ///
    /// - A Short option quantity is stored negative; a Long one positive.
    ///   An already-negative Short entry is left alone (no double
    ///   negation).
    /// - Non-option records have `option_type`, `strike_price`,
    ///   `expiry_date` and `side` cleared, whatever the form held.
    /// - Cash records have no ticker.
    /// - Empty strings become absent fields, never empty values.
    pub fn normalize(self) -> Holding {
        let is_option = self.asset_type == AssetType::Option;

        let quantity = match (is_option, self.side) {
            (true, Some(PositionSide::Short)) => -self.quantity.abs(),
            (true, Some(PositionSide::Long)) => self.quantity.abs(),
            _ => self.quantity,
        };

        let ticker = match self.asset_type {
            AssetType::Cash => None,
            _ => scrub(self.ticker),
        };

        Holding {
            id: scrub(self.id),
            asset_type: self.asset_type,
            market: self.market,
            ticker,
            company_name: scrub(self.company_name),
            sector: scrub(self.sector),
            quantity,
            cost_basis: self.cost_basis,
            option_type: if is_option { self.option_type } else { None },
            strike_price: if is_option { self.strike_price } else { None },
            expiry_date: if is_option { self.expiry_date } else { None },
            side: if is_option { self.side } else { None },
            current_price: None,
            market_value_hkd: None,
            cost_value_hkd: None,
            exposure_value_hkd: None,
        }
    }
}

impl From<Holding> for HoldingDraft {
    /// Reopen an existing record for editing.
    fn from(holding: Holding) -> Self {
        HoldingDraft {
            id: holding.id,
            asset_type: holding.asset_type,
            market: holding.market,
            ticker: holding.ticker,
            company_name: holding.company_name,
            sector: holding.sector,
            quantity: holding.quantity,
            cost_basis: holding.cost_basis,
            option_type: holding.option_type,
            strike_price: holding.strike_price,
            expiry_date: holding.expiry_date,
            side: holding.side,
        }
    }
}

fn scrub(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.trim().is_empty())
}
