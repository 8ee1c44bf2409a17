use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of position being tracked.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetType {
    Stock,
    Option,
    Cash,
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetType::Stock => write!(f, "Stock"),
            AssetType::Option => write!(f, "Option"),
            AssetType::Cash => write!(f, "Cash"),
        }
    }
}

/// Exchange the position trades on. Ignored for cash holdings.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Market {
    Us,
    Hk,
    Cn,
}

impl Market {
    pub fn as_str(&self) -> &'static str {
        match self {
            Market::Us => "US",
            Market::Hk => "HK",
            Market::Cn => "CN",
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    Put,
    Call,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Put => write!(f, "Put"),
            OptionType::Call => write!(f, "Call"),
        }
    }
}

/// Which side of an option position the user is on. Short positions are
/// stored with a negative quantity; the two must never disagree.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionSide {
    Long,
    Short,
}

impl fmt::Display for PositionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionSide::Long => write!(f, "Long"),
            PositionSide::Short => write!(f, "Short"),
        }
    }
}

/// One tracked position (stock, option contract, or cash).
///
/// The same shape serves both the bare stored record (as returned by
/// `GET /holdings`) and the valued record returned by the summary and
/// snapshot endpoints; the valuation fields are filled in upstream by the
/// API server and absent on bare records.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Holding {
    /// Server-assigned identifier. Never serialized when absent, so a
    /// creation payload carries no id field at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub asset_type: AssetType,
    pub market: Market,

    /// Instrument symbol. Present for stocks and options, absent for cash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,

    #[serde(default)]
    pub company_name: Option<String>,

    /// Free-text sector label. The summary endpoint resolves this on
    /// valued records; aggregation falls back to a fixed bucket when unset.
    #[serde(default)]
    pub sector: Option<String>,

    /// Signed quantity. For options, negative means short (writer).
    pub quantity: Decimal,

    /// Per-unit cost in the position's native currency. Zero means the
    /// cost is not tracked and P/L display is suppressed.
    #[serde(default)]
    pub cost_basis: Decimal,

    // Option contract terms, present iff `asset_type == Option`.
    #[serde(default)]
    pub option_type: Option<OptionType>,
    #[serde(default)]
    pub strike_price: Option<Decimal>,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub side: Option<PositionSide>,

    // Valuation, computed upstream in the reporting currency (HKD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_value_hkd: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_value_hkd: Option<Decimal>,
    /// Underlying notional exposure, options only. Distinct from the
    /// option's own mark-to-market value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exposure_value_hkd: Option<Decimal>,
}

impl Holding {
    /// Mark-to-market value in HKD; a record that has not been valued
    /// contributes zero.
    pub fn market_value(&self) -> Decimal {
        self.market_value_hkd.unwrap_or_default()
    }

    /// Underlying notional exposure in HKD; zero for anything without one.
    pub fn exposure_value(&self) -> Decimal {
        self.exposure_value_hkd.unwrap_or_default()
    }

    /// Whether the position carries a usable cost figure. When false the
    /// UI suppresses P/L instead of showing -100%.
    pub fn has_known_cost(&self) -> bool {
        self.cost_value_hkd
            .map(|cost| cost != Decimal::ZERO)
            .unwrap_or(false)
    }

    /// Profit and loss in HKD against the converted cost, when known.
    pub fn unrealized_pnl(&self) -> Option<Decimal> {
        if !self.has_known_cost() {
            return None;
        }
        Some(self.market_value() - self.cost_value_hkd.unwrap_or_default())
    }
}
