use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};
use rust_decimal::Decimal;

use folio_client::{PortfolioApi, PortfolioApiClient};
use folio_core::errors::Error;
use folio_core::portfolio::holdings::{
    AssetType, Holding, HoldingDraft, Market, OptionType, PositionSide,
};

use crate::render;

#[derive(Subcommand)]
pub enum HoldingsCommand {
    /// List current holdings with their values
    List,
    /// Add a new holding
    Add(AddArgs),
    /// Edit an existing holding
    Edit(EditArgs),
    /// Delete a holding
    Delete(DeleteArgs),
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AssetTypeArg {
    Stock,
    Option,
    Cash,
}

impl From<AssetTypeArg> for AssetType {
    fn from(value: AssetTypeArg) -> Self {
        match value {
            AssetTypeArg::Stock => AssetType::Stock,
            AssetTypeArg::Option => AssetType::Option,
            AssetTypeArg::Cash => AssetType::Cash,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MarketArg {
    Us,
    Hk,
    Cn,
}

impl From<MarketArg> for Market {
    fn from(value: MarketArg) -> Self {
        match value {
            MarketArg::Us => Market::Us,
            MarketArg::Hk => Market::Hk,
            MarketArg::Cn => Market::Cn,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OptionTypeArg {
    Put,
    Call,
}

impl From<OptionTypeArg> for OptionType {
    fn from(value: OptionTypeArg) -> Self {
        match value {
            OptionTypeArg::Put => OptionType::Put,
            OptionTypeArg::Call => OptionType::Call,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SideArg {
    Long,
    Short,
}

impl From<SideArg> for PositionSide {
    fn from(value: SideArg) -> Self {
        match value {
            SideArg::Long => PositionSide::Long,
            SideArg::Short => PositionSide::Short,
        }
    }
}

#[derive(Args)]
pub struct AddArgs {
    /// Asset type
    #[arg(long = "type", value_enum, default_value_t = AssetTypeArg::Stock)]
    pub asset_type: AssetTypeArg,

    /// Market the position trades on
    #[arg(long, value_enum, default_value_t = MarketArg::Us)]
    pub market: MarketArg,

    /// Instrument symbol (AAPL, 0700, 600519); not used for cash
    #[arg(long)]
    pub ticker: Option<String>,

    /// Quantity; short option positions may be entered as a positive
    /// magnitude and are stored negative
    #[arg(long, allow_hyphen_values = true)]
    pub quantity: Decimal,

    /// Cost per unit in the native currency; 0 means not tracked
    #[arg(long, default_value = "0")]
    pub cost_basis: Decimal,

    /// Company name
    #[arg(long)]
    pub company: Option<String>,

    /// Sector label
    #[arg(long)]
    pub sector: Option<String>,

    /// Option contract type
    #[arg(long, value_enum)]
    pub option_type: Option<OptionTypeArg>,

    /// Option strike price
    #[arg(long)]
    pub strike: Option<Decimal>,

    /// Option expiry date (YYYY-MM-DD)
    #[arg(long)]
    pub expiry: Option<String>,

    /// Option position side
    #[arg(long, value_enum)]
    pub side: Option<SideArg>,
}

impl AddArgs {
    fn into_draft(self) -> Result<HoldingDraft, Error> {
        let asset_type: AssetType = self.asset_type.into();
        let is_option = asset_type == AssetType::Option;

        // The asset form defaults new option entries to a short put; the
        // same defaults apply here so a bare `--type option` behaves
        // identically.
        let option_type = self
            .option_type
            .map(Into::into)
            .or(is_option.then_some(OptionType::Put));
        let side = self
            .side
            .map(Into::into)
            .or(is_option.then_some(PositionSide::Short));

        Ok(HoldingDraft {
            id: None,
            asset_type,
            market: self.market.into(),
            ticker: self.ticker,
            company_name: self.company,
            sector: self.sector,
            quantity: self.quantity,
            cost_basis: self.cost_basis,
            option_type,
            strike_price: self.strike,
            expiry_date: parse_expiry(self.expiry.as_deref())?,
            side,
        })
    }
}

#[derive(Args)]
pub struct EditArgs {
    /// Id of the holding to edit
    pub id: String,

    #[arg(long = "type", value_enum)]
    pub asset_type: Option<AssetTypeArg>,

    #[arg(long, value_enum)]
    pub market: Option<MarketArg>,

    #[arg(long)]
    pub ticker: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub quantity: Option<Decimal>,

    #[arg(long)]
    pub cost_basis: Option<Decimal>,

    #[arg(long)]
    pub company: Option<String>,

    #[arg(long)]
    pub sector: Option<String>,

    #[arg(long, value_enum)]
    pub option_type: Option<OptionTypeArg>,

    #[arg(long)]
    pub strike: Option<Decimal>,

    /// Option expiry date (YYYY-MM-DD); pass an empty string to clear
    #[arg(long)]
    pub expiry: Option<String>,

    #[arg(long, value_enum)]
    pub side: Option<SideArg>,
}

impl EditArgs {
    /// Overlay the provided fields onto the stored record's draft. Fields
    /// not passed on the command line keep their stored values; the final
    /// normalization still clears anything made stale by a type switch.
    fn apply_to(&self, mut draft: HoldingDraft) -> Result<HoldingDraft, Error> {
        if let Some(asset_type) = self.asset_type {
            draft.asset_type = asset_type.into();
        }
        if let Some(market) = self.market {
            draft.market = market.into();
        }
        if let Some(ticker) = &self.ticker {
            draft.ticker = Some(ticker.clone());
        }
        if let Some(quantity) = self.quantity {
            draft.quantity = quantity;
        }
        if let Some(cost_basis) = self.cost_basis {
            draft.cost_basis = cost_basis;
        }
        if let Some(company) = &self.company {
            draft.company_name = Some(company.clone());
        }
        if let Some(sector) = &self.sector {
            draft.sector = Some(sector.clone());
        }
        if let Some(option_type) = self.option_type {
            draft.option_type = Some(option_type.into());
        }
        if let Some(strike) = self.strike {
            draft.strike_price = Some(strike);
        }
        if let Some(expiry) = self.expiry.as_deref() {
            draft.expiry_date = parse_expiry(Some(expiry))?;
        }
        if let Some(side) = self.side {
            draft.side = Some(side.into());
        }
        Ok(draft)
    }
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Id of the holding to delete
    pub id: String,
}

pub async fn execute(client: &PortfolioApiClient, command: HoldingsCommand) -> Result<()> {
    match command {
        HoldingsCommand::List => {
            // The summary endpoint returns the valued records; the bare
            // /holdings list carries no prices.
            let summary = client.get_summary().await?;
            render::holdings(&summary.holdings);
        }
        HoldingsCommand::Add(args) => {
            let holding = args.into_draft()?.normalize();
            client.create_holding(&holding).await?;
            println!("Added {}", describe(&holding));
        }
        HoldingsCommand::Edit(args) => {
            let holdings = client.list_holdings().await?;
            let existing = holdings
                .into_iter()
                .find(|holding| holding.id.as_deref() == Some(args.id.as_str()))
                .ok_or_else(|| Error::NotFound(format!("holding '{}'", args.id)))?;

            let holding = args.apply_to(HoldingDraft::from(existing))?.normalize();
            client.update_holding(&args.id, &holding).await?;
            println!("Updated {}", describe(&holding));
        }
        HoldingsCommand::Delete(args) => {
            client.delete_holding(&args.id).await?;
            println!("Deleted holding {}", args.id);
        }
    }
    Ok(())
}

fn parse_expiry(raw: Option<&str>) -> Result<Option<NaiveDate>, Error> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => Ok(Some(NaiveDate::parse_from_str(text, "%Y-%m-%d")?)),
    }
}

fn describe(holding: &Holding) -> String {
    match holding.ticker.as_deref() {
        Some(ticker) => format!(
            "{} ({}, {})",
            ticker, holding.asset_type, holding.market
        ),
        None => format!("{} ({})", holding.asset_type, holding.market),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn edit_args(id: &str) -> EditArgs {
        EditArgs {
            id: id.to_string(),
            asset_type: None,
            market: None,
            ticker: None,
            quantity: None,
            cost_basis: None,
            company: None,
            sector: None,
            option_type: None,
            strike: None,
            expiry: None,
            side: None,
        }
    }

    fn stored_short_put() -> HoldingDraft {
        HoldingDraft {
            id: Some("h-1".to_string()),
            asset_type: AssetType::Option,
            market: Market::Us,
            ticker: Some("TSLA".to_string()),
            company_name: None,
            sector: None,
            quantity: dec!(-2),
            cost_basis: dec!(5),
            option_type: Some(OptionType::Put),
            strike_price: Some(dec!(200)),
            expiry_date: NaiveDate::from_ymd_opt(2026, 12, 18),
            side: Some(PositionSide::Short),
        }
    }

    #[test]
    fn test_parse_expiry_treats_empty_as_absent() {
        assert_eq!(parse_expiry(None).unwrap(), None);
        assert_eq!(parse_expiry(Some("")).unwrap(), None);
        assert_eq!(parse_expiry(Some("  ")).unwrap(), None);
        assert_eq!(
            parse_expiry(Some("2026-12-18")).unwrap(),
            NaiveDate::from_ymd_opt(2026, 12, 18)
        );
        assert!(parse_expiry(Some("18/12/2026")).is_err());
    }

    #[test]
    fn test_edit_switching_type_submits_nulled_option_fields() {
        let mut args = edit_args("h-1");
        args.asset_type = Some(AssetTypeArg::Stock);

        let holding = args.apply_to(stored_short_put()).unwrap().normalize();
        assert_eq!(holding.option_type, None);
        assert_eq!(holding.strike_price, None);
        assert_eq!(holding.expiry_date, None);
        assert_eq!(holding.side, None);
    }

    #[test]
    fn test_edit_keeps_short_quantity_negative() {
        let mut args = edit_args("h-1");
        args.quantity = Some(dec!(3));

        let holding = args.apply_to(stored_short_put()).unwrap().normalize();
        assert_eq!(holding.quantity, dec!(-3));
    }

    #[test]
    fn test_add_defaults_option_entries_to_short_put() {
        let args = AddArgs {
            asset_type: AssetTypeArg::Option,
            market: MarketArg::Us,
            ticker: Some("NVDA".to_string()),
            quantity: dec!(1),
            cost_basis: dec!(0),
            company: None,
            sector: None,
            option_type: None,
            strike: Some(dec!(100)),
            expiry: Some("2026-06-19".to_string()),
            side: None,
        };

        let holding = args.into_draft().unwrap().normalize();
        assert_eq!(holding.option_type, Some(OptionType::Put));
        assert_eq!(holding.side, Some(PositionSide::Short));
        assert_eq!(holding.quantity, dec!(-1));
    }
}
