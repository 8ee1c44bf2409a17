//! Tests for holding draft canonicalization.

#[cfg(test)]
mod tests {
    use crate::portfolio::holdings::{
        AssetType, HoldingDraft, Market, OptionType, PositionSide,
    };
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn option_draft() -> HoldingDraft {
        HoldingDraft {
            id: None,
            asset_type: AssetType::Option,
            market: Market::Us,
            ticker: Some("TSLA".to_string()),
            company_name: None,
            sector: None,
            quantity: dec!(10),
            cost_basis: dec!(5),
            option_type: Some(OptionType::Put),
            strike_price: Some(dec!(200)),
            expiry_date: NaiveDate::from_ymd_opt(2026, 12, 18),
            side: Some(PositionSide::Short),
        }
    }

    #[test]
    fn test_short_option_quantity_stored_negative() {
        let holding = option_draft().normalize();
        assert_eq!(holding.quantity, dec!(-10));
        assert_eq!(holding.side, Some(PositionSide::Short));
    }

    #[test]
    fn test_short_option_already_negative_not_double_negated() {
        let mut draft = option_draft();
        draft.quantity = dec!(-10);
        assert_eq!(draft.normalize().quantity, dec!(-10));
    }

    #[test]
    fn test_long_option_quantity_stored_positive() {
        let mut draft = option_draft();
        draft.side = Some(PositionSide::Long);
        assert_eq!(draft.clone().normalize().quantity, dec!(10));

        // Sign and side must never disagree, in either direction.
        draft.quantity = dec!(-10);
        assert_eq!(draft.normalize().quantity, dec!(10));
    }

    #[test]
    fn test_switching_to_stock_clears_stale_option_fields() {
        let mut draft = option_draft();
        draft.asset_type = AssetType::Stock;

        let holding = draft.normalize();
        assert_eq!(holding.option_type, None);
        assert_eq!(holding.strike_price, None);
        assert_eq!(holding.expiry_date, None);
        assert_eq!(holding.side, None);
        // Stock quantities are passed through as entered.
        assert_eq!(holding.quantity, dec!(10));
    }

    #[test]
    fn test_option_with_no_expiry_stores_none() {
        let mut draft = option_draft();
        draft.expiry_date = None;
        assert_eq!(draft.normalize().expiry_date, None);
    }

    #[test]
    fn test_cash_has_no_ticker() {
        let mut draft = option_draft();
        draft.asset_type = AssetType::Cash;
        draft.ticker = Some(String::new());

        let holding = draft.normalize();
        assert_eq!(holding.ticker, None);
        assert_eq!(holding.option_type, None);
    }

    #[test]
    fn test_empty_strings_become_absent_fields() {
        let mut draft = option_draft();
        draft.asset_type = AssetType::Stock;
        draft.id = Some(String::new());
        draft.company_name = Some("  ".to_string());
        draft.sector = Some(String::new());

        let holding = draft.normalize();
        assert_eq!(holding.id, None);
        assert_eq!(holding.company_name, None);
        assert_eq!(holding.sector, None);
    }

    #[test]
    fn test_new_holding_payload_has_no_id_field() {
        let holding = option_draft().normalize();
        let value = serde_json::to_value(&holding).unwrap();
        assert!(!value.as_object().unwrap().contains_key("id"));
    }

    #[test]
    fn test_roundtrip_through_draft_for_editing() {
        let holding = option_draft().normalize();
        let reopened = HoldingDraft::from(holding.clone());
        assert_eq!(reopened.id, holding.id);
        assert_eq!(reopened.quantity, dec!(-10));
        // Valuation fields never survive a re-submit.
        let resubmitted = reopened.normalize();
        assert_eq!(resubmitted.market_value_hkd, None);
        assert_eq!(resubmitted.quantity, dec!(-10));
        assert_eq!(resubmitted.cost_basis, Decimal::from(5));
    }
}
