//! Tests for the holding record model and its wire format.

#[cfg(test)]
mod tests {
    use crate::portfolio::holdings::{AssetType, Holding, Market, OptionType, PositionSide};
    use rust_decimal_macros::dec;

    fn cash(amount: f64) -> Holding {
        serde_json::from_value(serde_json::json!({
            "id": "c1",
            "asset_type": "Cash",
            "market": "HK",
            "quantity": amount,
            "cost_basis": 1.0,
        }))
        .unwrap()
    }

    #[test]
    fn test_deserialize_valued_holding_from_summary_shape() {
        // Exactly what the summary endpoint emits for a stock.
        let json = r#"{
            "id": "h-42",
            "ticker": "AAPL",
            "market": "US",
            "asset_type": "Stock",
            "quantity": 10.0,
            "cost_basis": 150.0,
            "company_name": "Apple Inc.",
            "sector": "IT",
            "option_type": null,
            "strike_price": null,
            "expiry_date": null,
            "side": null,
            "current_price": 180.0,
            "market_value_hkd": 14040.0,
            "cost_value_hkd": 11700.0
        }"#;

        let holding: Holding = serde_json::from_str(json).unwrap();
        assert_eq!(holding.id.as_deref(), Some("h-42"));
        assert_eq!(holding.asset_type, AssetType::Stock);
        assert_eq!(holding.market, Market::Us);
        assert_eq!(holding.ticker.as_deref(), Some("AAPL"));
        assert_eq!(holding.quantity, dec!(10));
        assert_eq!(holding.market_value_hkd, Some(dec!(14040)));
        assert_eq!(holding.exposure_value_hkd, None);
    }

    #[test]
    fn test_deserialize_bare_holding_without_valuation() {
        // `GET /holdings` records carry no valuation fields at all.
        let json = r#"{
            "id": "h-7",
            "ticker": "0700",
            "market": "HK",
            "asset_type": "Stock",
            "quantity": 200.0,
            "cost_basis": 310.0
        }"#;

        let holding: Holding = serde_json::from_str(json).unwrap();
        assert_eq!(holding.market_value(), dec!(0));
        assert_eq!(holding.exposure_value(), dec!(0));
        assert!(!holding.has_known_cost());
    }

    #[test]
    fn test_deserialize_short_option() {
        let json = r#"{
            "id": "o-1",
            "ticker": "TSLA",
            "market": "US",
            "asset_type": "Option",
            "quantity": -1.0,
            "cost_basis": 5.0,
            "option_type": "Put",
            "strike_price": 200.0,
            "expiry_date": "2026-12-18",
            "side": "Short",
            "market_value_hkd": -200.0,
            "exposure_value_hkd": 156000.0
        }"#;

        let holding: Holding = serde_json::from_str(json).unwrap();
        assert_eq!(holding.option_type, Some(OptionType::Put));
        assert_eq!(holding.side, Some(PositionSide::Short));
        assert_eq!(holding.quantity, dec!(-1));
        assert_eq!(holding.market_value(), dec!(-200));
        assert_eq!(holding.exposure_value(), dec!(156000));
    }

    #[test]
    fn test_serialize_omits_absent_id() {
        let mut holding = cash(1000.0);
        holding.id = None;

        let value = serde_json::to_value(&holding).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("id"));
        // Option contract fields serialize as explicit nulls.
        assert!(object.get("option_type").unwrap().is_null());
        assert!(object.get("side").unwrap().is_null());
    }

    #[test]
    fn test_market_wire_strings() {
        assert_eq!(serde_json::to_string(&Market::Us).unwrap(), "\"US\"");
        assert_eq!(serde_json::to_string(&Market::Hk).unwrap(), "\"HK\"");
        assert_eq!(serde_json::to_string(&Market::Cn).unwrap(), "\"CN\"");
        assert_eq!(
            serde_json::from_str::<Market>("\"CN\"").unwrap(),
            Market::Cn
        );
    }

    #[test]
    fn test_pnl_suppressed_without_cost() {
        let mut holding = cash(1000.0);
        holding.market_value_hkd = Some(dec!(1000));
        holding.cost_value_hkd = Some(dec!(0));
        assert_eq!(holding.unrealized_pnl(), None);

        holding.cost_value_hkd = Some(dec!(800));
        assert_eq!(holding.unrealized_pnl(), Some(dec!(200)));
    }
}
