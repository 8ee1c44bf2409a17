//! Tests for dashboard view selection.

#[cfg(test)]
mod tests {
    use crate::errors::Error;
    use crate::portfolio::dashboard::DashboardState;
    use crate::portfolio::holdings::{AssetType, Holding, Market};
    use crate::portfolio::snapshot::PortfolioSnapshot;
    use crate::portfolio::summary::PortfolioSummary;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn valued_stock(ticker: &str, value: rust_decimal::Decimal) -> Holding {
        Holding {
            id: Some(format!("h-{ticker}")),
            asset_type: AssetType::Stock,
            market: Market::Us,
            ticker: Some(ticker.to_string()),
            company_name: None,
            sector: Some("IT".to_string()),
            quantity: dec!(1),
            cost_basis: dec!(1),
            option_type: None,
            strike_price: None,
            expiry_date: None,
            side: None,
            current_price: None,
            market_value_hkd: Some(value),
            cost_value_hkd: None,
            exposure_value_hkd: None,
        }
    }

    fn current_summary() -> PortfolioSummary {
        let holdings = vec![valued_stock("AAPL", dec!(5000))];
        let mut summary = PortfolioSummary {
            total_net_worth_hkd: dec!(5000),
            holdings,
            ..PortfolioSummary::default()
        };
        summary.market_distribution.us = dec!(5000);
        summary.sector_distribution.credit("IT", dec!(5000));
        summary.ticker_distribution.credit("AAPL", dec!(5000));
        summary
    }

    fn old_snapshot() -> PortfolioSnapshot {
        PortfolioSnapshot {
            id: Some("snap-1".to_string()),
            date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            // Intentionally different from the sum of the captured
            // holdings: the stored total must win.
            total_net_worth_hkd: dec!(9999),
            holdings_snapshot: vec![valued_stock("0700", dec!(2500))],
        }
    }

    #[test]
    fn test_current_view_uses_server_summary_verbatim() {
        let state = DashboardState::new(current_summary());
        let data = state.display();

        assert_eq!(data.net_worth_hkd, dec!(5000));
        assert_eq!(data.snapshot_date, None);
        assert_eq!(data.distributions.market.us, dec!(5000));
        assert_eq!(data.distributions.ticker.get("AAPL"), dec!(5000));
    }

    #[test]
    fn test_snapshot_view_recomputes_distributions_locally() {
        let mut state = DashboardState::new(current_summary());
        state.select_snapshot(old_snapshot());

        let data = state.display();
        // Distributions come from the captured holdings, not the summary.
        assert_eq!(data.distributions.ticker.get("0700"), dec!(2500));
        assert!(!data.distributions.ticker.contains("AAPL"));
        assert_eq!(data.distributions.market.us, dec!(2500));
        // The total is the stored one, never re-derived.
        assert_eq!(data.net_worth_hkd, dec!(9999));
        assert_eq!(
            data.snapshot_date,
            NaiveDate::from_ymd_opt(2025, 6, 30)
        );
    }

    #[test]
    fn test_deselecting_returns_to_prior_summary_without_refetch() {
        let summary = current_summary();
        let mut state = DashboardState::new(summary.clone());
        let before = state.display();

        state.select_snapshot(old_snapshot());
        state.return_to_current();

        assert!(!state.is_viewing_snapshot());
        assert_eq!(state.summary(), &summary);
        assert_eq!(state.display(), before);
    }

    #[test]
    fn test_mutations_refused_while_snapshot_selected() {
        let mut state = DashboardState::new(current_summary());
        assert!(state.ensure_mutable().is_ok());

        state.select_snapshot(old_snapshot());
        assert_eq!(
            state.selected_snapshot().and_then(|s| s.id.as_deref()),
            Some("snap-1")
        );
        assert!(matches!(state.ensure_mutable(), Err(Error::ReadOnlyView)));

        state.return_to_current();
        assert!(state.ensure_mutable().is_ok());
    }

    #[test]
    fn test_refresh_keeps_selected_snapshot() {
        let mut state = DashboardState::new(current_summary());
        state.select_snapshot(old_snapshot());

        let mut newer = current_summary();
        newer.total_net_worth_hkd = dec!(6000);
        state.refresh(newer);

        // Still viewing the snapshot; the new summary waits underneath.
        assert!(state.is_viewing_snapshot());
        assert_eq!(state.display().net_worth_hkd, dec!(9999));

        state.return_to_current();
        assert_eq!(state.display().net_worth_hkd, dec!(6000));
    }
}
