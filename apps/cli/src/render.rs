//! Terminal rendering for dashboard data: plain tables, nothing clever.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use owo_colors::OwoColorize;
use rust_decimal::Decimal;

use folio_core::constants::REPORTING_CURRENCY;
use folio_core::portfolio::allocation::percent_of;
use folio_core::portfolio::dashboard::DashboardData;
use folio_core::portfolio::holdings::Holding;
use folio_core::portfolio::snapshot::PortfolioSnapshot;

pub fn dashboard(data: &DashboardData, history: &[PortfolioSnapshot]) {
    println!();
    match data.snapshot_date {
        Some(date) => println!(
            "{} {}",
            "Portfolio Dashboard".bold(),
            format!("(snapshot {date} - read-only)").yellow()
        ),
        None => println!("{}", "Portfolio Dashboard".bold()),
    }
    println!(
        "Net Worth: {}",
        format!(
            "{} {}",
            REPORTING_CURRENCY,
            format_hkd(data.net_worth_hkd)
        )
        .bright_cyan()
    );
    println!();

    let market = &data.distributions.market;
    print_distribution("By Market", &market.entries(), market.total());

    let sector = &data.distributions.sector;
    print_distribution("By Sector", &sector.entries_by_value(), sector.total());

    let ticker = &data.distributions.ticker;
    print_distribution("By Ticker", &ticker.entries_by_value(), ticker.total());

    holdings(&data.holdings);

    if !history.is_empty() && data.snapshot_date.is_none() {
        println!("{}", "Net Worth History".bold());
        self::history(history);
    }
}

pub fn holdings(holdings: &[Holding]) {
    if holdings.is_empty() {
        println!("No holdings yet.");
        return;
    }

    let mut table = new_table();
    table.set_header(vec![
        "Id", "Ticker", "Type", "Market", "Sector", "Quantity", "Value (HKD)", "P/L (HKD)",
        "P/L %",
    ]);

    for holding in holdings {
        let (pnl, pnl_pct) = match holding.unrealized_pnl() {
            Some(pnl) => {
                let cost = holding.cost_value_hkd.unwrap_or_default();
                (
                    format_hkd(pnl),
                    format!("{}%", percent_of(pnl, cost)),
                )
            }
            // Cost basis not tracked: suppress P/L instead of showing -100%.
            None => ("-".to_string(), "-".to_string()),
        };

        table.add_row(vec![
            Cell::new(holding.id.as_deref().unwrap_or("-")),
            Cell::new(describe_instrument(holding)),
            Cell::new(holding.asset_type),
            Cell::new(holding.market),
            Cell::new(holding.sector.as_deref().unwrap_or("-")),
            Cell::new(holding.quantity).set_alignment(CellAlignment::Right),
            Cell::new(format_hkd(holding.market_value())).set_alignment(CellAlignment::Right),
            Cell::new(pnl).set_alignment(CellAlignment::Right),
            Cell::new(pnl_pct).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{table}");
}

pub fn history(history: &[PortfolioSnapshot]) {
    if history.is_empty() {
        println!("No snapshots saved yet.");
        return;
    }

    let mut table = new_table();
    table.set_header(vec!["Date", "Net Worth (HKD)", "Holdings", "Id"]);
    for snapshot in history {
        table.add_row(vec![
            Cell::new(snapshot.date),
            Cell::new(format_hkd(snapshot.total_net_worth_hkd))
                .set_alignment(CellAlignment::Right),
            Cell::new(snapshot.holdings_snapshot.len()).set_alignment(CellAlignment::Right),
            Cell::new(snapshot.id.as_deref().unwrap_or("-")),
        ]);
    }
    println!("{table}");
}

fn print_distribution(title: &str, entries: &[(&str, Decimal)], total: Decimal) {
    println!("{}", title.bold());
    if entries.is_empty() {
        println!("(empty)\n");
        return;
    }

    let mut table = new_table();
    table.set_header(vec!["Category", "Value (HKD)", "Share"]);
    for (key, value) in entries {
        table.add_row(vec![
            Cell::new(key),
            Cell::new(format_hkd(*value)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{}%", percent_of(*value, total)))
                .set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn describe_instrument(holding: &Holding) -> String {
    let ticker = holding.ticker.as_deref().unwrap_or("-");
    match (holding.option_type, holding.strike_price) {
        (Some(option_type), Some(strike)) => {
            let side = holding
                .side
                .map(|side| format!(", {side}"))
                .unwrap_or_default();
            match holding.expiry_date {
                Some(expiry) => format!("{ticker} {strike} {option_type} {expiry}{side}"),
                None => format!("{ticker} {strike} {option_type}{side}"),
            }
        }
        _ => ticker.to_string(),
    }
}

fn format_hkd(value: Decimal) -> String {
    let text = value.round_dp(2).to_string();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
