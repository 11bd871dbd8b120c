/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/11/25
******************************************************************************/
use crate::application::models::account::AccountInfo;
use prettytable::{Cell, Row, Table, format};

/// Renders the balance summary and open positions for the console.
#[must_use]
pub fn render_account(info: &AccountInfo) -> String {
    let mut summary = Table::new();
    summary.set_format(*format::consts::FORMAT_BOX_CHARS);
    summary.add_row(Row::new(vec![
        Cell::new("WALLET BALANCE"),
        Cell::new("MARGIN BALANCE"),
        Cell::new("AVAILABLE"),
        Cell::new("UNREALIZED PNL"),
    ]));
    summary.add_row(Row::new(vec![
        Cell::new(&format!("{:.2}", info.total_wallet_balance)),
        Cell::new(&format!("{:.2}", info.total_margin_balance)),
        Cell::new(&format!("{:.2}", info.available_balance)),
        Cell::new(&format_signed(info.total_unrealized_profit)),
    ]));

    let open: Vec<_> = info.open_positions().collect();
    if open.is_empty() {
        return format!("{summary}\nNo open positions.");
    }

    let mut positions = Table::new();
    positions.set_format(*format::consts::FORMAT_BOX_CHARS);
    positions.add_row(Row::new(vec![
        Cell::new("SYMBOL"),
        Cell::new("SIZE"),
        Cell::new("ENTRY PRICE"),
        Cell::new("UNREALIZED PNL"),
        Cell::new("LEVERAGE"),
    ]));
    for position in open {
        let pnl = position
            .unrealized_profit
            .map(format_signed)
            .unwrap_or_else(|| "-".to_string());
        let leverage = position
            .leverage
            .map(|l| format!("{l}x"))
            .unwrap_or_else(|| "-".to_string());
        positions.add_row(Row::new(vec![
            Cell::new(&position.symbol),
            Cell::new(&format!("{}", position.position_amt)),
            Cell::new(&format!("{:.2}", position.entry_price)),
            Cell::new(&pnl),
            Cell::new(&leverage),
        ]));
    }

    format!("{summary}\nOpen positions:\n{positions}")
}

fn format_signed(value: f64) -> String {
    if value >= 0.0 {
        format!("+{value:.2}")
    } else {
        format!("{value:.2}")
    }
}
