use crate::error::AppError;
use std::str::FromStr;

/// One selectable operation of the console menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Fetch balances, PnL, and open positions
    AccountInfo,
    /// Fetch the last price for a symbol
    CurrentPrice,
    /// Place a market order
    MarketOrder,
    /// Place a limit order
    LimitOrder,
    /// Place a stop-limit order
    StopLimitOrder,
    /// Query an order by id
    OrderStatus,
    /// Cancel an order by id
    CancelOrder,
    /// List open orders
    OpenOrders,
    /// Leave the console
    Exit,
}

impl FromStr for MenuChoice {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::AccountInfo),
            "2" => Ok(MenuChoice::CurrentPrice),
            "3" => Ok(MenuChoice::MarketOrder),
            "4" => Ok(MenuChoice::LimitOrder),
            "5" => Ok(MenuChoice::StopLimitOrder),
            "6" => Ok(MenuChoice::OrderStatus),
            "7" => Ok(MenuChoice::CancelOrder),
            "8" => Ok(MenuChoice::OpenOrders),
            "9" => Ok(MenuChoice::Exit),
            other => Err(AppError::InvalidInput(format!(
                "unknown menu selection: {other}"
            ))),
        }
    }
}

/// The fixed menu text shown at the top of every cycle.
#[must_use]
pub fn render_menu() -> String {
    let mut text = String::new();
    text.push_str("\n==================================================\n");
    text.push_str("        BINANCE FUTURES TESTNET CONSOLE\n");
    text.push_str("==================================================\n");
    text.push_str(" 1) Account information\n");
    text.push_str(" 2) Current price\n");
    text.push_str(" 3) Place market order\n");
    text.push_str(" 4) Place limit order\n");
    text.push_str(" 5) Place stop-limit order\n");
    text.push_str(" 6) Order status\n");
    text.push_str(" 7) Cancel order\n");
    text.push_str(" 8) Open orders\n");
    text.push_str(" 9) Exit\n");
    text.push_str("==================================================\n");
    text
}
