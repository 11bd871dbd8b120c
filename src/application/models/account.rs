use crate::presentation::serialization::{string_as_float, string_as_float_opt};
use pretty_simple_display::DebugPretty;
use serde::{Deserialize, Serialize};

/// One position row from the account endpoint.
///
/// The exchange reports a row for every listed symbol; rows with a zero
/// `positionAmt` are flat and filtered out before display.
#[derive(DebugPretty, Clone, Serialize, Deserialize)]
pub struct Position {
    /// Trading symbol
    pub symbol: String,
    /// Signed position size (negative = short)
    #[serde(rename = "positionAmt", deserialize_with = "string_as_float")]
    pub position_amt: f64,
    /// Average entry price
    #[serde(rename = "entryPrice", deserialize_with = "string_as_float")]
    pub entry_price: f64,
    /// Unrealized profit and loss on the position
    #[serde(
        rename = "unrealizedProfit",
        default,
        deserialize_with = "string_as_float_opt"
    )]
    pub unrealized_profit: Option<f64>,
    /// Current leverage setting
    #[serde(default, deserialize_with = "string_as_float_opt")]
    pub leverage: Option<f64>,
}

impl Position {
    /// True when the position size is non-zero.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.position_amt != 0.0
    }
}

/// Fresh account snapshot from the exchange.
///
/// Fetched on every request and never cached: the exchange is the only
/// source of truth for balances and positions.
#[derive(DebugPretty, Clone, Serialize, Deserialize)]
pub struct AccountInfo {
    /// Total wallet balance in the margin asset
    #[serde(rename = "totalWalletBalance", deserialize_with = "string_as_float")]
    pub total_wallet_balance: f64,
    /// Wallet balance plus unrealized PnL
    #[serde(rename = "totalMarginBalance", deserialize_with = "string_as_float")]
    pub total_margin_balance: f64,
    /// Balance available for new positions
    #[serde(rename = "availableBalance", deserialize_with = "string_as_float")]
    pub available_balance: f64,
    /// Unrealized PnL across all open positions
    #[serde(rename = "totalUnrealizedProfit", deserialize_with = "string_as_float")]
    pub total_unrealized_profit: f64,
    /// Maximum amount currently withdrawable
    #[serde(
        rename = "maxWithdrawAmount",
        default,
        deserialize_with = "string_as_float_opt"
    )]
    pub max_withdraw_amount: Option<f64>,
    /// Position rows, one per listed symbol
    #[serde(default)]
    pub positions: Vec<Position>,
}

impl AccountInfo {
    /// Positions with a non-zero size, in the order the exchange returned
    /// them.
    pub fn open_positions(&self) -> impl Iterator<Item = &Position> {
        self.positions.iter().filter(|p| p.is_open())
    }
}
