/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 3/11/25
******************************************************************************/
use crate::error::AppError;
use crate::presentation::serialization::{string_as_float, string_as_float_opt};
use crate::utils::id::order_ref;
use once_cell::sync::Lazy;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order direction (buy or sell)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy direction (long)
    #[default]
    Buy,
    /// Sell direction (short)
    Sell,
}

impl Side {
    /// Wire representation expected by the exchange.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = AppError;

    /// Case-insensitive parse; anything outside BUY/SELL is a validation
    /// error, rejected before any network call.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BUY" => Ok(Side::Buy),
            "SELL" => Ok(Side::Sell),
            _ => Err(AppError::InvalidInput(
                "side must be BUY or SELL".to_string(),
            )),
        }
    }
}

/// Order duration (time in force)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TimeInForce {
    /// Order remains working until cancelled by the client
    #[serde(rename = "GTC")]
    #[default]
    GoodTillCancelled,
    /// Execute immediately (partially or completely) or cancel
    #[serde(rename = "IOC")]
    ImmediateOrCancel,
    /// Fill completely immediately or cancel
    #[serde(rename = "FOK")]
    FillOrKill,
}

impl TimeInForce {
    /// Wire representation expected by the exchange.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeInForce::GoodTillCancelled => "GTC",
            TimeInForce::ImmediateOrCancel => "IOC",
            TimeInForce::FillOrKill => "FOK",
        }
    }
}

/// Price fields of an order, tagged by order type.
///
/// Each variant carries exactly the fields its type requires, so a market
/// order cannot be constructed with a price and a stop-limit order cannot be
/// constructed without both of its levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrderKind {
    /// Executes immediately at the best available price
    Market,
    /// Executes only at `price` or better
    Limit {
        /// Limit price
        price: f64,
    },
    /// Becomes a limit order at `price` once `stop_price` trades
    StopLimit {
        /// Limit price of the triggered order
        price: f64,
        /// Trigger price
        stop_price: f64,
    },
}

impl OrderKind {
    /// Wire order type. The futures API calls a stop-limit order `STOP`.
    #[must_use]
    pub fn wire_type(&self) -> &'static str {
        match self {
            OrderKind::Market => "MARKET",
            OrderKind::Limit { .. } => "LIMIT",
            OrderKind::StopLimit { .. } => "STOP",
        }
    }
}

static SYMBOL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9]{2,20}$").expect("valid symbol pattern"));

/// Normalizes and validates a trading symbol: trimmed, uppercased, and
/// restricted to the exchange's ticker alphabet.
pub fn normalize_symbol(raw: &str) -> Result<String, AppError> {
    let symbol = raw.trim().to_ascii_uppercase();
    if symbol.is_empty() {
        return Err(AppError::InvalidInput("symbol must not be empty".to_string()));
    }
    if !SYMBOL_PATTERN.is_match(&symbol) {
        return Err(AppError::InvalidInput(format!(
            "symbol {symbol} is not a valid ticker"
        )));
    }
    Ok(symbol)
}

fn positive(field: &str, value: f64) -> Result<f64, AppError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AppError::InvalidInput(format!("{field} must be positive")))
    }
}

/// A fully validated new-order request.
///
/// Instances only exist through the [`market`](NewOrderRequest::market),
/// [`limit`](NewOrderRequest::limit), and
/// [`stop_limit`](NewOrderRequest::stop_limit) constructors, so holding one
/// implies every local invariant already passed: non-empty normalized
/// symbol, positive finite quantity, and the price fields required by the
/// order type present and positive.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderRequest {
    /// Normalized trading symbol
    pub symbol: String,
    /// Order direction
    pub side: Side,
    /// Order quantity in base asset units
    pub quantity: f64,
    /// Order type with its required price fields
    pub kind: OrderKind,
    /// Duration for resting order types
    pub time_in_force: TimeInForce,
    /// Client-generated order reference, echoed back by the exchange
    pub client_order_id: String,
}

impl NewOrderRequest {
    /// Creates a market order.
    pub fn market(symbol: &str, side: Side, quantity: f64) -> Result<Self, AppError> {
        Ok(Self {
            symbol: normalize_symbol(symbol)?,
            side,
            quantity: positive("quantity", quantity)?,
            kind: OrderKind::Market,
            time_in_force: TimeInForce::GoodTillCancelled,
            client_order_id: order_ref(),
        })
    }

    /// Creates a limit order resting at `price`.
    pub fn limit(symbol: &str, side: Side, quantity: f64, price: f64) -> Result<Self, AppError> {
        Ok(Self {
            symbol: normalize_symbol(symbol)?,
            side,
            quantity: positive("quantity", quantity)?,
            kind: OrderKind::Limit {
                price: positive("price", price)?,
            },
            time_in_force: TimeInForce::GoodTillCancelled,
            client_order_id: order_ref(),
        })
    }

    /// Creates a stop-limit order: a limit order at `price` armed once the
    /// market trades through `stop_price`.
    pub fn stop_limit(
        symbol: &str,
        side: Side,
        quantity: f64,
        stop_price: f64,
        price: f64,
    ) -> Result<Self, AppError> {
        Ok(Self {
            symbol: normalize_symbol(symbol)?,
            side,
            quantity: positive("quantity", quantity)?,
            kind: OrderKind::StopLimit {
                price: positive("price", price)?,
                stop_price: positive("stop price", stop_price)?,
            },
            time_in_force: TimeInForce::GoodTillCancelled,
            client_order_id: order_ref(),
        })
    }

    /// Replaces the generated client order reference.
    #[must_use]
    pub fn with_reference(mut self, reference: String) -> Self {
        self.client_order_id = reference;
        self
    }

    /// Query parameters in signing order.
    ///
    /// Market orders never carry `price`, `stopPrice`, or `timeInForce`
    /// regardless of what the user typed elsewhere; the variant simply has
    /// no slot for them.
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("symbol", self.symbol.clone()),
            ("side", self.side.as_str().to_string()),
            ("type", self.kind.wire_type().to_string()),
            ("quantity", format_decimal(self.quantity)),
        ];

        match self.kind {
            OrderKind::Market => {}
            OrderKind::Limit { price } => {
                params.push(("timeInForce", self.time_in_force.as_str().to_string()));
                params.push(("price", format_decimal(price)));
            }
            OrderKind::StopLimit { price, stop_price } => {
                params.push(("timeInForce", self.time_in_force.as_str().to_string()));
                params.push(("price", format_decimal(price)));
                params.push(("stopPrice", format_decimal(stop_price)));
            }
        }

        params.push(("newClientOrderId", self.client_order_id.clone()));
        params
    }
}

/// Renders a quantity or price without scientific notation.
fn format_decimal(value: f64) -> String {
    let rendered = format!("{value}");
    if rendered.contains('e') || rendered.contains('E') {
        format!("{value:.8}")
    } else {
        rendered
    }
}

/// Order state reported by the exchange.
///
/// One shape serves placement, status queries, and cancellation: the venue
/// echoes the same field set from all three endpoints. Decimal fields arrive
/// as JSON strings. All of it is read-only; nothing here is ever sent back.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    /// Exchange-assigned order id
    #[serde(rename = "orderId")]
    pub order_id: u64,
    /// Trading symbol
    pub symbol: String,
    /// Exchange-defined status string (NEW, FILLED, CANCELED, ...)
    pub status: String,
    /// Client order reference echoed back
    #[serde(rename = "clientOrderId")]
    pub client_order_id: String,
    /// Order price ("0" for market orders)
    #[serde(deserialize_with = "string_as_float")]
    pub price: f64,
    /// Average fill price, absent until something fills
    #[serde(rename = "avgPrice", default, deserialize_with = "string_as_float_opt")]
    pub avg_price: Option<f64>,
    /// Original order quantity
    #[serde(rename = "origQty", deserialize_with = "string_as_float")]
    pub orig_qty: f64,
    /// Quantity filled so far
    #[serde(rename = "executedQty", deserialize_with = "string_as_float")]
    pub executed_qty: f64,
    /// Trigger price for stop orders
    #[serde(rename = "stopPrice", default, deserialize_with = "string_as_float_opt")]
    pub stop_price: Option<f64>,
    /// Exchange-defined order type string
    #[serde(rename = "type")]
    pub order_type: String,
    /// Order direction as reported by the exchange
    pub side: String,
    /// Time in force, absent for market orders on some endpoints
    #[serde(rename = "timeInForce", default)]
    pub time_in_force: Option<String>,
    /// Creation time, milliseconds since epoch (status endpoint only)
    #[serde(default)]
    pub time: Option<i64>,
    /// Last update time, milliseconds since epoch
    #[serde(rename = "updateTime", default)]
    pub update_time: Option<i64>,
}
