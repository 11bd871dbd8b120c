use crate::presentation::serialization::string_as_float;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Last traded price for one symbol.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct PriceTicker {
    /// Trading symbol
    pub symbol: String,
    /// Last price as reported by the exchange
    #[serde(deserialize_with = "string_as_float")]
    pub price: f64,
    /// Server time of the quote, milliseconds since epoch
    #[serde(default)]
    pub time: Option<i64>,
}
