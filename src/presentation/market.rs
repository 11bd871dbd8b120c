use crate::application::models::market::PriceTicker;

/// One-line price rendering for the console.
#[must_use]
pub fn render_price(ticker: &PriceTicker) -> String {
    format!("Current price for {}: {:.2} USDT", ticker.symbol, ticker.price)
}
