use crate::application::models::market::PriceTicker;
use crate::application::models::order::normalize_symbol;
use crate::application::services::MarketService;
use crate::error::AppError;
use crate::transport::http_client::{BinanceHttpClient, Security};
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the market data service
pub struct MarketServiceImpl<T: BinanceHttpClient> {
    client: Arc<T>,
}

impl<T: BinanceHttpClient> MarketServiceImpl<T> {
    /// Creates a new instance of the market data service
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: BinanceHttpClient + 'static> MarketService for MarketServiceImpl<T> {
    async fn get_price(&self, symbol: &str) -> Result<PriceTicker, AppError> {
        let symbol = normalize_symbol(symbol)?;
        info!("Getting price for {}", symbol);

        let ticker: PriceTicker = self
            .client
            .request(
                Method::GET,
                "/fapi/v1/ticker/price",
                vec![("symbol", symbol.clone())],
                Security::Public,
            )
            .await?;

        debug!("Price obtained for {}: {}", ticker.symbol, ticker.price);
        Ok(ticker)
    }
}
