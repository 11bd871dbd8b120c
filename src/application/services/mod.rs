use crate::application::models::account::AccountInfo;
use crate::application::models::market::PriceTicker;
use crate::application::models::order::{NewOrderRequest, OrderResponse};
use crate::error::AppError;
use crate::transport::http_client::BinanceHttpClientImpl;
use async_trait::async_trait;
use std::sync::Arc;

/// Account service implementation
pub mod account_service;
/// Market data service implementation
pub mod market_service;
/// Order service implementation
pub mod order_service;

pub use account_service::AccountServiceImpl;
pub use market_service::MarketServiceImpl;
pub use order_service::OrderServiceImpl;

/// Service for account state: balances, PnL, and open orders.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Fetches a fresh account snapshot.
    async fn get_account(&self) -> Result<AccountInfo, AppError>;

    /// Fetches currently open orders, optionally filtered by symbol.
    async fn get_open_orders(&self, symbol: Option<&str>) -> Result<Vec<OrderResponse>, AppError>;
}

/// Service for public market data.
#[async_trait]
pub trait MarketService: Send + Sync {
    /// Fetches the last traded price for a symbol.
    async fn get_price(&self, symbol: &str) -> Result<PriceTicker, AppError>;
}

/// Service for creating, querying, and cancelling orders.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Places a new order.
    async fn place_order(&self, order: &NewOrderRequest) -> Result<OrderResponse, AppError>;

    /// Cancels an open order by id.
    async fn cancel_order(&self, symbol: &str, order_id: u64) -> Result<OrderResponse, AppError>;

    /// Fetches the current state of an order by id.
    async fn get_order(&self, symbol: &str, order_id: u64) -> Result<OrderResponse, AppError>;
}

/// The service handles injected into the command loop.
///
/// Explicit dependencies rather than globals, so tests run the loop against
/// stub implementations.
#[derive(Clone)]
pub struct Services {
    /// Account state service
    pub account: Arc<dyn AccountService>,
    /// Market data service
    pub market: Arc<dyn MarketService>,
    /// Order management service
    pub order: Arc<dyn OrderService>,
}

impl Services {
    /// Wires the production services onto one shared transport.
    #[must_use]
    pub fn new(client: Arc<BinanceHttpClientImpl>) -> Self {
        Self {
            account: Arc::new(AccountServiceImpl::new(client.clone())),
            market: Arc::new(MarketServiceImpl::new(client.clone())),
            order: Arc::new(OrderServiceImpl::new(client)),
        }
    }
}
