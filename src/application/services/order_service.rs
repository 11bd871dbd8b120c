use crate::application::models::order::{NewOrderRequest, OrderResponse, normalize_symbol};
use crate::application::services::OrderService;
use crate::error::AppError;
use crate::transport::http_client::{BinanceHttpClient, Security};
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the order service
pub struct OrderServiceImpl<T: BinanceHttpClient> {
    client: Arc<T>,
}

impl<T: BinanceHttpClient> OrderServiceImpl<T> {
    /// Creates a new instance of the order service
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }

    fn order_id_params(symbol: &str, order_id: u64) -> Result<Vec<(&'static str, String)>, AppError> {
        Ok(vec![
            ("symbol", normalize_symbol(symbol)?),
            ("orderId", order_id.to_string()),
        ])
    }
}

#[async_trait]
impl<T: BinanceHttpClient + 'static> OrderService for OrderServiceImpl<T> {
    async fn place_order(&self, order: &NewOrderRequest) -> Result<OrderResponse, AppError> {
        info!(
            "Placing {} {} order: {} qty={}",
            order.side,
            order.kind.wire_type(),
            order.symbol,
            order.quantity
        );

        let result: OrderResponse = self
            .client
            .request(
                Method::POST,
                "/fapi/v1/order",
                order.to_params(),
                Security::Signed,
            )
            .await?;

        debug!("Order accepted: id={} status={}", result.order_id, result.status);
        Ok(result)
    }

    async fn cancel_order(&self, symbol: &str, order_id: u64) -> Result<OrderResponse, AppError> {
        info!("Cancelling order {} on {}", order_id, symbol);

        let result: OrderResponse = self
            .client
            .request(
                Method::DELETE,
                "/fapi/v1/order",
                Self::order_id_params(symbol, order_id)?,
                Security::Signed,
            )
            .await?;

        debug!("Cancel confirmed: id={} status={}", result.order_id, result.status);
        Ok(result)
    }

    async fn get_order(&self, symbol: &str, order_id: u64) -> Result<OrderResponse, AppError> {
        info!("Querying order {} on {}", order_id, symbol);

        let result: OrderResponse = self
            .client
            .request(
                Method::GET,
                "/fapi/v1/order",
                Self::order_id_params(symbol, order_id)?,
                Security::Signed,
            )
            .await?;

        debug!("Order state: id={} status={}", result.order_id, result.status);
        Ok(result)
    }
}
