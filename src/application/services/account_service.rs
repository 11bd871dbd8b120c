use crate::application::models::account::AccountInfo;
use crate::application::models::order::{OrderResponse, normalize_symbol};
use crate::application::services::AccountService;
use crate::error::AppError;
use crate::transport::http_client::{BinanceHttpClient, Security};
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the account service
pub struct AccountServiceImpl<T: BinanceHttpClient> {
    client: Arc<T>,
}

impl<T: BinanceHttpClient> AccountServiceImpl<T> {
    /// Creates a new instance of the account service
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<T: BinanceHttpClient + 'static> AccountService for AccountServiceImpl<T> {
    async fn get_account(&self) -> Result<AccountInfo, AppError> {
        info!("Getting account information");

        let result: AccountInfo = self
            .client
            .request(Method::GET, "/fapi/v2/account", vec![], Security::Signed)
            .await?;

        debug!(
            "Account information obtained: {} position rows",
            result.positions.len()
        );
        Ok(result)
    }

    async fn get_open_orders(&self, symbol: Option<&str>) -> Result<Vec<OrderResponse>, AppError> {
        let mut params = Vec::new();
        if let Some(symbol) = symbol {
            params.push(("symbol", normalize_symbol(symbol)?));
        }
        info!("Getting open orders");

        let result: Vec<OrderResponse> = self
            .client
            .request(Method::GET, "/fapi/v1/openOrders", params, Security::Signed)
            .await?;

        debug!("Open orders obtained: {} orders", result.len());
        Ok(result)
    }
}
