//! Convenient single import for the types most callers need.
//!
//! ```rust
//! use binance_futures_cli::prelude::*;
//!
//! let config = Config::new();
//! // session::connect(config) -> services -> cli::run(...)
//! ```

pub use crate::config::{Config, Credentials};
pub use crate::error::{AppError, AuthError};
pub use crate::{VERSION, version};

pub use crate::session::connect;

pub use crate::application::services::{
    AccountService, AccountServiceImpl, MarketService, MarketServiceImpl, OrderService,
    OrderServiceImpl, Services,
};

pub use crate::transport::http_client::{
    BinanceHttpClient, BinanceHttpClientImpl, Security,
};
pub use crate::transport::signer::RequestSigner;

pub use crate::application::models::account::{AccountInfo, Position};
pub use crate::application::models::market::PriceTicker;
pub use crate::application::models::order::{
    NewOrderRequest, OrderKind, OrderResponse, Side, TimeInForce, normalize_symbol,
};

pub use crate::cli::menu::MenuChoice;

pub use crate::utils::logger::setup_logger;
pub use crate::utils::rate_limiter::{RateLimitType, RateLimiter};

pub use async_trait::async_trait;
pub use reqwest::Method;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
