use crate::constants::{
    DEFAULT_LOG_FILE, DEFAULT_RECV_WINDOW, DEFAULT_REST_TIMEOUT, TESTNET_REST_BASE_URL,
};
use crate::error::AuthError;
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use std::fmt;
use tracing::debug;

/// Authentication credentials for the exchange API.
///
/// Sourced once at startup and immutable for the process lifetime. Never
/// written to the log: `Debug` redacts both fields.
#[derive(Clone)]
pub struct Credentials {
    /// API key sent in the `X-MBX-APIKEY` header
    pub api_key: String,
    /// API secret used to sign request query strings
    pub api_secret: String,
}

impl Credentials {
    /// Fails fast when either credential is missing, before any network
    /// call is attempted.
    pub fn ensure_present(&self) -> Result<(), AuthError> {
        if self.api_key.trim().is_empty() {
            return Err(AuthError::MissingCredentials("BINANCE_API_KEY"));
        }
        if self.api_secret.trim().is_empty() {
            return Err(AuthError::MissingCredentials("BINANCE_API_SECRET"));
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"***")
            .field("api_secret", &"***")
            .finish()
    }
}

/// Configuration for the REST API
#[derive(Debug, Clone)]
pub struct RestApiConfig {
    /// Base URL of the futures testnet REST surface
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
    /// Receive window in milliseconds attached to signed requests
    pub recv_window: u64,
}

/// Main configuration for the trading console
#[derive(Debug, Clone)]
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Safety margin applied to the exchange's published rate limits
    pub rate_limit_safety_margin: f64,
    /// Path of the append-only log file
    pub log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from the environment, loading `.env` first.
    ///
    /// Missing credentials are not an error here: `Credentials` stay empty
    /// and [`Credentials::ensure_present`] rejects them at connect time,
    /// before any request is issued.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Loaded .env file"),
            Err(e) => debug!("No .env file loaded: {e}"),
        }

        Config {
            credentials: Credentials {
                api_key: get_env_or_default("BINANCE_API_KEY", String::new()),
                api_secret: get_env_or_default("BINANCE_API_SECRET", String::new()),
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "BINANCE_REST_BASE_URL",
                    String::from(TESTNET_REST_BASE_URL),
                ),
                timeout: get_env_or_default("BINANCE_REST_TIMEOUT", DEFAULT_REST_TIMEOUT),
                recv_window: get_env_or_default("BINANCE_RECV_WINDOW", DEFAULT_RECV_WINDOW),
            },
            rate_limit_safety_margin: get_env_or_default("BINANCE_RATE_LIMIT_MARGIN", 0.8),
            log_file: get_env_or_default("BINANCE_LOG_FILE", String::from(DEFAULT_LOG_FILE)),
        }
    }
}
