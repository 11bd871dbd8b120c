/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 4/11/25
******************************************************************************/

//! Session bootstrapping.
//!
//! Runs once at startup: check credentials are present (before any network
//! traffic), construct the shared transport, and prove the credentials and
//! the network path with a single signed account call. Failures here are
//! fatal; there is no retry at this layer.

use crate::application::models::account::AccountInfo;
use crate::config::Config;
use crate::error::{AppError, AuthError};
use crate::transport::http_client::{BinanceHttpClient, BinanceHttpClientImpl, Security};
use reqwest::Method;
use std::sync::Arc;
use tracing::{error, info};

/// Builds the authenticated client and verifies connectivity.
///
/// # Errors
/// * [`AuthError::MissingCredentials`] - key or secret absent; returned
///   before any request is made
/// * [`AuthError::BadCredentials`] - the exchange rejected the key/signature
/// * [`AuthError::Connectivity`] - the exchange could not be reached
///
/// Exactly one log line records the outcome. Credentials are never logged.
pub async fn connect(config: Config) -> Result<Arc<BinanceHttpClientImpl>, AuthError> {
    if let Err(e) = config.credentials.ensure_present() {
        error!("STARTUP FAILED: {}", e);
        return Err(e);
    }

    let base_url = config.rest_api.base_url.clone();
    let client = BinanceHttpClientImpl::new(Arc::new(config)).map_err(|e| {
        error!("STARTUP FAILED: could not build http client: {}", e);
        AuthError::Connectivity(e.to_string())
    })?;

    let verification: Result<AccountInfo, AppError> = client
        .request(Method::GET, "/fapi/v2/account", vec![], Security::Signed)
        .await;

    match verification {
        Ok(account) => {
            info!(
                "CONNECTED base_url={} available_balance={:.2}",
                base_url, account.available_balance
            );
            Ok(Arc::new(client))
        }
        Err(AppError::Unauthorized) => {
            error!("STARTUP FAILED: exchange rejected the credentials");
            Err(AuthError::BadCredentials)
        }
        Err(AppError::Network(e)) => {
            error!("STARTUP FAILED: cannot reach {}: {}", base_url, e);
            Err(AuthError::Connectivity(e.to_string()))
        }
        Err(AppError::Unexpected(status)) => {
            error!("STARTUP FAILED: verification returned {}", status);
            Err(AuthError::Unexpected(status))
        }
        Err(e) => {
            error!("STARTUP FAILED: {}", e);
            Err(AuthError::Connectivity(e.to_string()))
        }
    }
}
