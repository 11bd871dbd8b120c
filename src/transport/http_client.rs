/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 3/11/25
******************************************************************************/

//! HTTP transport for the futures REST API.
//!
//! One [`BinanceHttpClient`] implementation is constructed at startup and
//! shared read-only by every service. It owns the reqwest client, the
//! request signer, and the rate limiter; callers hand it a method, a path,
//! and query parameters and get back a deserialized response or an
//! [`AppError`].

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::transport::signer::{RequestSigner, build_query_string};
use crate::utils::rate_limiter::{RateLimiter, RateLimitType, create_rate_limiter};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Security level of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Security {
    /// No key, no signature (e.g. the price ticker)
    Public,
    /// `X-MBX-APIKEY` header plus signed query string
    Signed,
}

/// Error body the exchange returns with non-success statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: i64,
    msg: String,
}

/// Trait for making requests against the exchange REST surface.
///
/// Services are generic over this trait so tests can substitute a recording
/// implementation.
#[async_trait]
pub trait BinanceHttpClient: Send + Sync {
    /// Sends one request and deserializes the JSON response.
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - API path (e.g. `/fapi/v1/order`)
    /// * `params` - query parameters in the order they should be signed
    /// * `security` - whether the endpoint requires the signed query
    async fn request<T: DeserializeOwned + Send>(
        &self,
        method: Method,
        path: &str,
        params: Vec<(&'static str, String)>,
        security: Security,
    ) -> Result<T, AppError>;
}

/// Reqwest-backed implementation bound to one base URL and one credential
/// pair for the process lifetime.
pub struct BinanceHttpClientImpl {
    config: Arc<Config>,
    http: Client,
    signer: RequestSigner,
    rate_limiter: Arc<RateLimiter>,
}

impl BinanceHttpClientImpl {
    /// Builds the transport from configuration.
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        let signer = RequestSigner::new(
            config.credentials.api_key.clone(),
            config.credentials.api_secret.clone(),
        );
        let rate_limiter = create_rate_limiter(
            RateLimitType::RequestWeight,
            Some(config.rate_limit_safety_margin),
        );

        Ok(Self {
            config,
            http,
            signer,
            rate_limiter,
        })
    }

    fn url(&self, path: &str, query: &str) -> String {
        let base = self.config.rest_api.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if query.is_empty() {
            format!("{base}/{path}")
        } else {
            format!("{base}/{path}?{query}")
        }
    }

    async fn parse_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, AppError> {
        Ok(response.json().await?)
    }

    /// Maps a non-success response to the error taxonomy.
    ///
    /// The exchange reports rejections as `{ "code": .., "msg": .. }`; those
    /// are surfaced verbatim as [`AppError::Exchange`] so the command loop
    /// can show the user exactly what the venue said. Logging stays at
    /// debug here; the command boundary owns the one visible record per
    /// failure.
    async fn map_error(&self, response: Response) -> AppError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status == StatusCode::TOO_MANY_REQUESTS || status == StatusCode::IM_A_TEAPOT {
            debug!("Rate limit response from exchange: {}", body);
            return AppError::RateLimitExceeded;
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            debug!("Request unauthorized: {}", body);
            return AppError::Unauthorized;
        }

        if let Ok(api_error) = serde_json::from_str::<ApiErrorBody>(&body) {
            debug!("Exchange rejection {}: {}", api_error.code, api_error.msg);
            return AppError::Exchange {
                code: api_error.code,
                message: api_error.msg,
            };
        }

        if status == StatusCode::NOT_FOUND {
            return AppError::NotFound;
        }

        debug!("Request failed with status {}: {}", status, body);
        AppError::Unexpected(status)
    }
}

impl std::fmt::Debug for BinanceHttpClientImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinanceHttpClientImpl")
            .field("base_url", &self.config.rest_api.base_url)
            .finish()
    }
}

#[async_trait]
impl BinanceHttpClient for BinanceHttpClientImpl {
    async fn request<T: DeserializeOwned + Send>(
        &self,
        method: Method,
        path: &str,
        params: Vec<(&'static str, String)>,
        security: Security,
    ) -> Result<T, AppError> {
        let mut params: Vec<(String, String)> = params
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();

        if security == Security::Signed {
            params.push((
                "recvWindow".to_string(),
                self.config.rest_api.recv_window.to_string(),
            ));
            self.signer.sign(&mut params, Utc::now().timestamp_millis());
        }

        let query = build_query_string(&params);
        let url = self.url(path, &query);

        self.rate_limiter.wait().await;
        debug!("{} {}", method, path);

        let mut request = self.http.request(method, &url);
        if security == Security::Signed {
            request = request.header("X-MBX-APIKEY", self.signer.api_key());
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            self.parse_response(response).await
        } else {
            Err(self.map_error(response).await)
        }
    }
}
