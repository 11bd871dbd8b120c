/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 4/11/25
******************************************************************************/

//! Rate limiter module for controlling API request rates
//!
//! Uses the `governor` crate to keep this client inside the exchange's
//! published request-weight and order-count budgets. The limiter delays
//! outgoing requests only; it never re-sends anything.

use crate::constants::{DEFAULT_ORDERS_PER_MINUTE, DEFAULT_WEIGHT_PER_MINUTE};
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::QuantaClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// The two budgets the exchange enforces on the futures REST surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitType {
    /// Request weight per minute (every endpoint consumes some weight)
    RequestWeight,
    /// Orders per minute (placement and cancellation)
    Orders,
}

impl RateLimitType {
    fn requests_per_minute(self) -> u32 {
        match self {
            RateLimitType::RequestWeight => DEFAULT_WEIGHT_PER_MINUTE,
            RateLimitType::Orders => DEFAULT_ORDERS_PER_MINUTE,
        }
    }
}

/// Token-bucket limiter shared by all requests of one budget type.
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock>>,
}

impl RateLimiter {
    /// Creates a limiter for the given budget, scaled by a safety margin.
    ///
    /// # Arguments
    ///
    /// * `limit_type` - Which exchange budget to respect
    /// * `safety_margin` - Fraction of the published limit to actually use
    ///   (defaults to 0.8 when `None`)
    #[must_use]
    pub fn new(limit_type: RateLimitType, safety_margin: Option<f64>) -> Self {
        let margin = safety_margin.unwrap_or(0.8).clamp(0.05, 1.0);
        let per_minute = (f64::from(limit_type.requests_per_minute()) * margin).floor() as u32;

        let per_minute = NonZeroU32::new(per_minute.max(1)).expect("max(1) is non-zero");
        let quota = Quota::with_period(Duration::from_secs(60))
            .expect("valid period")
            .allow_burst(per_minute);

        Self {
            limiter: Arc::new(GovernorRateLimiter::direct(quota)),
        }
    }

    /// Waits until a request can be made according to the rate limit.
    pub async fn wait(&self) {
        while self.limiter.check().is_err() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    /// Checks whether a request can be made immediately without waiting.
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("limiter", &"GovernorRateLimiter")
            .finish()
    }
}

/// Creates a rate limiter wrapped for sharing across the transport.
#[must_use]
pub fn create_rate_limiter(
    limit_type: RateLimitType,
    safety_margin: Option<f64>,
) -> Arc<RateLimiter> {
    Arc::new(RateLimiter::new(limit_type, safety_margin))
}
