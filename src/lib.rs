//! Interactive trading console for the Binance USD-M Futures Testnet.
//!
//! The library half of the crate: configuration, the signed HTTP transport,
//! typed request/response models, the account/market/order services, and the
//! command loop the binary runs. Everything network-facing goes through one
//! authenticated client constructed at startup; everything user-facing goes
//! through the command loop, which validates input locally before any
//! request leaves the process.

/// Request and response models plus the service layer
pub mod application;
/// Interactive menu and command loop
pub mod cli;
/// Environment-driven configuration
pub mod config;
/// Global constants
pub mod constants;
/// Error taxonomy
pub mod error;
/// Convenience re-exports
pub mod prelude;
/// Table rendering and serde helpers
pub mod presentation;
/// Startup bootstrapping
pub mod session;
/// HTTP transport and request signing
pub mod transport;
/// Environment, logging, rate limiting, and id helpers
pub mod utils;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version.
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
