/// Base URL for the Binance USD-M Futures Testnet REST API
pub const TESTNET_REST_BASE_URL: &str = "https://testnet.binancefuture.com";
/// User agent string used in HTTP requests to identify this client to the exchange
pub const USER_AGENT: &str = "binance-futures-cli/0.2.0";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_REST_TIMEOUT: u64 = 30;
/// Default receive window in milliseconds sent with every signed request.
///
/// The exchange rejects signed requests whose timestamp falls outside this
/// window, which bounds how stale a replayed request can be.
pub const DEFAULT_RECV_WINDOW: u64 = 5000;
/// Default path of the append-only trade log
pub const DEFAULT_LOG_FILE: &str = "trading_bot.log";
/// Default request-weight budget per minute (the testnet allows 2400)
pub const DEFAULT_WEIGHT_PER_MINUTE: u32 = 2400;
/// Default order budget per minute (the testnet allows 1200)
pub const DEFAULT_ORDERS_PER_MINUTE: u32 = 1200;
/// Length of generated client order references
pub const ORDER_REF_LEN: usize = 20;
