/// Account balances and positions
pub mod account;
/// Price ticker data
pub mod market;
/// Order requests, responses, and the related enums
pub mod order;
