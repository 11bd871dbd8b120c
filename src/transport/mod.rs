/// HTTP client trait and reqwest implementation
pub mod http_client;
/// HMAC-SHA256 request signing
pub mod signer;
