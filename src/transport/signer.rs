//! HMAC-SHA256 request signing.
//!
//! The exchange authenticates every private request by an HMAC-SHA256
//! signature over the full query string, hex-encoded and appended as the
//! final `signature` parameter, with the API key in the `X-MBX-APIKEY`
//! header. Parameter order matters: the signature covers the string exactly
//! as sent.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signs query strings with the account's API secret.
#[derive(Clone)]
pub struct RequestSigner {
    api_key: String,
    api_secret: String,
}

impl RequestSigner {
    /// Creates a signer from credential strings.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// The API key sent alongside every signed request.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Hex-encoded HMAC-SHA256 of `data` under the API secret.
    #[must_use]
    pub fn signature(&self, data: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.api_secret.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(data.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Appends `timestamp` and the covering `signature` to `params`.
    ///
    /// After this call the parameter list is ready to be serialized verbatim
    /// into the request query string.
    pub fn sign(&self, params: &mut Vec<(String, String)>, timestamp_ms: i64) {
        params.push(("timestamp".to_string(), timestamp_ms.to_string()));
        let query = build_query_string(params);
        let signature = self.signature(&query);
        params.push(("signature".to_string(), signature));
    }
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("api_key", &"***")
            .field("api_secret", &"***")
            .finish()
    }
}

/// Joins parameters into a `k=v&k=v` query string, preserving order.
///
/// Values are produced by this crate's own formatters (symbols, enum
/// variants, decimal renderings, nanoid references) and contain no
/// characters that need percent-encoding.
#[must_use]
pub fn build_query_string(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}
