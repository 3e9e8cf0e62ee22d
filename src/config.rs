//! Client configuration.

use std::collections::HashMap;
use std::time::Duration;

use secrecy::SecretString;

/// Connection settings for [`NfceClient`](crate::NfceClient).
///
/// Authentication bootstrapping is not this crate's concern; the optional
/// bearer token is forwarded as-is on every request when present.
#[derive(Debug, Clone)]
pub struct NfceConfig {
    /// Backend base URL, e.g. `https://api.nfhub.com.br/v1`.
    pub base_url: String,
    /// Optional bearer token attached to every request.
    pub token: Option<SecretString>,
    /// Total request timeout.
    pub timeout: Option<Duration>,
    /// Connect-phase timeout.
    pub connect_timeout: Option<Duration>,
    /// Extra headers attached to every request.
    pub default_headers: HashMap<String, String>,
}

impl NfceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: None,
            connect_timeout: None,
            default_headers: HashMap::new(),
        }
    }
}
