//! Validated HTTP header construction.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};

use crate::error::NfceError;
use crate::types::Cnpj;

/// Header name carrying the tenant identifier on every request. The literal
/// form `company-cnpj: <value>` is the wire contract with the backend.
pub const TENANT_HEADER: &str = "company-cnpj";

/// Builder that validates header names and values into a `HeaderMap`,
/// surfacing bad input as configuration errors instead of panics.
#[derive(Debug, Default)]
pub struct HeaderBuilder {
    headers: HeaderMap,
}

impl HeaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bearer_auth(mut self, token: &str) -> Result<Self, NfceError> {
        let value = format!("Bearer {token}");
        self.headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&value)
                .map_err(|e| NfceError::Configuration(format!("invalid token format: {e}")))?,
        );
        Ok(self)
    }

    pub fn header(mut self, name: &str, value: &str) -> Result<Self, NfceError> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| NfceError::Configuration(format!("invalid header name '{name}': {e}")))?;
        self.headers.insert(
            name,
            HeaderValue::from_str(value).map_err(|e| {
                NfceError::Configuration(format!("invalid header value '{value}': {e}"))
            })?,
        );
        Ok(self)
    }

    pub fn build(self) -> HeaderMap {
        self.headers
    }
}

/// Clone the default header set and add the tenant header for this call.
pub(crate) fn with_tenant(base: &HeaderMap, cnpj: &Cnpj) -> Result<HeaderMap, NfceError> {
    let mut headers = base.clone();
    headers.insert(
        HeaderName::from_static(TENANT_HEADER),
        HeaderValue::from_str(cnpj.as_str())
            .map_err(|e| NfceError::Configuration(format!("invalid cnpj header value: {e}")))?,
    );
    Ok(headers)
}
