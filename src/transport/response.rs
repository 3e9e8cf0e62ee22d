//! Response envelope and the shared success/failure classifier.
//!
//! Every operation applies the same classification: a status in `200..=299`
//! returns the envelope unchanged; anything else becomes an
//! [`NfceError::ApiError`] carrying the most specific detail the body
//! offered. No operation defines bespoke success or error logic.

use serde::{Serialize, Serializer};

use crate::error::NfceError;

/// Response body, shaped by the request's
/// [`ResponseFormat`](super::ResponseFormat).
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(serde_json::Value),
    Bytes(Vec<u8>),
}

// Bytes serialize lossily as text so a serialized envelope stays readable.
impl Serialize for ResponseBody {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Json(v) => v.serialize(serializer),
            Self::Bytes(b) => serializer.serialize_str(&String::from_utf8_lossy(b)),
        }
    }
}

impl ResponseBody {
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(v) => Some(v),
            Self::Bytes(_) => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            Self::Json(_) => None,
        }
    }
}

/// One backend response: status code plus decoded-or-raw body. Immutable
/// once produced by the transport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl ApiResponse {
    /// Decoded JSON body, if this was a JSON-mode response.
    pub fn json(&self) -> Option<&serde_json::Value> {
        self.body.as_json()
    }

    /// Raw body bytes, if this was a bytes-mode response.
    pub fn bytes(&self) -> Option<&[u8]> {
        self.body.as_bytes()
    }

    /// Consume the response, yielding the raw bytes of a bytes-mode body.
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self.body {
            ResponseBody::Bytes(b) => Some(b),
            ResponseBody::Json(_) => None,
        }
    }

    /// Apply the shared classification: pass 2xx through unchanged, turn
    /// everything else into an [`NfceError::ApiError`].
    ///
    /// Failure detail, first match wins:
    /// 1. a string `message` field in the body;
    /// 2. an `errors` array, joined with `"\r\n"` in order;
    /// 3. the whole envelope serialized to JSON.
    pub fn checked(self) -> Result<Self, NfceError> {
        if (200..=299).contains(&self.status) {
            return Ok(self);
        }
        let message = self.error_detail();
        Err(NfceError::ApiError {
            status: self.status,
            message,
            body: self.body.as_json().cloned(),
        })
    }

    fn error_detail(&self) -> String {
        if let Some(body) = self.body.as_json() {
            if let Some(message) = body.get("message").and_then(|m| m.as_str()) {
                return message.to_string();
            }
            if let Some(errors) = body.get("errors").and_then(|e| e.as_array()) {
                return errors
                    .iter()
                    .map(|e| match e.as_str() {
                        Some(s) => s.to_string(),
                        None => e.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("\r\n");
            }
        }
        self.serialize_envelope()
    }

    /// Fallback detail: the full envelope as JSON, so status and body stay
    /// recoverable from the error string.
    fn serialize_envelope(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| format!(r#"{{"status":{}}}"#, self.status))
    }
}
