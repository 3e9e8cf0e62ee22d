//! Request envelope passed to the transport.
//!
//! The source API this crate binds toggled mutable `upload`/`decode` flags on
//! the client between calls. Here both modes are immutable values on the
//! request itself ([`RequestBody`] and [`ResponseFormat`]), so a mode can
//! never leak from one call into the next and nothing needs restoring on
//! error paths.

use reqwest::header::HeaderMap;

use crate::types::FilePart;

/// HTTP verb used by an operation. The backend surface only needs these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
}

impl Verb {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Outgoing body encoding.
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// No body (GET requests).
    Empty,
    /// JSON-encoded body.
    Json(serde_json::Value),
    /// Multipart form body: file parts plus plain text fields.
    Multipart {
        files: Vec<FilePart>,
        fields: Vec<(String, String)>,
    },
}

/// Expected decoding of the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    /// Decode the body as JSON (the default).
    #[default]
    Json,
    /// Return the body as raw bytes (PDF and XML document downloads).
    Bytes,
}

/// A single request to the backend. Built fresh per call, never reused.
#[derive(Debug)]
pub struct ApiRequest {
    pub verb: Verb,
    /// Path relative to the configured base URL, without a leading slash.
    pub path: String,
    pub body: RequestBody,
    pub response_format: ResponseFormat,
    /// Extra query parameters, appended in order.
    pub query: Vec<(String, String)>,
    /// Full header set for this call, tenant header included.
    pub headers: HeaderMap,
}

impl ApiRequest {
    pub fn new(verb: Verb, path: impl Into<String>) -> Self {
        Self {
            verb,
            path: path.into(),
            body: RequestBody::Empty,
            response_format: ResponseFormat::Json,
            query: Vec::new(),
            headers: HeaderMap::new(),
        }
    }

    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    pub fn with_response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = format;
        self
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }
}
