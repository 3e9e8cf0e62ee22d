//! Transport layer: the seam between operation façades and the network.
//!
//! [`Transport`] is the injectable boundary — the production
//! [`HttpTransport`] delegates socket I/O, TLS, multipart encoding and JSON
//! body writing to `reqwest`; tests substitute a recording implementation.

use async_trait::async_trait;

use crate::error::NfceError;

mod http;
mod request;
mod response;

pub use http::HttpTransport;
pub use request::{ApiRequest, RequestBody, ResponseFormat, Verb};
pub use response::{ApiResponse, ResponseBody};

/// Performs one backend call. Implementations must not retry: each request
/// resolves to exactly one response envelope or one error.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, NfceError>;
}
