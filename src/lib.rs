//! # nfhub-nfce
//!
//! Client bindings for the NFHub NFCe (consumer electronic invoice) API:
//! certificate registration, invoice calculation, transmission, retrieval,
//! cancellation, document printing, and XML import.
//!
//! Every operation follows one uniform contract: build a tenant-scoped
//! request, dispatch it through a shared [`Transport`], classify the result,
//! and normalize failures into [`NfceError`]. A call resolves to exactly one
//! [`ApiResponse`] or exactly one error — nothing is retried or suppressed
//! at this layer.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use nfhub_nfce::{Cnpj, NfceClient};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), nfhub_nfce::NfceError> {
//!     let client = NfceClient::builder("https://api.nfhub.com.br/v1")
//!         .bearer_token("your-api-token")
//!         .build()?;
//!
//!     let cnpj = Cnpj::new("12345678000190")?;
//!
//!     // Transmit an invoice; the payload is forwarded opaque.
//!     let transmitted = client
//!         .transmit_invoice(&cnpj, json!({"serie": 1, "items": []}), &[])
//!         .await?;
//!     println!("transmitted: {:?}", transmitted.json());
//!
//!     // Binary documents come back as raw bytes.
//!     let danfce = client.fetch_danfce(&cnpj, 42, &[]).await?;
//!     let pdf = danfce.into_bytes().expect("bytes-mode response");
//!     std::fs::write("danfce.pdf", pdf).unwrap();
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod headers;
mod routes;
mod transport;
mod types;

pub use client::{NfceClient, NfceClientBuilder};
pub use config::NfceConfig;
pub use error::NfceError;
pub use headers::{HeaderBuilder, TENANT_HEADER};
pub use transport::{
    ApiRequest, ApiResponse, HttpTransport, RequestBody, ResponseBody, ResponseFormat, Transport,
    Verb,
};
pub use types::{CertificateUpload, Cnpj, FilePart};

/// Commonly used imports.
pub mod prelude {
    pub use crate::client::NfceClient;
    pub use crate::error::NfceError;
    pub use crate::transport::{ApiResponse, ResponseBody};
    pub use crate::types::{CertificateUpload, Cnpj, FilePart};
}
