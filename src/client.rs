//! NFCe client façade.
//!
//! One method per backend operation. Every method funnels through the same
//! private dispatch helper: tenant header injection, transport call, shared
//! response classification. No operation carries bespoke success or error
//! logic.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::HeaderMap;
use secrecy::{ExposeSecret, SecretString};

use crate::config::NfceConfig;
use crate::error::NfceError;
use crate::headers::{self, HeaderBuilder};
use crate::routes;
use crate::transport::{
    ApiRequest, ApiResponse, HttpTransport, RequestBody, ResponseFormat, Transport, Verb,
};
use crate::types::{CertificateUpload, Cnpj, FilePart};

/// Form field the backend expects imported XML files under.
const IMPORT_FIELD: &str = "xmls[]";

/// Client for the NFHub NFCe API.
///
/// Cheap to clone; clones share the underlying transport. There is no
/// interior mutability, so one instance can serve concurrent tasks.
///
/// # Example
///
/// ```rust,no_run
/// use nfhub_nfce::{Cnpj, NfceClient};
///
/// # async fn example() -> Result<(), nfhub_nfce::NfceError> {
/// let client = NfceClient::builder("https://api.nfhub.com.br/v1")
///     .bearer_token("your-api-token")
///     .build()?;
///
/// let cnpj = Cnpj::new("12345678000190")?;
/// let response = client.fetch_invoice(&cnpj, 42, &[]).await?;
/// println!("{:?}", response.json());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct NfceClient {
    transport: Arc<dyn Transport>,
    default_headers: HeaderMap,
}

impl std::fmt::Debug for NfceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NfceClient")
            .field("default_headers", &self.default_headers.len())
            .finish_non_exhaustive()
    }
}

impl NfceClient {
    /// Start building a client against the given base URL.
    pub fn builder(base_url: impl Into<String>) -> NfceClientBuilder {
        NfceClientBuilder {
            config: NfceConfig::new(base_url),
            transport: None,
        }
    }

    /// Build a client from an existing configuration.
    pub fn from_config(config: NfceConfig) -> Result<Self, NfceError> {
        NfceClientBuilder {
            config,
            transport: None,
        }
        .build()
    }

    /// Register a digital certificate for the company.
    pub async fn register_certificate(
        &self,
        cnpj: &Cnpj,
        upload: CertificateUpload,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse, NfceError> {
        self.dispatch(
            cnpj,
            Verb::Post,
            routes::CERTIFICATES.to_string(),
            RequestBody::Multipart {
                files: vec![upload.file],
                fields: upload.fields,
            },
            ResponseFormat::Json,
            params,
        )
        .await
    }

    /// Calculate the totals of an NFCe without transmitting it.
    pub async fn calculate_invoice(
        &self,
        cnpj: &Cnpj,
        payload: serde_json::Value,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse, NfceError> {
        self.dispatch(
            cnpj,
            Verb::Post,
            routes::INVOICE_CALCULATE.to_string(),
            RequestBody::Json(payload),
            ResponseFormat::Json,
            params,
        )
        .await
    }

    /// Transmit an NFCe to the fiscal authority.
    pub async fn transmit_invoice(
        &self,
        cnpj: &Cnpj,
        payload: serde_json::Value,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse, NfceError> {
        self.dispatch(
            cnpj,
            Verb::Post,
            routes::INVOICES.to_string(),
            RequestBody::Json(payload),
            ResponseFormat::Json,
            params,
        )
        .await
    }

    /// Fetch a transmitted NFCe by id.
    pub async fn fetch_invoice(
        &self,
        cnpj: &Cnpj,
        id: u64,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse, NfceError> {
        self.dispatch(
            cnpj,
            Verb::Get,
            routes::invoice(id),
            RequestBody::Empty,
            ResponseFormat::Json,
            params,
        )
        .await
    }

    /// Fetch the printable DANFCE document (PDF bytes) of an NFCe.
    pub async fn fetch_danfce(
        &self,
        cnpj: &Cnpj,
        id: u64,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse, NfceError> {
        self.dispatch(
            cnpj,
            Verb::Get,
            routes::invoice_danfce(id),
            RequestBody::Empty,
            ResponseFormat::Bytes,
            params,
        )
        .await
    }

    /// Fetch the authorized XML document (raw bytes) of an NFCe.
    pub async fn fetch_xml(
        &self,
        cnpj: &Cnpj,
        id: u64,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse, NfceError> {
        self.dispatch(
            cnpj,
            Verb::Get,
            routes::invoice_xml(id),
            RequestBody::Empty,
            ResponseFormat::Bytes,
            params,
        )
        .await
    }

    /// Cancel a transmitted NFCe.
    pub async fn cancel_invoice(
        &self,
        cnpj: &Cnpj,
        id: u64,
        payload: serde_json::Value,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse, NfceError> {
        self.dispatch(
            cnpj,
            Verb::Post,
            routes::invoice_cancel(id),
            RequestBody::Json(payload),
            ResponseFormat::Json,
            params,
        )
        .await
    }

    /// Fetch the cancellation document (PDF bytes) of a cancelled NFCe.
    pub async fn fetch_cancellation_pdf(
        &self,
        cnpj: &Cnpj,
        id: u64,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse, NfceError> {
        self.dispatch(
            cnpj,
            Verb::Get,
            routes::invoice_cancel_pdf(id),
            RequestBody::Empty,
            ResponseFormat::Bytes,
            params,
        )
        .await
    }

    /// Import a batch of invoice XML files.
    ///
    /// Files are posted under the `xmls[]` form field regardless of the
    /// field set on each part. Rejects locally, before any network call,
    /// when the list is empty.
    pub async fn import_xml(
        &self,
        cnpj: &Cnpj,
        xmls: Vec<FilePart>,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse, NfceError> {
        if xmls.is_empty() {
            return Err(NfceError::InvalidInput(
                "at least one XML file is required for import".into(),
            ));
        }
        let files = xmls
            .into_iter()
            .map(|mut part| {
                part.field = IMPORT_FIELD.to_string();
                part
            })
            .collect();
        self.dispatch(
            cnpj,
            Verb::Post,
            routes::INVOICE_IMPORT.to_string(),
            RequestBody::Multipart {
                files,
                fields: Vec::new(),
            },
            ResponseFormat::Json,
            params,
        )
        .await
    }

    /// Render the PDF of an invoice from the content of its XML file.
    pub async fn render_pdf_from_xml(
        &self,
        cnpj: &Cnpj,
        xml_content: impl Into<String>,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse, NfceError> {
        self.dispatch(
            cnpj,
            Verb::Post,
            routes::PRINT_SEFAZ.to_string(),
            RequestBody::Json(serde_json::json!({ "xml": xml_content.into() })),
            ResponseFormat::Bytes,
            params,
        )
        .await
    }

    /// Shared dispatch: tenant header, transport call, uniform
    /// classification. Exactly one envelope or one error per call.
    async fn dispatch(
        &self,
        cnpj: &Cnpj,
        verb: Verb,
        path: String,
        body: RequestBody,
        format: ResponseFormat,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse, NfceError> {
        let headers = headers::with_tenant(&self.default_headers, cnpj)?;
        let query = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let request = ApiRequest {
            verb,
            path,
            body,
            response_format: format,
            query,
            headers,
        };
        self.transport.execute(request).await?.checked()
    }
}

/// Builder for [`NfceClient`].
pub struct NfceClientBuilder {
    config: NfceConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl NfceClientBuilder {
    /// Bearer token attached to every request.
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.config.token = Some(SecretString::from(token.into()));
        self
    }

    /// Total request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Connect-phase timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = Some(timeout);
        self
    }

    /// Extra header attached to every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config
            .default_headers
            .insert(name.into(), value.into());
        self
    }

    /// Replace the HTTP transport with a custom implementation. Intended
    /// for tests and instrumentation; the base URL is ignored when set.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<NfceClient, NfceError> {
        let mut builder = HeaderBuilder::new();
        if let Some(token) = &self.config.token {
            builder = builder.bearer_auth(token.expose_secret())?;
        }
        for (name, value) in &self.config.default_headers {
            builder = builder.header(name, value)?;
        }
        let default_headers = builder.build();

        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let mut http = reqwest::Client::builder();
                if let Some(timeout) = self.config.timeout {
                    http = http.timeout(timeout);
                }
                if let Some(timeout) = self.config.connect_timeout {
                    http = http.connect_timeout(timeout);
                }
                Arc::new(HttpTransport::new(http.build()?, self.config.base_url))
            }
        };

        Ok(NfceClient {
            transport,
            default_headers,
        })
    }
}
