//! Production transport over `reqwest`.

use async_trait::async_trait;
use tracing::{debug, warn};

use super::{ApiRequest, ApiResponse, RequestBody, ResponseBody, ResponseFormat, Transport, Verb};
use crate::error::NfceError;

/// HTTP transport backed by a shared `reqwest::Client`.
///
/// Holds no per-call state: body encoding and response decoding are driven
/// entirely by the [`ApiRequest`] it receives, so concurrent calls on one
/// instance cannot interfere.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn build_multipart(
        files: &[crate::types::FilePart],
        fields: &[(String, String)],
    ) -> reqwest::multipart::Form {
        let mut form = reqwest::multipart::Form::new();
        for file in files {
            form = form.part(
                file.field.clone(),
                reqwest::multipart::Part::bytes(file.content.clone())
                    .file_name(file.filename.clone()),
            );
        }
        for (name, value) in fields {
            form = form.text(name.clone(), value.clone());
        }
        form
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, NfceError> {
        let url = self.url_for(&request.path);
        debug!(verb = request.verb.as_str(), %url, "dispatching request");

        let mut headers = request.headers;
        let mut rb = match request.verb {
            Verb::Get => self.client.get(&url),
            Verb::Post => self.client.post(&url),
        };

        rb = match request.body {
            RequestBody::Empty => rb,
            RequestBody::Json(json) => rb.json(&json),
            RequestBody::Multipart { files, fields } => {
                // The form owns its boundary-based Content-Type; a preset
                // JSON Content-Type must not override it.
                headers.remove(reqwest::header::CONTENT_TYPE);
                rb.multipart(Self::build_multipart(&files, &fields))
            }
        };
        rb = rb.headers(headers);
        if !request.query.is_empty() {
            rb = rb.query(&request.query);
        }

        let resp = rb.send().await?;
        let status = resp.status().as_u16();
        debug!(%url, status, "response received");
        if !(200..=299).contains(&status) {
            warn!(%url, status, "backend reported failure status");
        }

        let body = match request.response_format {
            ResponseFormat::Bytes => ResponseBody::Bytes(resp.bytes().await?.to_vec()),
            ResponseFormat::Json => {
                let text = resp.text().await?;
                if text.trim().is_empty() {
                    ResponseBody::Json(serde_json::json!({}))
                } else {
                    match serde_json::from_str(&text) {
                        Ok(json) => ResponseBody::Json(json),
                        // A failure status with a non-JSON body still gets an
                        // envelope so the classifier can report it in full; a
                        // success status with an undecodable body is a decode
                        // error.
                        Err(e) if (200..=299).contains(&status) => return Err(e.into()),
                        Err(_) => ResponseBody::Json(serde_json::Value::String(text)),
                    }
                }
            }
        };

        Ok(ApiResponse { status, body })
    }
}
