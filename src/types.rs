//! Core value types shared across operations.

use crate::error::NfceError;

/// Tenant identifier: the fiscal registration number (CNPJ) of the company
/// on whose behalf a request is made.
///
/// Carried as the `company-cnpj` header on every request. Validated once at
/// construction so header building cannot fail per call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cnpj(String);

impl Cnpj {
    /// Accepts the number with or without punctuation (`12.345.678/0001-90`
    /// and `12345678000190` are both fine); it is forwarded verbatim.
    pub fn new(value: impl Into<String>) -> Result<Self, NfceError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(NfceError::InvalidInput("cnpj must not be empty".into()));
        }
        if !value.chars().all(|c| c.is_ascii_graphic()) {
            return Err(NfceError::InvalidInput(format!(
                "cnpj contains characters not allowed in a header value: {value:?}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One file carried in a multipart request body.
///
/// The content is opaque to this crate; encoding is delegated to the HTTP
/// layer.
#[derive(Debug, Clone)]
pub struct FilePart {
    /// Form field name the file is posted under.
    pub field: String,
    /// File name reported to the backend.
    pub filename: String,
    /// Raw file content.
    pub content: Vec<u8>,
}

impl FilePart {
    pub fn new(
        field: impl Into<String>,
        filename: impl Into<String>,
        content: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            field: field.into(),
            filename: filename.into(),
            content: content.into(),
        }
    }
}

/// Payload for digital certificate registration: the certificate file plus
/// any accompanying form fields (e.g. the certificate password).
#[derive(Debug, Clone)]
pub struct CertificateUpload {
    pub file: FilePart,
    pub fields: Vec<(String, String)>,
}

impl CertificateUpload {
    pub fn new(file: FilePart) -> Self {
        Self {
            file,
            fields: Vec::new(),
        }
    }

    /// Add a plain text field to the upload form.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }
}
