//! Request-scoped classification types.

use serde::Serialize;
use std::fmt;

/// MIME type of the downloadable result.
pub const RESULT_MIME_TYPE: &str = "text/plain";

/// Prefix of the suggested download file name.
const FILE_NAME_PREFIX: &str = "ISIC_Classification_";

/// The user's model-provider API key.
///
/// Formatting never reveals the value and the type is not serializable, so it
/// cannot leak into logs or JSON responses.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw secret, for the outbound request only.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// One form submission.
#[derive(Debug, Clone)]
pub struct ClassificationRequest {
    pub credential: Credential,
    pub company_name: String,
    pub company_description: String,
}

impl ClassificationRequest {
    pub fn new(
        credential: impl Into<String>,
        company_name: impl Into<String>,
        company_description: impl Into<String>,
    ) -> Self {
        Self {
            credential: Credential::new(credential),
            company_name: company_name.into(),
            company_description: company_description.into(),
        }
    }
}

/// The model's answer, kept exactly as returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub result_text: String,
}

impl ClassificationResult {
    /// Package the result as a downloadable text file named after the company.
    pub fn download(&self, company_name: &str) -> DownloadArtifact {
        DownloadArtifact {
            file_name: suggested_file_name(company_name),
            mime_type: RESULT_MIME_TYPE,
            bytes: self.result_text.clone().into_bytes(),
        }
    }
}

/// A file offered to the user for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// `ISIC_Classification_<name with spaces as underscores>.txt`
pub fn suggested_file_name(company_name: &str) -> String {
    format!("{}{}.txt", FILE_NAME_PREFIX, company_name.replace(' ', "_"))
}
