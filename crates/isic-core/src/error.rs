//! Centralized error types for the classification tool.

use thiserror::Error;

/// Errors surfaced to the user by [`crate::classify`].
///
/// Every variant is recoverable: the user fixes the input (or the key) and
/// submits again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("Please enter your Google Gemini API Key in the sidebar.")]
    MissingCredential,

    #[error("Please enter the Company Name.")]
    MissingName,

    #[error("Please enter a brief description of the company's activities.")]
    MissingDescription,

    #[error("An error occurred: {0}")]
    ExternalCallFailed(String),
}

/// Result type for classification operations.
pub type ClassifyResult<T> = Result<T, ClassifyError>;

impl ClassifyError {
    /// Stable tag used by the JSON API.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingCredential => "missing_credential",
            Self::MissingName => "missing_name",
            Self::MissingDescription => "missing_description",
            Self::ExternalCallFailed(_) => "external_call_failed",
        }
    }

    /// Whether the error was raised before any network call was made.
    pub fn is_precondition(&self) -> bool {
        !matches!(self, Self::ExternalCallFailed(_))
    }
}

/// Failures of the external text-generation call.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Request to model provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Model provider returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Model provider returned no text ({0})")]
    EmptyResponse(String),

    #[error("Failed to decode model provider response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<GenerationError> for ClassifyError {
    fn from(err: GenerationError) -> Self {
        Self::ExternalCallFailed(err.to_string())
    }
}
