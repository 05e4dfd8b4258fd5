//! Classifier configuration.

use std::time::Duration;

/// Default Gemini API base URL.
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com";

/// Default generative model.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Default end-to-end budget for a single model call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Settings for the model client. The credential is deliberately not part of
/// this struct: it is supplied per request by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierConfig {
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GEMINI_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClassifierConfig {
    /// Build a config, treating empty strings and a zero timeout as "use the default".
    pub fn new(base_url: Option<&str>, model: Option<&str>, timeout_secs: Option<u64>) -> Self {
        let defaults = Self::default();
        Self {
            base_url: base_url
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            model: model
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .unwrap_or(defaults.model),
            timeout: timeout_secs
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }
}
