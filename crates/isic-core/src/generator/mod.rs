//! Text-generation backends.

pub mod gemini;

use async_trait::async_trait;

use crate::classification::model::Credential;
use crate::error::GenerationError;

/// A remote model that turns a prompt into free text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Identifier of the model requests are sent to.
    fn model(&self) -> &str;

    /// Run one generation, authenticating with `credential`.
    async fn generate(&self, credential: &Credential, prompt: &str) -> Result<String, GenerationError>;
}
