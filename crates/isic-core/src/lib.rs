//! ISIC Core Library
//!
//! Request handling for the ISIC Classification Tool: input validation, the
//! prompt template, and the generative-model client that performs the actual
//! classification.

pub mod classification;
pub mod config;
pub mod error;
pub mod generator;

pub use classification::classify;
pub use classification::model::{
    ClassificationRequest, ClassificationResult, Credential, DownloadArtifact,
};
pub use config::ClassifierConfig;
pub use error::{ClassifyError, ClassifyResult, GenerationError};
pub use generator::{gemini::GeminiClient, TextGenerator};
