//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use isic_core::{ClassifierConfig, GeminiClient};

pub mod classify;
pub mod serve;

/// ISIC Classification Tool
#[derive(Parser)]
#[command(name = "isic")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub model: ModelArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Settings for the Gemini client, shared by every command.
#[derive(Args)]
pub struct ModelArgs {
    /// Gemini model to use for classification
    #[arg(long, global = true, env = "ISIC_MODEL")]
    pub model: Option<String>,

    /// Base URL of the Gemini API
    #[arg(long, global = true, env = "ISIC_GEMINI_URL")]
    pub base_url: Option<String>,

    /// End-to-end timeout for one model call, in seconds
    #[arg(long, global = true, env = "ISIC_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

impl ModelArgs {
    pub fn config(&self) -> ClassifierConfig {
        ClassifierConfig::new(
            self.base_url.as_deref(),
            self.model.as_deref(),
            self.timeout_secs,
        )
    }

    pub fn client(&self) -> Result<GeminiClient> {
        GeminiClient::new(&self.config()).context("Failed to build Gemini HTTP client")
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web form
    Serve(serve::ServeArgs),

    /// Classify one company from the terminal
    Classify(classify::ClassifyArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args, &self.model).await,
            Commands::Classify(args) => classify::execute(args, &self.model).await,
        }
    }
}
