//! One-shot classification from the terminal.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use isic_core::{ClassificationRequest, TextGenerator};
use std::path::PathBuf;
use std::time::Duration;

use super::ModelArgs;
use crate::output;

#[derive(Args)]
pub struct ClassifyArgs {
    /// Official name of the company
    #[arg(long)]
    pub name: String,

    /// Brief description of the company's activities
    #[arg(long)]
    pub description: String,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true, default_value = "")]
    pub api_key: String,

    /// Write the result to this file
    #[arg(long, conflicts_with = "save")]
    pub output: Option<PathBuf>,

    /// Write the result to ISIC_Classification_<name>.txt in the current directory
    #[arg(long)]
    pub save: bool,
}

pub async fn execute(args: ClassifyArgs, model: &ModelArgs) -> Result<()> {
    let client = model.client()?;
    let request = ClassificationRequest::new(args.api_key, args.name.clone(), args.description);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!(
        "Analyzing company information with {}...",
        client.model()
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = isic_core::classify(&client, request).await;
    spinner.finish_and_clear();

    let result = match outcome {
        Ok(result) => result,
        Err(e) => {
            output::print_failure_hint(&e);
            return Err(e.into());
        }
    };

    output::print_result(&result);

    let artifact = result.download(&args.name);
    let target = match (args.output, args.save) {
        (Some(path), _) => Some(path),
        (None, true) => Some(PathBuf::from(&artifact.file_name)),
        (None, false) => None,
    };

    if let Some(path) = target {
        std::fs::write(&path, &artifact.bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("{} Saved: {}", "✓".green().bold(), path.display());
    }

    Ok(())
}
