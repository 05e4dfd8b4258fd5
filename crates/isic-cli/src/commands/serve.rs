//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use isic_core::TextGenerator;
use std::path::PathBuf;
use std::sync::Arc;

use super::ModelArgs;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "8501")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path used with --log (default: isic-serve.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs, model: &ModelArgs) -> Result<()> {
    let client = model.client()?;
    let model_name = client.model().to_string();
    let generator: Arc<dyn TextGenerator> = Arc::new(client);

    println!();
    println!(
        "  {} {}",
        "ISIC".cyan().bold(),
        "Classification Tool".bold()
    );
    println!();
    println!(
        "  {}   http://{}:{}",
        "Form".green(),
        args.host,
        args.port
    );
    println!(
        "  {}    http://{}:{}/api/classify",
        "API".green(),
        args.host,
        args.port
    );
    println!("  {}  {}", "Model".green(), model_name);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    isic_web::run_server(generator, &args.host, args.port).await?;

    Ok(())
}
