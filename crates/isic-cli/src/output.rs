//! Terminal output formatting.

use colored::Colorize;
use isic_core::{ClassificationResult, ClassifyError};

/// Print a successful classification.
pub fn print_result(result: &ClassificationResult) {
    println!("{} {}", "✓".green().bold(), "Classification completed successfully!".green());
    println!();
    println!("{}", "UNSD ISIC Classification Result".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}", result.result_text);
    println!("{}", "─".repeat(40).dimmed());
}

/// Follow-up advice for a failed classification, if any.
pub fn failure_hint(err: &ClassifyError) -> Option<&'static str> {
    match err {
        ClassifyError::ExternalCallFailed(_) => Some("Please check your API key and try again."),
        _ => None,
    }
}

/// Print the follow-up advice on stderr, next to the error itself.
pub fn print_failure_hint(err: &ClassifyError) {
    if let Some(hint) = failure_hint(err) {
        eprintln!("{}", hint.dimmed());
    }
}
