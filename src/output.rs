//! Text and JSON output formatting for command reports.

use serde::Serialize;

use perms_core::error::AppError;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Key/value lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Resolves the `output.format` configuration value.
    pub fn from_config(value: &str) -> Result<Self, AppError> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::configuration(format!(
                "Unknown output format '{other}' (expected 'text' or 'json')"
            ))),
        }
    }
}

/// A command result that can be printed in either format.
pub trait Report: Serialize {
    /// Key/value pairs for the text format, in display order.
    fn fields(&self) -> Vec<(&'static str, String)>;
}

/// Renders a report to a string in the selected format
pub fn render<R: Report>(report: &R, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(report
            .fields()
            .iter()
            .map(|(key, value)| format!("{:<16} {}", format!("{key}:"), value))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Prints a report to stdout in the selected format
pub fn print_report<R: Report>(report: &R, format: OutputFormat) -> Result<(), AppError> {
    println!("{}", render(report, format)?);
    Ok(())
}

/// Joins identifiers for text output
pub fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
