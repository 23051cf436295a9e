//! CLI command definitions and dispatch.

pub mod check;
pub mod inspect;
pub mod pack;

use clap::{Parser, Subcommand};

use perms_core::config::AppConfig;
use perms_core::error::AppError;

use crate::output::OutputFormat;

/// packed-perms: pack permission identifiers into compact token claims
#[derive(Debug, Parser)]
#[command(name = "packed-perms", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/packed-perms.toml")]
    pub config: String,

    /// Output format (overrides `output.format` from the configuration)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Pack permission identifiers into a string
    Pack(pack::PackArgs),
    /// Check whether a packed string grants one identifier
    Check(check::CheckArgs),
    /// Check whether a packed string grants any of several identifiers
    Any(check::AnyArgs),
    /// Expand a packed string into its bits
    Binary(inspect::InspectArgs),
    /// List the identifiers granted by a packed string
    Unpack(inspect::InspectArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_config(&config.output.format)?,
        };

        match &self.command {
            Commands::Pack(args) => pack::execute(args, format),
            Commands::Check(args) => check::execute(args, format),
            Commands::Any(args) => check::execute_any(args, format),
            Commands::Binary(args) => inspect::execute_binary(args, format),
            Commands::Unpack(args) => inspect::execute_unpack(args, format),
        }
    }
}
