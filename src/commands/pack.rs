//! The `pack` command.

use clap::Args;
use serde::Serialize;

use perms_codec::PermissionId;
use perms_core::error::AppError;

use crate::output::{self, OutputFormat, Report};

/// Arguments for the pack command
#[derive(Debug, Args)]
pub struct PackArgs {
    /// Permission identifiers, in any order
    #[arg(allow_negative_numbers = true)]
    pub ids: Vec<PermissionId>,
}

/// Result of packing
#[derive(Debug, Serialize)]
pub struct PackReport {
    /// Identifiers as given
    pub ids: Vec<PermissionId>,
    /// The packed string
    pub packed: String,
    /// Number of symbols in the packed string
    pub symbols: usize,
}

impl Report for PackReport {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ids", output::join_ids(&self.ids)),
            ("packed", self.packed.clone()),
            ("symbols", self.symbols.to_string()),
        ]
    }
}

/// Packs the identifiers without printing
pub fn run(args: &PackArgs) -> Result<PackReport, AppError> {
    let packed = perms_codec::pack(args.ids.iter().copied())?;
    tracing::info!(ids = args.ids.len(), symbols = packed.len(), "Packed permissions");
    Ok(PackReport {
        ids: args.ids.clone(),
        symbols: packed.len(),
        packed,
    })
}

/// Execute the pack command
pub fn execute(args: &PackArgs, format: OutputFormat) -> Result<(), AppError> {
    output::print_report(&run(args)?, format)
}
