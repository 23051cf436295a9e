//! The `check` and `any` commands.

use clap::Args;
use serde::Serialize;

use perms_codec::PermissionId;
use perms_core::error::AppError;

use crate::output::{self, OutputFormat, Report};

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Packed permission string
    pub packed: String,
    /// Permission identifier to look up
    #[arg(allow_negative_numbers = true)]
    pub id: PermissionId,
}

/// Arguments for the any command
#[derive(Debug, Args)]
pub struct AnyArgs {
    /// Packed permission string
    pub packed: String,
    /// Permission identifiers, checked in order
    #[arg(allow_negative_numbers = true)]
    pub ids: Vec<PermissionId>,
}

/// Result of a single-identifier check
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// The packed string
    pub packed: String,
    /// The identifier checked
    pub permission_id: PermissionId,
    /// Whether the identifier is granted
    pub granted: bool,
}

impl Report for CheckReport {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("packed", self.packed.clone()),
            ("permission_id", self.permission_id.to_string()),
            ("granted", self.granted.to_string()),
        ]
    }
}

/// Result of an any-of check
#[derive(Debug, Serialize)]
pub struct AnyReport {
    /// The packed string
    pub packed: String,
    /// The identifiers checked
    pub permission_ids: Vec<PermissionId>,
    /// Whether at least one identifier is granted
    pub granted: bool,
}

impl Report for AnyReport {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("packed", self.packed.clone()),
            ("permission_ids", output::join_ids(&self.permission_ids)),
            ("granted", self.granted.to_string()),
        ]
    }
}

/// Checks one identifier without printing
pub fn run(args: &CheckArgs) -> Result<CheckReport, AppError> {
    let granted = perms_codec::has_permission(&args.packed, args.id)?;
    tracing::debug!(permission_id = args.id, granted, "Checked permission");
    Ok(CheckReport {
        packed: args.packed.clone(),
        permission_id: args.id,
        granted,
    })
}

/// Checks several identifiers without printing
pub fn run_any(args: &AnyArgs) -> Result<AnyReport, AppError> {
    let granted = perms_codec::has_any_permission(&args.packed, args.ids.iter().copied())?;
    tracing::debug!(ids = args.ids.len(), granted, "Checked any permission");
    Ok(AnyReport {
        packed: args.packed.clone(),
        permission_ids: args.ids.clone(),
        granted,
    })
}

/// Execute the check command
pub fn execute(args: &CheckArgs, format: OutputFormat) -> Result<(), AppError> {
    output::print_report(&run(args)?, format)
}

/// Execute the any command
pub fn execute_any(args: &AnyArgs, format: OutputFormat) -> Result<(), AppError> {
    output::print_report(&run_any(args)?, format)
}
