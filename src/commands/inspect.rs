//! The `binary` and `unpack` debugging commands.

use clap::Args;
use serde::Serialize;

use perms_codec::PermissionId;
use perms_core::error::AppError;

use crate::output::{self, OutputFormat, Report};

/// Arguments for the inspection commands
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Packed permission string
    pub packed: String,
}

/// Bit expansion of a packed string
#[derive(Debug, Serialize)]
pub struct BinaryReport {
    /// The packed string
    pub packed: String,
    /// Six `0`/`1` characters per symbol
    pub bits: String,
}

impl Report for BinaryReport {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![("packed", self.packed.clone()), ("bits", self.bits.clone())]
    }
}

/// Identifiers granted by a packed string
#[derive(Debug, Serialize)]
pub struct UnpackReport {
    /// The packed string
    pub packed: String,
    /// Granted identifiers, ascending
    pub permission_ids: Vec<PermissionId>,
}

impl Report for UnpackReport {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("packed", self.packed.clone()),
            ("permission_ids", output::join_ids(&self.permission_ids)),
        ]
    }
}

/// Expands a packed string without printing
pub fn run_binary(args: &InspectArgs) -> Result<BinaryReport, AppError> {
    Ok(BinaryReport {
        packed: args.packed.clone(),
        bits: perms_codec::to_binary_string(&args.packed)?,
    })
}

/// Lists granted identifiers without printing
pub fn run_unpack(args: &InspectArgs) -> Result<UnpackReport, AppError> {
    Ok(UnpackReport {
        packed: args.packed.clone(),
        permission_ids: perms_codec::unpack(&args.packed)?,
    })
}

/// Execute the binary command
pub fn execute_binary(args: &InspectArgs, format: OutputFormat) -> Result<(), AppError> {
    output::print_report(&run_binary(args)?, format)
}

/// Execute the unpack command
pub fn execute_unpack(args: &InspectArgs, format: OutputFormat) -> Result<(), AppError> {
    output::print_report(&run_unpack(args)?, format)
}
