//! # perms-core
//!
//! Core crate for packed permissions. Contains the unified error system
//! and the configuration schemas used by the command-line tool.
//!
//! This crate has **no** internal dependencies on other workspace crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
