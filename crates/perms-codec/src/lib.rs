//! # perms-codec
//!
//! Packs a set of non-negative permission identifiers into a compact,
//! URL-safe string and answers membership queries against it without
//! expanding the whole set.
//!
//! Bit `i` of the logical bitset lives in symbol `i / 6`, at weight
//! `1 << (5 - i % 6)`, so each symbol carries six bits, most significant
//! first. Symbols come from the URL-safe base64 alphabet.
//!
//! ## Modules
//!
//! - `alphabet`: symbol ↔ 6-bit value tables
//! - `pack`: identifier set → packed string
//! - `query`: single and any-of membership checks
//! - `expand`: full `0`/`1` expansion and identifier listing
//! - `packed`: validated [`PackedPermissions`] value type

pub mod alphabet;
pub mod expand;
pub mod pack;
pub mod packed;
pub mod query;

pub use expand::{to_binary_string, unpack};
pub use pack::{pack, pack_optional};
pub use packed::PackedPermissions;
pub use query::{has_any_permission, has_permission};

/// A permission identifier.
///
/// Signed so that callers handing over negative values get an
/// `InvalidArgument` error instead of a silent wrap-around.
pub type PermissionId = i64;

/// Number of bits carried by one packed symbol.
pub const BITS_PER_SYMBOL: usize = 6;
