//! Full expansion of a packed string, for debugging and verification.
//!
//! Membership checks on hot paths should use [`crate::query`] instead.

use perms_core::result::AppResult;

use crate::alphabet::decode_or_err;
use crate::{BITS_PER_SYMBOL, PermissionId};

/// Expands every symbol into six `'0'`/`'1'` characters, most significant first.
///
/// # Errors
///
/// `InvalidArgument` on the first symbol outside the alphabet.
pub fn to_binary_string(packed: &str) -> AppResult<String> {
    let mut bits = String::with_capacity(packed.len() * BITS_PER_SYMBOL);
    for ch in packed.chars() {
        let value = decode_or_err(ch)?;
        for shift in (0..BITS_PER_SYMBOL).rev() {
            bits.push(if (value >> shift) & 1 == 1 { '1' } else { '0' });
        }
    }
    Ok(bits)
}

/// Lists every identifier set in `packed`, ascending.
///
/// # Errors
///
/// `InvalidArgument` on the first symbol outside the alphabet.
pub fn unpack(packed: &str) -> AppResult<Vec<PermissionId>> {
    let mut ids = Vec::new();
    for (index, ch) in packed.chars().enumerate() {
        let value = decode_or_err(ch)?;
        for offset in 0..BITS_PER_SYMBOL {
            if (value >> (BITS_PER_SYMBOL - 1 - offset)) & 1 == 1 {
                ids.push((index * BITS_PER_SYMBOL + offset) as PermissionId);
            }
        }
    }
    Ok(ids)
}
