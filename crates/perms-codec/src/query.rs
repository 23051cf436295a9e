//! Membership queries that decode only the symbol holding the requested bit.

use perms_core::result::AppResult;

use crate::alphabet::decode_or_err;
use crate::pack::bit_index;
use crate::{BITS_PER_SYMBOL, PermissionId};

/// Checks whether `permission_id` is set in a packed string.
///
/// Identifiers past the end of `packed` are absent, not an error. A
/// symbol outside the alphabet is an error only when it is the one probed.
///
/// # Errors
///
/// `InvalidArgument` if `permission_id` is negative or the probed symbol
/// is not in the alphabet.
pub fn has_permission(packed: &str, permission_id: PermissionId) -> AppResult<bool> {
    let bit = bit_index(permission_id)?;
    let index = bit / BITS_PER_SYMBOL;

    let Some(symbol) = symbol_at(packed, index) else {
        return Ok(false);
    };
    let value = decode_or_err(symbol)?;
    let mask = 1u8 << (BITS_PER_SYMBOL - 1 - bit % BITS_PER_SYMBOL);
    Ok((value & mask) == mask)
}

/// Checks whether any of `permission_ids` is set, in the given order.
///
/// Returns on the first match; an empty sequence yields `false`. The first
/// error from a single check is returned immediately.
pub fn has_any_permission<I>(packed: &str, permission_ids: I) -> AppResult<bool>
where
    I: IntoIterator<Item = PermissionId>,
{
    for permission_id in permission_ids {
        if has_permission(packed, permission_id)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Returns the character at symbol position `index`, or `None` past the end.
///
/// Positions count characters. While the prefix up to `index` is ASCII the
/// byte at `index` is that character, so well-formed strings stay O(1).
fn symbol_at(packed: &str, index: usize) -> Option<char> {
    let bytes = packed.as_bytes();
    match bytes.get(..=index) {
        Some(prefix) if prefix.is_ascii() => Some(bytes[index] as char),
        _ => packed.chars().nth(index),
    }
}
