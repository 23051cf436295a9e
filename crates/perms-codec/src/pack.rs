//! Packing a set of permission identifiers into its string form.

use perms_core::error::AppError;
use perms_core::result::AppResult;

use crate::alphabet::encode_symbol;
use crate::{BITS_PER_SYMBOL, PermissionId};

/// Packs permission identifiers into a URL-safe string.
///
/// Order and duplicates do not matter. An empty input packs to `""`.
/// The result has `max / 6 + 1` symbols, the smallest whole number of
/// six-bit groups that still holds the highest identifier.
///
/// # Errors
///
/// `InvalidArgument` if an identifier is negative or too large to address.
pub fn pack<I>(permission_ids: I) -> AppResult<String>
where
    I: IntoIterator<Item = PermissionId>,
{
    pack_optional(permission_ids.into_iter().map(Some))
}

/// Packs identifiers from a collection whose elements may be absent.
///
/// # Errors
///
/// `MissingValue` on the first `None` element, otherwise as [`pack`].
pub fn pack_optional<I>(permission_ids: I) -> AppResult<String>
where
    I: IntoIterator<Item = Option<PermissionId>>,
{
    // One byte per symbol, holding that symbol's six bits.
    let mut groups: Vec<u8> = Vec::new();
    let mut count = 0usize;

    for permission_id in permission_ids {
        let permission_id =
            permission_id.ok_or_else(|| AppError::missing_value("permissionId is null"))?;
        let bit = bit_index(permission_id)?;
        let group = bit / BITS_PER_SYMBOL;

        if group >= groups.len() {
            let additional = group + 1 - groups.len();
            groups.try_reserve(additional).map_err(|_| {
                AppError::invalid_argument(format!(
                    "permissionId {permission_id} is too large to pack"
                ))
            })?;
            groups.resize(group + 1, 0);
        }

        groups[group] |= 1 << (BITS_PER_SYMBOL - 1 - bit % BITS_PER_SYMBOL);
        count += 1;
    }

    let packed: String = groups.into_iter().map(encode_symbol).collect();
    tracing::debug!(ids = count, symbols = packed.len(), "Packed permission set");
    Ok(packed)
}

/// Converts an identifier to a bit index, rejecting negative values.
pub(crate) fn bit_index(permission_id: PermissionId) -> AppResult<usize> {
    if permission_id < 0 {
        return Err(AppError::invalid_argument(format!(
            "permissionId must be non-negative, got {permission_id}"
        )));
    }
    usize::try_from(permission_id).map_err(|_| {
        AppError::invalid_argument(format!(
            "permissionId {permission_id} exceeds the addressable range"
        ))
    })
}
