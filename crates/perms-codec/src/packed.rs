//! Validated packed permission value.
//!
//! [`PackedPermissions`] wraps a packed string whose every symbol is known
//! to be in the alphabet. It serializes as a bare string, so a token
//! claims struct can carry it as a field and get validation on decode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use perms_core::error::AppError;
use perms_core::result::AppResult;

use crate::alphabet::decode_or_err;
use crate::{PermissionId, expand, pack, query};

/// An immutable packed permission set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackedPermissions(String);

impl PackedPermissions {
    /// Packs the given identifiers.
    pub fn from_ids<I>(permission_ids: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = PermissionId>,
    {
        pack::pack(permission_ids).map(Self)
    }

    /// Validates an existing packed string, keeping it unchanged.
    pub fn parse(packed: impl Into<String>) -> AppResult<Self> {
        let packed = packed.into();
        for ch in packed.chars() {
            decode_or_err(ch)?;
        }
        Ok(Self(packed))
    }

    /// Checks a single identifier. See [`query::has_permission`].
    pub fn has(&self, permission_id: PermissionId) -> AppResult<bool> {
        query::has_permission(&self.0, permission_id)
    }

    /// Checks whether any identifier is present. See [`query::has_any_permission`].
    pub fn has_any<I>(&self, permission_ids: I) -> AppResult<bool>
    where
        I: IntoIterator<Item = PermissionId>,
    {
        query::has_any_permission(&self.0, permission_ids)
    }

    /// Returns the `0`/`1` expansion. See [`expand::to_binary_string`].
    pub fn to_binary_string(&self) -> AppResult<String> {
        expand::to_binary_string(&self.0)
    }

    /// Returns every identifier present, ascending. See [`expand::unpack`].
    pub fn ids(&self) -> AppResult<Vec<PermissionId>> {
        expand::unpack(&self.0)
    }

    /// Returns the packed text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of symbols.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no identifier was packed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PackedPermissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PackedPermissions {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PackedPermissions {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<PackedPermissions> for String {
    fn from(packed: PackedPermissions) -> String {
        packed.0
    }
}

impl AsRef<str> for PackedPermissions {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
