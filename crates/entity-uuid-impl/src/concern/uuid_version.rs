// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! UUID version configuration for value generation.
//!
//! This module defines the parse-side [`UuidVersion`], which controls
//! which UUID version the generated configuration selects for
//! auto-assigned attribute values.

use darling::FromMeta;
use proc_macro2::TokenStream;
use quote::quote;

/// UUID version for value generation.
///
/// # Variants
///
/// | Version | Method | Properties |
/// |---------|--------|------------|
/// | `V4` | `Uuid::new_v4()` | Random, default |
/// | `V7` | `Uuid::now_v7()` | Time-ordered, sortable |
///
/// # Examples
///
/// ```rust,ignore
/// // UUIDv4 (default) - random
/// #[uuid(attribute = "uuid")]
/// #[uuid(version = "v4")]
///
/// // UUIDv7 - time-ordered, useful for primary keys
/// #[uuid(primary_key, version = "v7")]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UuidVersion {
    /// UUID version 4 - random. The default.
    #[default]
    V4,

    /// UUID version 7 - time-ordered.
    V7
}

impl UuidVersion {
    /// Path of the matching runtime variant.
    pub fn runtime_path(&self) -> TokenStream {
        match self {
            Self::V4 => quote!(::entity_uuid_core::UuidVersion::V4),
            Self::V7 => quote!(::entity_uuid_core::UuidVersion::V7)
        }
    }
}

impl FromMeta for UuidVersion {
    /// Parse UUID version from string attribute value.
    ///
    /// # Accepted Values
    ///
    /// - `"v4"`, `"4"` → [`UuidVersion::V4`]
    /// - `"v7"`, `"7"` → [`UuidVersion::V7`]
    ///
    /// Values are case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns `darling::Error::unknown_value` for unrecognized values.
    fn from_string(value: &str) -> darling::Result<Self> {
        match value.to_lowercase().as_str() {
            "v4" | "4" => Ok(UuidVersion::V4),
            "v7" | "7" => Ok(UuidVersion::V7),
            _ => Err(darling::Error::unknown_value(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_v4() {
        assert_eq!(UuidVersion::default(), UuidVersion::V4);
    }

    #[test]
    fn from_meta_v4() {
        assert_eq!(UuidVersion::from_string("v4").unwrap(), UuidVersion::V4);
        assert_eq!(UuidVersion::from_string("4").unwrap(), UuidVersion::V4);
        assert_eq!(UuidVersion::from_string("V4").unwrap(), UuidVersion::V4);
    }

    #[test]
    fn from_meta_v7() {
        assert_eq!(UuidVersion::from_string("v7").unwrap(), UuidVersion::V7);
        assert_eq!(UuidVersion::from_string("7").unwrap(), UuidVersion::V7);
        assert_eq!(UuidVersion::from_string("V7").unwrap(), UuidVersion::V7);
    }

    #[test]
    fn from_meta_invalid() {
        assert!(UuidVersion::from_string("v1").is_err());
        assert!(UuidVersion::from_string("v5").is_err());
        assert!(UuidVersion::from_string("uuid4").is_err());
    }

    #[test]
    fn runtime_paths() {
        assert!(
            UuidVersion::V4
                .runtime_path()
                .to_string()
                .contains("UuidVersion :: V4")
        );
        assert!(
            UuidVersion::V7
                .runtime_path()
                .to_string()
                .contains("UuidVersion :: V7")
        );
    }
}
