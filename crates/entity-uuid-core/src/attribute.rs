// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! UUID attribute configuration.
//!
//! [`UuidAttribute`] is the per-type configuration value for the concern:
//! which attribute stores the UUID, whether that attribute doubles as the
//! record's primary key, and which UUID version is generated when a value
//! is missing. It is const-constructible so the derive macro can emit it
//! as an associated constant.

use uuid::Uuid;

use crate::error::InvalidInput;

/// Check whether `value` is a syntactically valid UUID string.
///
/// Accepts the canonical 36-character hyphenated form as well as the other
/// textual forms the `uuid` crate parses (simple, braced, URN).
///
/// # Example
///
/// ```rust
/// use entity_uuid_core::is_valid_uuid;
///
/// assert!(is_valid_uuid("67e55044-10b1-426f-9247-bb680e5fe0c8"));
/// assert!(!is_valid_uuid("foobar"));
/// assert!(!is_valid_uuid(""));
/// ```
#[must_use]
pub fn is_valid_uuid(value: &str) -> bool {
    Uuid::try_parse(value).is_ok()
}

/// UUID version used when the concern generates a value.
///
/// | Version | Method | Properties |
/// |---------|--------|------------|
/// | `V4` | `Uuid::new_v4()` | Random, widely compatible, default |
/// | `V7` | `Uuid::now_v7()` | Time-ordered, sortable |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UuidVersion {
    /// UUID version 4 - random.
    ///
    /// Uses `Uuid::new_v4()`. The default: auto-assigned attribute values
    /// carry no ordering significance.
    #[default]
    V4,

    /// UUID version 7 - time-ordered.
    ///
    /// Uses `Uuid::now_v7()`. Useful when the attribute doubles as a
    /// primary key and insert-time ordering matters.
    V7
}

impl UuidVersion {
    /// Generate a new UUID of this version as a hyphenated string.
    #[must_use]
    pub fn generate(&self) -> String {
        let value = match self {
            Self::V4 => Uuid::new_v4(),
            Self::V7 => Uuid::now_v7()
        };
        value.to_string()
    }
}

/// Configuration for the UUID attribute of a record type.
///
/// Every adopting type exposes one of these as
/// [`UsesUuid::UUID_ATTRIBUTE`](crate::UsesUuid::UUID_ATTRIBUTE). The
/// derive macro builds it from `#[uuid(...)]`; manual implementations use
/// the const builder methods.
///
/// # Example
///
/// ```rust
/// use entity_uuid_core::{UuidAttribute, UuidVersion};
///
/// const ATTR: UuidAttribute = UuidAttribute::new("post_uuid")
///     .primary_key()
///     .versioned(UuidVersion::V7);
///
/// assert_eq!(ATTR.name(), "post_uuid");
/// assert!(ATTR.is_primary_key());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UuidAttribute {
    name:        &'static str,
    primary_key: bool,
    version:     UuidVersion
}

impl UuidAttribute {
    /// Attribute name used when none is configured.
    pub const DEFAULT_NAME: &'static str = "uuid";

    /// Default configuration: attribute `"uuid"`, not a key, version 4.
    pub const DEFAULT: Self = Self::new(Self::DEFAULT_NAME);

    /// Create a configuration for the attribute called `name`.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            primary_key: false,
            version: UuidVersion::V4
        }
    }

    /// Designate the attribute as the record's primary key.
    ///
    /// The key is a string value and is never auto-incremented; the host
    /// reads the resulting settings through [`key_spec`](Self::key_spec).
    #[must_use]
    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Select the UUID version used for generated values.
    #[must_use]
    pub const fn versioned(mut self, version: UuidVersion) -> Self {
        self.version = version;
        self
    }

    /// Name of the attribute storing the UUID.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the attribute doubles as the record's primary key.
    #[must_use]
    pub const fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    /// UUID version used for generated values.
    #[must_use]
    pub const fn version(&self) -> UuidVersion {
        self.version
    }

    /// Primary-key settings for the host persistence layer.
    ///
    /// `None` unless the attribute is configured as the key.
    #[must_use]
    pub const fn key_spec(&self) -> Option<KeySpec> {
        if self.primary_key {
            Some(KeySpec {
                name:           self.name,
                auto_increment: false
            })
        } else {
            None
        }
    }

    /// Generate a new UUID string using the configured version.
    #[must_use]
    pub fn generate(&self) -> String {
        let value = self.version.generate();
        #[cfg(feature = "tracing")]
        tracing::debug!(attribute = self.name, %value, "generated uuid");
        value
    }

    /// Validate `value` as a syntactically correct UUID.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::MalformedUuid`] when `value` does not parse
    /// as a UUID.
    pub fn validate(&self, value: &str) -> Result<(), InvalidInput> {
        if is_valid_uuid(value) {
            Ok(())
        } else {
            Err(InvalidInput::malformed(value))
        }
    }
}

impl Default for UuidAttribute {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Primary-key configuration read by the host persistence layer.
///
/// Produced by [`UuidAttribute::key_spec`] when the UUID attribute is
/// designated as the record's primary key. The key value is a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySpec {
    /// Column/attribute name of the key.
    pub name: &'static str,

    /// Always `false`: UUID keys are assigned, never incremented.
    pub auto_increment: bool
}
