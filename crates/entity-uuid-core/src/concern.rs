// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The UUID attribute concern.
//!
//! [`UsesUuid`] is the contract a record type adopts, usually through
//! `#[derive(UsesUuid)]`. The derive supplies the storage accessors
//! ([`uuid`](UsesUuid::uuid), [`write_uuid`](UsesUuid::write_uuid)) and the
//! per-type [`UUID_ATTRIBUTE`](UsesUuid::UUID_ATTRIBUTE) constant; the
//! validated setter and the pre-insert hook come as default methods.
//!
//! Hosts that expose a hook-registration API register [`before_insert`]
//! (or call [`ensure_uuid`](UsesUuid::ensure_uuid) directly) immediately
//! before a record's first insert.

use crate::{
    attribute::{UuidAttribute, is_valid_uuid},
    error::InvalidInput
};

/// Behavior of a record type whose records carry a UUID attribute.
///
/// Guarantees that the designated attribute holds a syntactically valid
/// UUID before the record is first persisted, and optionally exposes that
/// attribute as the record's primary key.
///
/// # Implementing
///
/// Derive it:
///
/// ```rust,ignore
/// use entity_uuid::UsesUuid;
///
/// #[derive(UsesUuid, Default)]
/// pub struct Post {
///     pub uuid: Option<String>,
///     pub title: String,
/// }
/// ```
///
/// Manual implementations provide [`UUID_ATTRIBUTE`](Self::UUID_ATTRIBUTE)
/// (or keep the default), [`uuid`](Self::uuid) and
/// [`write_uuid`](Self::write_uuid); everything else has a default.
///
/// # Error Handling
///
/// [`set_uuid`](Self::set_uuid) rejects invalid input with
/// [`InvalidInput`] and leaves the record unchanged. Automatic generation
/// happens only in [`ensure_uuid`](Self::ensure_uuid); an invalid explicit
/// value is never silently replaced.
pub trait UsesUuid {
    /// Configuration for this type's UUID attribute.
    ///
    /// Defaults to attribute `"uuid"`, no key designation, version 4.
    const UUID_ATTRIBUTE: UuidAttribute = UuidAttribute::DEFAULT;

    /// Current raw value of the UUID attribute.
    ///
    /// `None` when the attribute is unset. The value is raw storage: it is
    /// only guaranteed to be a valid UUID after
    /// [`ensure_uuid`](Self::ensure_uuid) or a successful
    /// [`set_uuid`](Self::set_uuid).
    fn uuid(&self) -> Option<&str>;

    /// Store `value` in the UUID attribute without validation.
    ///
    /// Supplied by the derive. Callers go through
    /// [`set_uuid`](Self::set_uuid), which validates first.
    fn write_uuid(&mut self, value: String);

    /// Name of the attribute used to store the UUID.
    #[must_use]
    fn uuid_attribute_name() -> &'static str {
        Self::UUID_ATTRIBUTE.name()
    }

    /// Validate `value` and store it in the UUID attribute.
    ///
    /// Returns the record for chaining.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::MalformedUuid`] when `value` is not a
    /// syntactically valid UUID. The attribute keeps its prior value.
    fn set_uuid(&mut self, value: &str) -> Result<&mut Self, InvalidInput> {
        Self::UUID_ATTRIBUTE.validate(value)?;
        self.write_uuid(value.to_owned());
        Ok(self)
    }

    /// Pre-insert lifecycle hook.
    ///
    /// Called by the host immediately before the record's first insert.
    /// When the current value is missing, empty, or not a valid UUID, a
    /// fresh one is generated with the configured version and stored. A
    /// valid value is left untouched, so an explicitly assigned UUID
    /// survives creation and nothing is regenerated on update.
    fn ensure_uuid(&mut self) -> &mut Self {
        let valid = self.uuid().is_some_and(is_valid_uuid);
        if !valid {
            self.write_uuid(Self::UUID_ATTRIBUTE.generate());
        }
        self
    }

    /// Key value when the UUID attribute doubles as the primary key.
    ///
    /// `None` for types whose UUID attribute is not the key, or when the
    /// attribute is still unset.
    fn key(&self) -> Option<&str> {
        if Self::UUID_ATTRIBUTE.is_primary_key() {
            self.uuid()
        } else {
            None
        }
    }
}

/// Before-insert callback for host persistence layers.
///
/// The free-function shape suits hook-registration APIs that take a
/// `fn(&mut R)`:
///
/// ```rust,ignore
/// store.on_before_insert(entity_uuid_core::before_insert::<Post>);
/// ```
pub fn before_insert<R: UsesUuid>(record: &mut R) {
    record.ensure_uuid();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::UuidVersion;

    #[derive(Default, Debug)]
    struct Post {
        uuid: Option<String>
    }

    impl UsesUuid for Post {
        fn uuid(&self) -> Option<&str> {
            self.uuid.as_deref()
        }

        fn write_uuid(&mut self, value: String) {
            self.uuid = Some(value);
        }
    }

    struct Keyed {
        uuid: String
    }

    impl UsesUuid for Keyed {
        const UUID_ATTRIBUTE: UuidAttribute = UuidAttribute::new("uuid")
            .primary_key()
            .versioned(UuidVersion::V7);

        fn uuid(&self) -> Option<&str> {
            if self.uuid.is_empty() {
                None
            } else {
                Some(&self.uuid)
            }
        }

        fn write_uuid(&mut self, value: String) {
            self.uuid = value;
        }
    }

    const VALID: &str = "67e55044-10b1-426f-9247-bb680e5fe0c8";

    #[test]
    fn ensure_generates_when_missing() {
        let mut post = Post::default();
        post.ensure_uuid();
        assert!(post.uuid().is_some_and(is_valid_uuid));
    }

    #[test]
    fn ensure_replaces_invalid_value() {
        let mut post = Post {
            uuid: Some("foobar".to_string())
        };
        post.ensure_uuid();
        let value = post.uuid().expect("value present");
        assert!(is_valid_uuid(value));
        assert_ne!(value, "foobar");
    }

    #[test]
    fn ensure_preserves_valid_value() {
        let mut post = Post::default();
        post.set_uuid(VALID).expect("valid uuid");
        post.ensure_uuid();
        assert_eq!(post.uuid(), Some(VALID));
    }

    #[test]
    fn ensure_is_idempotent() {
        let mut post = Post::default();
        post.ensure_uuid();
        let first = post.uuid().map(str::to_owned);
        post.ensure_uuid();
        assert_eq!(post.uuid().map(str::to_owned), first);
    }

    #[test]
    fn set_rejects_invalid_and_keeps_prior_value() {
        let mut post = Post::default();
        post.set_uuid(VALID).expect("valid uuid");

        let err = post.set_uuid("foobar").unwrap_err();
        assert_eq!(err, InvalidInput::malformed("foobar"));
        assert_eq!(post.uuid(), Some(VALID));
    }

    #[test]
    fn set_returns_record_for_chaining() {
        let mut post = Post::default();
        let value = post
            .set_uuid(VALID)
            .expect("valid uuid")
            .uuid()
            .map(str::to_owned);
        assert_eq!(value.as_deref(), Some(VALID));
    }

    #[test]
    fn key_follows_primary_key_designation() {
        let mut post = Post::default();
        post.ensure_uuid();
        assert_eq!(post.key(), None);

        let mut keyed = Keyed {
            uuid: String::new()
        };
        assert_eq!(keyed.key(), None);
        keyed.ensure_uuid();
        assert_eq!(keyed.key(), keyed.uuid());
        assert!(keyed.key().is_some());
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let mut keyed = Keyed {
            uuid: String::new()
        };
        keyed.ensure_uuid();
        assert!(keyed.uuid().is_some_and(is_valid_uuid));
    }

    #[test]
    fn before_insert_callback_runs_hook() {
        let mut post = Post::default();
        before_insert(&mut post);
        assert!(post.uuid().is_some_and(is_valid_uuid));
    }

    #[test]
    fn attribute_name_default_and_override() {
        assert_eq!(Post::uuid_attribute_name(), "uuid");
        assert_eq!(Keyed::uuid_attribute_name(), "uuid");
        assert_eq!(Keyed::UUID_ATTRIBUTE.version(), UuidVersion::V7);
    }
}
