// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Quick Navigation
//!
//! - **Derive Macro**: [`UsesUuid`](macro@UsesUuid) — the only export
//! - **Runtime types**: the `entity-uuid-core` crate
//! - **Facade**: the `entity-uuid` crate re-exports both
//!
//! # Attribute Quick Reference
//!
//! ```rust,ignore
//! #[derive(UsesUuid)]
//! #[uuid(
//!     attribute = "uuid",   // Optional: attribute/field name (default: "uuid")
//!     primary_key,          // Optional: the attribute doubles as the key
//!     version = "v4"        // Optional: "v4" | "v7" (default: "v4")
//! )]
//! pub struct Post {
//!     pub uuid: Option<String>,  // or: pub uuid: String
//!     pub title: String,
//! }
//! ```

mod concern;

use proc_macro::TokenStream;

/// Derive the `UsesUuid` concern for a record type.
///
/// Implements `entity_uuid_core::UsesUuid`: the per-type
/// `UUID_ATTRIBUTE` configuration constant and the storage accessors the
/// trait's default methods build on. The storage field is located by the
/// configured attribute name and must be `String` (empty counts as unset)
/// or `Option<String>`.
///
/// # Attributes
///
/// | Attribute | Required | Default | Description |
/// |-----------|----------|---------|-------------|
/// | `attribute` | No | `"uuid"` | Name of the UUID attribute / storage field |
/// | `primary_key` | No | off | Designate the attribute as the primary key |
/// | `version` | No | `"v4"` | UUID version for generated values |
///
/// # Examples
///
/// Default configuration:
///
/// ```rust,ignore
/// use entity_uuid::UsesUuid;
///
/// #[derive(UsesUuid, Default)]
/// pub struct Post {
///     pub uuid: Option<String>,
///     pub title: String,
/// }
///
/// let mut post = Post::default();
/// post.ensure_uuid();
/// assert!(post.uuid().is_some());
/// ```
///
/// UUID as the primary key, time-ordered:
///
/// ```rust,ignore
/// #[derive(UsesUuid)]
/// #[uuid(primary_key, version = "v7")]
/// pub struct Session {
///     pub uuid: String,
///     pub user: String,
/// }
/// ```
///
/// # Compile Errors
///
/// Deriving on an enum or tuple struct, pointing `attribute` at a missing
/// field, or storing the UUID in anything but `String`/`Option<String>`
/// is rejected at compile time.
#[proc_macro_derive(UsesUuid, attributes(uuid))]
pub fn derive_uses_uuid(input: TokenStream) -> TokenStream {
    concern::derive(input)
}
