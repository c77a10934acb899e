// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and types for entity-uuid.
//!
//! This crate provides the runtime half of the UUID attribute concern. It
//! can be used standalone for manual implementations; most users derive
//! the trait through the `entity-uuid` facade crate instead.
//!
//! # Overview
//!
//! - [`UsesUuid`] — behavior of a record type carrying a UUID attribute
//! - [`UuidAttribute`] — per-type configuration (name, key designation,
//!   generation version)
//! - [`ByUuid`] — by-uuid query-filter argument with SQL rendering
//! - [`InvalidInput`] — the single error kind
//! - [`before_insert`] — callback shape for host hook registration
//! - [`prelude`] — convenient re-exports
//!
//! # Usage
//!
//! ```rust
//! use entity_uuid_core::{UsesUuid, before_insert};
//!
//! #[derive(Default)]
//! struct Post {
//!     uuid:  Option<String>,
//!     title: String
//! }
//!
//! impl UsesUuid for Post {
//!     fn uuid(&self) -> Option<&str> {
//!         self.uuid.as_deref()
//!     }
//!
//!     fn write_uuid(&mut self, value: String) {
//!         self.uuid = Some(value);
//!     }
//! }
//!
//! let mut post = Post::default();
//! before_insert(&mut post);
//! assert!(post.uuid().is_some());
//! ```
//!
//! # Features
//!
//! - `postgres` — `sqlx` bind helpers for [`ByUuid`]
//! - `serde` — serde derives and JSON-value conversion for [`ByUuid`]
//! - `tracing` — debug events on generation and filter rendering

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod attribute;
mod concern;
mod error;
mod filter;
pub mod prelude;

pub use attribute::{KeySpec, UuidAttribute, UuidVersion, is_valid_uuid};
pub use concern::{UsesUuid, before_insert};
pub use error::InvalidInput;
pub use filter::{ByUuid, filter_by_uuid};
