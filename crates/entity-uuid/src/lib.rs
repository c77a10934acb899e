// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # entity-uuid
//!
//! One crate, all pieces. Re-exports:
//! - [`UsesUuid`](macro@UsesUuid) derive macro from `entity-uuid-impl`
//! - All types from `entity-uuid-core` ([`UsesUuid`], [`UuidAttribute`],
//!   [`ByUuid`], [`InvalidInput`])

// Re-export all core types
// Re-export derive macro
pub use entity_uuid_core::*;
pub use entity_uuid_impl::UsesUuid;
