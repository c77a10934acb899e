// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use entity_uuid_core::prelude::*;
//! ```

pub use crate::{
    ByUuid, InvalidInput, KeySpec, UsesUuid, UuidAttribute, UuidVersion, before_insert,
    filter_by_uuid, is_valid_uuid
};
