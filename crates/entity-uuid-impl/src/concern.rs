// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `UsesUuid` derive macro implementation.
//!
//! Orchestrates the two stages of the derive:
//!
//! ```text
//! concern.rs (orchestrator)
//! │
//! ├── parse.rs        → ConcernDef from #[uuid(...)] + field lookup
//! ├── uuid_version.rs → v4/v7 attribute value
//! └── generate.rs     → impl entity_uuid_core::UsesUuid
//! ```

mod generate;
mod parse;
mod uuid_version;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use self::parse::ConcernDef;

/// Main entry point for the `UsesUuid` derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match ConcernDef::from_derive_input(&input) {
        Ok(def) => generate::impl_uses_uuid(&def).into(),
        Err(err) => err.write_errors().into()
    }
}
