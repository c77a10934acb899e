// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Code generation for the `UsesUuid` derive.
//!
//! Emits the `impl entity_uuid_core::UsesUuid` block: the
//! `UUID_ATTRIBUTE` constant built from const builder calls, and the two
//! storage accessors specialized for the field shape. All paths are fully
//! qualified so the generated code works regardless of what the adopting
//! crate imports.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::{ConcernDef, Storage};

/// Generate the `UsesUuid` implementation for a parsed definition.
pub fn impl_uses_uuid(def: &ConcernDef) -> TokenStream {
    let ident = &def.ident;
    let (impl_generics, ty_generics, where_clause) = def.generics.split_for_impl();
    let field = &def.field;
    let attribute = &def.attribute;
    let version = def.version.runtime_path();

    let mut builder = quote! {
        ::entity_uuid_core::UuidAttribute::new(#attribute).versioned(#version)
    };
    if def.primary_key {
        builder = quote! { #builder.primary_key() };
    }

    let read = match def.storage {
        Storage::Plain => quote! {
            if self.#field.is_empty() {
                ::core::option::Option::None
            } else {
                ::core::option::Option::Some(self.#field.as_str())
            }
        },
        Storage::Optional => quote! {
            self.#field.as_deref()
        }
    };

    let write = match def.storage {
        Storage::Plain => quote! {
            self.#field = value;
        },
        Storage::Optional => quote! {
            self.#field = ::core::option::Option::Some(value);
        }
    };

    quote! {
        #[automatically_derived]
        impl #impl_generics ::entity_uuid_core::UsesUuid for #ident #ty_generics #where_clause {
            const UUID_ATTRIBUTE: ::entity_uuid_core::UuidAttribute = #builder;

            fn uuid(&self) -> ::core::option::Option<&str> {
                #read
            }

            fn write_uuid(&mut self, value: ::std::string::String) {
                #write
            }
        }
    }
}
