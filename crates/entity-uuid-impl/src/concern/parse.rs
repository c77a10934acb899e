// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the `UsesUuid` derive.
//!
//! This module turns a `syn::DeriveInput` into a [`ConcernDef`]: the
//! container-level `#[uuid(...)]` attributes plus the resolved storage
//! field. The storage field is located by the configured attribute name
//! (default `"uuid"`) and must be `String` or `Option<String>`.
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `attribute` | No | `"uuid"` | Name of the UUID attribute / storage field |
//! | `primary_key` | No | off | Designate the attribute as the primary key |
//! | `version` | No | `"v4"` | UUID version for generated values |

use darling::FromDeriveInput;
use syn::{DeriveInput, Ident, Type};

use super::uuid_version::UuidVersion;

/// Container attributes parsed from `#[uuid(...)]`.
///
/// Internal darling struct; the public API of this module is
/// [`ConcernDef`], which combines these attributes with the resolved
/// storage field.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(uuid), supports(struct_named))]
struct ConcernAttrs {
    /// Struct identifier (e.g., `Post`).
    ident: Ident,

    /// Struct generics, carried through to the generated impl.
    generics: syn::Generics,

    /// Name of the UUID attribute and its storage field.
    ///
    /// Defaults to `"uuid"` when not specified.
    #[darling(default)]
    attribute: Option<String>,

    /// Designate the UUID attribute as the record's primary key.
    #[darling(default)]
    primary_key: bool,

    /// UUID version for generated values.
    ///
    /// Defaults to [`UuidVersion::V4`] if not specified.
    #[darling(default)]
    version: UuidVersion
}

/// Shape of the storage field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    /// `String` field; an empty string counts as unset.
    Plain,

    /// `Option<String>` field.
    Optional
}

/// Complete parsed concern definition.
///
/// Created via [`ConcernDef::from_derive_input`] and passed to the code
/// generator.
#[derive(Debug)]
pub struct ConcernDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics.
    pub generics: syn::Generics,

    /// Resolved attribute name.
    pub attribute: String,

    /// Whether the attribute doubles as the primary key.
    pub primary_key: bool,

    /// UUID version for generated values.
    pub version: UuidVersion,

    /// Identifier of the storage field.
    pub field: Ident,

    /// Shape of the storage field.
    pub storage: Storage
}

impl ConcernDef {
    /// Parse a derive input into a concern definition.
    ///
    /// # Errors
    ///
    /// Fails on enums and tuple structs, on a missing storage field, on a
    /// storage field that is neither `String` nor `Option<String>`, and on
    /// malformed `#[uuid(...)]` attributes.
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = ConcernAttrs::from_derive_input(input)?;
        let attribute = attrs
            .attribute
            .unwrap_or_else(|| "uuid".to_string());

        let field = find_field(input, &attribute)?;
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| darling::Error::custom("expected a named field").with_span(field))?;
        let storage = storage_for(&field.ty).ok_or_else(|| {
            darling::Error::custom(format!(
                "field `{attribute}` must be `String` or `Option<String>` to store a UUID"
            ))
            .with_span(&field.ty)
        })?;

        Ok(Self {
            ident: attrs.ident,
            generics: attrs.generics,
            attribute,
            primary_key: attrs.primary_key,
            version: attrs.version,
            field: ident,
            storage
        })
    }
}

/// Locate the storage field matching the configured attribute name.
fn find_field<'a>(input: &'a DeriveInput, attribute: &str) -> darling::Result<&'a syn::Field> {
    let syn::Data::Struct(data) = &input.data else {
        return Err(darling::Error::custom("UsesUuid can only be derived for structs")
            .with_span(&input.ident));
    };
    let syn::Fields::Named(fields) = &data.fields else {
        return Err(
            darling::Error::custom("UsesUuid requires a struct with named fields")
                .with_span(&input.ident)
        );
    };

    fields
        .named
        .iter()
        .find(|field| field.ident.as_ref().is_some_and(|ident| ident == attribute))
        .ok_or_else(|| {
            darling::Error::custom(format!(
                "no field `{attribute}` to store the UUID; add it or point \
                 #[uuid(attribute = \"...\")] at an existing field"
            ))
            .with_span(&input.ident)
        })
}

/// Classify the storage field type.
///
/// Returns `None` for anything other than `String` or `Option<String>`.
fn storage_for(ty: &Type) -> Option<Storage> {
    if is_string(ty) {
        return Some(Storage::Plain);
    }
    option_inner(ty)
        .filter(|inner| is_string(inner))
        .map(|_| Storage::Optional)
}

/// Check if the type is `String` (by last path segment).
fn is_string(ty: &Type) -> bool {
    if let Type::Path(type_path) = ty
        && let Some(segment) = type_path.path.segments.last()
    {
        return segment.ident == "String" && segment.arguments.is_none();
    }
    false
}

/// Extract `T` from `Option<T>`, if the type is an `Option`.
fn option_inner(ty: &Type) -> Option<&Type> {
    if let Type::Path(type_path) = ty
        && let Some(segment) = type_path.path.segments.last()
        && segment.ident == "Option"
        && let syn::PathArguments::AngleBracketed(args) = &segment.arguments
        && let Some(syn::GenericArgument::Type(inner)) = args.args.first()
    {
        return Some(inner);
    }
    None
}
