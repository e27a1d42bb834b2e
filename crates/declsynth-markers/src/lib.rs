// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
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

//! # Arguments
//!
//! | Marker | Arguments |
//! |--------|-----------|
//! | `enum_transform` | `extension = "Name"` |
//! | `description` | `"text"` or `= "text"` |
//! | `notify_property` | `name = "Name"`, `observable = bool` |
//! | `command` | `name = "name"`, `can_execute = method`, `wrapper = path::Type` |
//!
//! Names must be identifiers. Everything else about a marked declaration is
//! checked by the generator and reported as a diagnostic of the build
//! script.

mod expand;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Mark an enum for extension-trait generation.
///
/// Strips the inert `#[description]` attributes from its variants and
/// otherwise emits the enum unchanged.
///
/// ```rust,ignore
/// #[enum_transform(extension = "ModeOps")]
/// pub enum Mode {
///     #[description("Read only")]
///     Read,
///     Write,
/// }
/// ```
#[proc_macro_attribute]
pub fn enum_transform(args: TokenStream, item: TokenStream) -> TokenStream {
    expand::enum_transform(args.into(), item.into())
        .unwrap_or_else(darling::Error::write_errors)
        .into()
}

/// Mark a method as a command handler or predicate.
///
/// ```rust,ignore
/// impl Editor {
///     #[command(can_execute = is_dirty)]
///     fn on_save_executed(&mut self) {}
/// }
/// ```
#[proc_macro_attribute]
pub fn command(args: TokenStream, item: TokenStream) -> TokenStream {
    expand::command(args.into(), item.into())
        .unwrap_or_else(darling::Error::write_errors)
        .into()
}

/// Declare `#[notify_property]` on the fields of a struct.
///
/// Expands to nothing. Accessors come from the generated
/// `{Type}.properties.g` artifact.
#[proc_macro_derive(NotifyProperties, attributes(notify_property))]
pub fn derive_notify_properties(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand::notify_properties(&input)
        .unwrap_or_else(darling::Error::write_errors)
        .into()
}
