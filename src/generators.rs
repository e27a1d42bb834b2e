// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generator families.
//!
//! Each family owns one marker, one diagnostics namespace and one artifact
//! kind:
//!
//! | Family | Marker | Ids | Artifacts |
//! |--------|--------|-----|-----------|
//! | [`enums`] | `#[enum_transform]`, `#[description]` | `ENUM*` | `{Enum}.g` |
//! | [`properties`] | `#[notify_property]` | `PROP*` | `{Type}.properties.g`, `{Type}.NotifyPropertyChanged.g` |
//! | [`commands`] | `#[command]` | `CMD*` | `{Type}.commands.g` |
//! | [`runtime`] | none | none | `EnumTransform.g`, `NotifyProperty.g`, `Command.g` |
//!
//! A family is split the same way throughout:
//!
//! - `description` - plain data records, serializable for the render cache
//! - `assemble` - resolved declarations to description, reporting problems
//! - `render` - description to text, pure and deterministic
//! - `generate` - filter, resolve, assemble and render over the whole model

pub mod commands;
pub mod enums;
pub mod properties;
pub mod runtime;
