// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared utilities for analysis and rendering.
//!
//! # Submodules
//!
//! - [`docs`]: Doc attribute collection from `syn` attributes
//! - [`naming`]: Property, accessor and command name derivation
//! - [`tokens`]: Compact token printing for types and paths

pub mod docs;
pub mod naming;
pub mod tokens;
