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

//! # Quick Navigation
//!
//! | Looking for | Go to |
//! |-------------|-------|
//! | Running a synthesis | [`Pipeline`], [`Output`] |
//! | Loading sources | [`SourceFile::discover`], [`SynModel`] |
//! | Configuration | [`SynthConfig`], [`config`] |
//! | Enum extensions | [`generators::enums`] |
//! | Observable properties | [`generators::properties`] |
//! | Command bindings | [`generators::commands`] |
//! | Runtime support types | [`generators::runtime`] |
//! | Diagnostic ids | [`pipeline::diagnostics`] |
//! | Doc comment dialect | [`pipeline::docs`] |
//! | Plugging in another front end | [`model::DeclarationModel`] |

pub mod config;
pub mod corpus;
pub mod error;
pub mod generators;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod utils;

pub use config::{BuildMetadata, SynthConfig};
pub use corpus::{SourceFile, SynModel};
pub use error::{Result, SynthError};
pub use pipeline::{CancellationToken, Diagnostic, Output, Pipeline, RenderCache, Severity};
pub use render::Artifact;
