// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Text synthesis helpers shared by all generators.
//!
//! Rendering is a pure `description -> text` step. Generators build text
//! through these pieces instead of concatenating strings by hand:
//!
//! ```text
//! ArtifactText
//! ├── header      (// @generated by …, // source: …)
//! ├── section     (SourceWriter output)
//! ├── section
//! └── …           sections joined by exactly one blank line
//! ```
//!
//! [`MatchTable`] renders every value/text dispatch as data: an ordered list
//! of arms plus an optional fallback.

mod table;
mod writer;

use serde::Serialize;
pub use table::MatchTable;
pub use writer::{ArtifactText, SourceWriter};

use crate::{config::BuildMetadata, model::Location};

/// A generated, self-contained unit of output text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Artifact {
    /// Artifact name, e.g. `Color.g` or `Editor.commands.g`.
    pub name:   String,
    /// Full Rust source text.
    pub text:   String,
    /// Declaration the artifact was generated from, `None` for runtime
    /// artifacts.
    pub origin: Option<Location>
}

impl Artifact {
    /// Create an artifact without an origin.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name:   name.into(),
            text:   text.into(),
            origin: None
        }
    }

    /// Attach the declaration the artifact was generated from.
    #[must_use]
    pub fn with_origin(mut self, origin: Location) -> Self {
        self.origin = Some(origin);
        self
    }

    /// File name the host writes the artifact to.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.rs", self.name)
    }
}

/// Header lines for an artifact.
///
/// ```
/// use declsynth::{config::BuildMetadata, render::header_lines};
///
/// let meta = BuildMetadata::reproducible();
/// let lines = header_lines(&meta, Some("crate::ui::Color"));
/// assert!(lines[0].starts_with("// @generated by declsynth"));
/// assert_eq!(lines[1], "// source: crate::ui::Color");
/// ```
pub fn header_lines(meta: &BuildMetadata, source: Option<&str>) -> Vec<String> {
    let mut first = format!("// @generated by {} {}", meta.tool, meta.version);
    if let Some(timestamp) = &meta.timestamp {
        first.push_str(" at ");
        first.push_str(timestamp);
    }
    let mut lines = vec![first];
    if let Some(source) = source {
        lines.push(format!("// source: {source}"));
    }
    lines
}

/// Path of a runtime item under `runtime_path`.
///
/// An empty runtime path leaves the item unqualified.
pub fn runtime_item(runtime_path: &str, item: &str) -> String {
    if runtime_path.is_empty() {
        item.to_string()
    } else {
        format!("{runtime_path}::{item}")
    }
}

/// Rust string literal for `value`, escaped.
pub fn string_literal(value: &str) -> String {
    proc_macro2::Literal::string(value).to_string()
}
