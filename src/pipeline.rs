// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Pipeline orchestration.
//!
//! A run is a set of independent, stateless passes over an immutable
//! [`DeclarationModel`]:
//!
//! ```text
//! corpus ──► filter ──► resolve ──► assemble ──► render ──► Output
//!                          │            │
//!                          └──► docs ◄──┤
//!                               xref ◄──┘
//!                                   │
//!                    DiagnosticSink ◄┘ (out-of-band reports)
//! ```
//!
//! Filtering, per-owner assembly and rendering run on `rayon`. The only
//! shared mutable state is the append-only [`DiagnosticSink`]. Artifacts are
//! sorted by name and diagnostics by location before they leave the run, so
//! identical corpora give identical output.
//!
//! # Example
//!
//! ```
//! use declsynth::{SynModel, SynthConfig, pipeline::Pipeline};
//!
//! let model = SynModel::from_source(
//!     r#"
//!     #[enum_transform]
//!     pub enum Mode { Read, Write }
//!     "#
//! );
//! let output = Pipeline::new(SynthConfig::default()).run(&model).unwrap();
//! assert!(!output.has_errors());
//! assert!(output.artifact("Mode.g").is_some());
//! ```

pub mod cache;
pub mod cancel;
pub mod diagnostics;
pub mod docs;
pub mod filter;
pub mod xref;

#[cfg(test)]
pub(crate) mod testing;

use std::{
    collections::{HashMap, HashSet},
    fs,
    path::{Path, PathBuf},
    sync::Arc
};

pub use cache::RenderCache;
pub use cancel::CancellationToken;
pub use diagnostics::{Diagnostic, DiagnosticDescriptor, DiagnosticSink, Severity};
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    config::{BuildMetadata, SynthConfig},
    error::{Result, SynthError},
    generators::{commands, enums, properties, runtime},
    model::{DeclarationModel, Marker, MarkerMatcher},
    render::Artifact
};

/// Marker matchers built once per run from the configuration.
#[derive(Debug, Clone)]
pub struct Matchers {
    /// `enum_transform` family.
    pub enum_transform:  MarkerMatcher,
    /// `description` family.
    pub description:     MarkerMatcher,
    /// `notify_property` family.
    pub notify_property: MarkerMatcher,
    /// `command` family.
    pub command:         MarkerMatcher
}

impl Matchers {
    /// Matchers for the configured names and match mode.
    pub fn from_config(config: &SynthConfig) -> Self {
        let mode = config.match_mode;
        Self {
            enum_transform:  config.markers.enum_transform.matcher(mode),
            description:     config.markers.description.matcher(mode),
            notify_property: config.markers.notify_property.matcher(mode),
            command:         config.markers.command.matcher(mode)
        }
    }
}

/// Everything a generator needs during one run.
pub struct Context<'a> {
    /// Corpus view.
    pub model:    &'a dyn DeclarationModel,
    /// Run configuration.
    pub config:   &'a SynthConfig,
    /// Header metadata.
    pub metadata: &'a BuildMetadata,
    /// Report sink.
    pub sink:     &'a DiagnosticSink,
    /// Cancellation flag.
    pub cancel:   &'a CancellationToken,
    /// Optional render memoization.
    pub cache:    Option<&'a RenderCache>,
    /// Marker matchers.
    pub markers:  Matchers
}

impl Context<'_> {
    /// `Err(Cancelled)` once cancellation was requested.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::Cancelled`].
    pub fn checkpoint(&self) -> Result<()> {
        self.cancel.checkpoint()
    }

    /// Fully qualified path of a runtime item.
    pub fn runtime(&self, item: &str) -> String {
        self.config.runtime_item(item)
    }

    /// Render through the cache when one is attached.
    pub fn render_cached<T: Serialize>(
        &self,
        kind: &str,
        description: &T,
        render: impl FnOnce() -> String
    ) -> String {
        match self.cache {
            Some(cache) => {
                let key = RenderCache::fingerprint(
                    kind,
                    description,
                    self.metadata,
                    &self.config.runtime_path
                );
                cache.get_or_render(key, render)
            }
            None => render()
        }
    }

    /// The single marker of a family on a declaration.
    ///
    /// Reports `duplicate` when the family is attached more than once and
    /// [`MALFORMED_MARKER`](diagnostics::MALFORMED_MARKER) when its arguments
    /// did not parse. Either way the declaration is skipped.
    pub fn exclusive_marker<'m>(
        &self,
        matcher: &MarkerMatcher,
        markers: &'m [Marker],
        duplicate: &DiagnosticDescriptor,
        subject: &str
    ) -> Option<&'m Marker> {
        let mut found = matcher.select(markers);
        let first = found.next()?;
        if let Some(second) = found.next() {
            self.sink.emit(
                duplicate,
                &second.location,
                format!("{subject} carries more than one `{}` marker", matcher.name())
            );
            return None;
        }
        if first.malformed {
            self.sink.emit(
                &diagnostics::MALFORMED_MARKER,
                &first.location,
                format!("arguments of `{}` on {subject} could not be parsed", first.name)
            );
            return None;
        }
        Some(first)
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Output {
    /// Generated artifacts sorted by name.
    pub artifacts:   Vec<Artifact>,
    /// Reports sorted by location, id and message.
    pub diagnostics: Vec<Diagnostic>
}

impl Output {
    /// Whether any report is an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Artifact named `name`.
    #[must_use]
    pub fn artifact(&self, name: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.name == name)
    }

    /// Reports with the given id.
    pub fn diagnostics_with_id<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.id == id)
    }

    /// Write every artifact to `dir` as `{name}.rs`.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::Write`] when the directory cannot be created or
    /// a file cannot be written.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| SynthError::Write {
            path: dir.to_path_buf(),
            source
        })?;

        let mut written = Vec::with_capacity(self.artifacts.len());
        for artifact in &self.artifacts {
            let path = dir.join(artifact.file_name());
            fs::write(&path, &artifact.text).map_err(|source| SynthError::Write {
                path: path.clone(),
                source
            })?;
            written.push(path);
        }
        debug!(dir = %dir.display(), files = written.len(), "artifacts written");
        Ok(written)
    }
}

/// Configured synthesis pipeline.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config:   SynthConfig,
    metadata: BuildMetadata,
    cancel:   CancellationToken,
    cache:    Option<Arc<RenderCache>>
}

impl Pipeline {
    /// Pipeline with reproducible metadata, no cancellation and no cache.
    pub fn new(config: SynthConfig) -> Self {
        Self {
            config,
            metadata: BuildMetadata::reproducible(),
            cancel: CancellationToken::new(),
            cache: None
        }
    }

    /// Header metadata stamped into every artifact.
    #[must_use]
    pub fn with_metadata(mut self, metadata: BuildMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Cancellation token checked between declarations.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Render cache shared across runs.
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<RenderCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    /// Run every enabled generator over `model`.
    ///
    /// Per-declaration problems are returned as diagnostics, never as
    /// errors.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::Cancelled`] when the token is cancelled before
    /// the run completes. Partial output is dropped.
    pub fn run(&self, model: &dyn DeclarationModel) -> Result<Output> {
        let sink = DiagnosticSink::new();
        let ctx = Context {
            model,
            config: &self.config,
            metadata: &self.metadata,
            sink: &sink,
            cancel: &self.cancel,
            cache: self.cache.as_deref(),
            markers: Matchers::from_config(&self.config)
        };
        ctx.checkpoint()?;

        let toggles = self.config.generators;
        let mut artifacts = Vec::new();
        if toggles.enums {
            artifacts.push(runtime::enum_runtime(ctx.metadata));
            artifacts.extend(enums::generate(&ctx)?);
        }
        if toggles.properties {
            artifacts.push(runtime::notify_runtime(ctx.metadata, &self.config.capabilities));
            artifacts.extend(properties::generate(&ctx)?);
        }
        if toggles.commands {
            artifacts.push(runtime::command_runtime(ctx.metadata, &self.config.capabilities));
            artifacts.extend(commands::generate(&ctx)?);
        }
        ctx.checkpoint()?;

        let mut artifacts = reject_name_collisions(artifacts, &sink);
        artifacts.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.text.cmp(&b.text)));
        let diagnostics = sink.finish();
        info!(
            artifacts = artifacts.len(),
            diagnostics = diagnostics.len(),
            "synthesis run finished"
        );
        Ok(Output {
            artifacts,
            diagnostics
        })
    }
}

/// Drop declaration artifacts whose name is generated more than once.
///
/// Every colliding declaration is reported with
/// [`DUPLICATE_ARTIFACT`](diagnostics::DUPLICATE_ARTIFACT). Runtime artifacts
/// carry no origin and are always kept.
fn reject_name_collisions(artifacts: Vec<Artifact>, sink: &DiagnosticSink) -> Vec<Artifact> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for artifact in &artifacts {
        *counts.entry(artifact.name.as_str()).or_default() += 1;
    }
    let colliding: HashSet<String> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name.to_string())
        .collect();
    if colliding.is_empty() {
        return artifacts;
    }

    artifacts
        .into_iter()
        .filter(|artifact| {
            if !colliding.contains(&artifact.name) {
                return true;
            }
            let Some(origin) = &artifact.origin else {
                return true;
            };
            sink.emit(
                &diagnostics::DUPLICATE_ARTIFACT,
                origin,
                format!(
                    "artifact `{}` is generated by more than one declaration; rename one of them",
                    artifact.name
                )
            );
            false
        })
        .collect()
}
