// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Context fixture for generator unit tests.

use super::{CancellationToken, Context, Diagnostic, DiagnosticSink, Matchers};
use crate::{
    config::{BuildMetadata, SynthConfig},
    model::DeclarationModel
};

/// Owns everything a [`Context`] borrows.
pub struct Harness {
    pub config:   SynthConfig,
    pub metadata: BuildMetadata,
    pub sink:     DiagnosticSink,
    pub cancel:   CancellationToken
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(SynthConfig::default())
    }

    pub fn with_config(config: SynthConfig) -> Self {
        Self {
            config,
            metadata: BuildMetadata::reproducible(),
            sink: DiagnosticSink::new(),
            cancel: CancellationToken::new()
        }
    }

    pub fn context<'a>(&'a self, model: &'a dyn DeclarationModel) -> Context<'a> {
        Context {
            model,
            config: &self.config,
            metadata: &self.metadata,
            sink: &self.sink,
            cancel: &self.cancel,
            cache: None,
            markers: Matchers::from_config(&self.config)
        }
    }

    /// Reports collected so far, sorted.
    pub fn diagnostics(self) -> Vec<Diagnostic> {
        self.sink.finish()
    }

    /// Ids of the reports collected so far, sorted.
    pub fn ids(self) -> Vec<&'static str> {
        self.diagnostics().into_iter().map(|d| d.id).collect()
    }
}
