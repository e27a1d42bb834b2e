// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Host-boundary error type.
//!
//! Problems with individual declarations never surface here: they are
//! reported through the [`DiagnosticSink`](crate::pipeline::DiagnosticSink)
//! and the run continues. [`SynthError`] only covers the edges of the
//! pipeline where the host hands data in or takes artifacts out.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | `Read` | [`SourceFile::read`](crate::corpus::SourceFile::read) |
//! | `Walk` | [`SourceFile::discover`](crate::corpus::SourceFile::discover) |
//! | `Write` | [`Output::write_to`](crate::pipeline::Output::write_to) |
//! | `Config` | [`SynthConfig::load`](crate::config::SynthConfig::load) |
//! | `Cancelled` | [`Pipeline::run`](crate::pipeline::Pipeline::run) |

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors crossing the pipeline boundary.
#[derive(Debug, Error)]
pub enum SynthError {
    /// A corpus file could not be read.
    #[error("failed to read source file {path}: {source}")]
    Read {
        /// File that failed.
        path:   PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error
    },

    /// Walking a source directory failed.
    #[error("failed to walk source directory {path}: {source}")]
    Walk {
        /// Root of the walk.
        path:   PathBuf,
        /// Underlying walker error.
        #[source]
        source: ignore::Error
    },

    /// An artifact could not be written.
    #[error("failed to write artifact {path}: {source}")]
    Write {
        /// Destination file.
        path:   PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error
    },

    /// Configuration could not be loaded or merged.
    #[error("invalid configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    /// The run observed a cancellation request; partial output was dropped.
    #[error("pipeline run was cancelled")]
    Cancelled
}

/// Result alias used at the pipeline boundary.
pub type Result<T> = std::result::Result<T, SynthError>;

impl From<figment::Error> for SynthError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}
