// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Corpus files and module path discovery.
//!
//! Module paths follow the crate layout:
//!
//! | File (relative to `src/`) | Module path |
//! |---------------------------|-------------|
//! | `lib.rs`, `main.rs` | `crate` |
//! | `ui.rs`, `ui/mod.rs` | `crate::ui` |
//! | `ui/editor.rs` | `crate::ui::editor` |

use std::{
    fs,
    path::{Component, Path, PathBuf}
};

use ignore::WalkBuilder;
use tracing::debug;

use crate::error::{Result, SynthError};

/// One Rust source file of the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path reported in diagnostics.
    pub path:        PathBuf,
    /// Module the file defines, e.g. `crate::ui`.
    pub module_path: String,
    /// File contents.
    pub text:        String
}

impl SourceFile {
    /// In-memory source file.
    pub fn new(
        path: impl Into<PathBuf>,
        module_path: impl Into<String>,
        text: impl Into<String>
    ) -> Self {
        Self {
            path:        path.into(),
            module_path: module_path.into(),
            text:        text.into()
        }
    }

    /// Read a file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::Read`] when the file cannot be read.
    pub fn read(path: impl AsRef<Path>, module_path: impl Into<String>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SynthError::Read {
            path: path.to_path_buf(),
            source
        })?;
        Ok(Self::new(path, module_path, text))
    }

    /// Every `.rs` file under `src_root`, sorted by path.
    ///
    /// The walk honours `.gitignore` and does not follow symlinks.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::Walk`] when the directory cannot be walked and
    /// [`SynthError::Read`] when a file cannot be read.
    pub fn discover(src_root: impl AsRef<Path>) -> Result<Vec<Self>> {
        let root = src_root.as_ref();
        let walker = WalkBuilder::new(root)
            .hidden(true)
            .git_ignore(true)
            .follow_links(false)
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|source| SynthError::Walk {
                path: root.to_path_buf(),
                source
            })?;
            let path = entry.path();
            if !path.is_file() || path.extension().is_none_or(|ext| ext != "rs") {
                continue;
            }
            let Ok(relative) = path.strip_prefix(root) else {
                continue;
            };
            let Some(module_path) = module_path_for(relative) else {
                continue;
            };
            files.push(Self::read(path, module_path)?);
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        debug!(root = %root.display(), files = files.len(), "discovered corpus files");
        Ok(files)
    }
}

/// Module path for a file path relative to the crate's `src/` directory.
///
/// `None` for paths that do not name a Rust file.
pub fn module_path_for(relative: &Path) -> Option<String> {
    let mut segments: Vec<String> = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => segments.push(part.to_str()?.to_string()),
            Component::CurDir => {}
            _ => return None
        }
    }

    let file = segments.pop()?;
    let stem = file.strip_suffix(".rs")?;
    let is_root = segments.is_empty() && matches!(stem, "lib" | "main");
    if stem != "mod" && !is_root {
        segments.push(stem.to_string());
    }

    let mut path = String::from("crate");
    for segment in segments {
        path.push_str("::");
        path.push_str(&segment);
    }
    Some(path)
}
