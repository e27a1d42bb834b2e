// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Render memoization.
//!
//! Rendered text is a pure function of the assembled description, the
//! build metadata and the runtime path. The cache keys rendered text by a
//! SHA-256 fingerprint of those inputs, so a host that keeps one cache
//! across runs only re-renders descriptions that changed.
//!
//! ```text
//! fingerprint = sha256(kind \0 runtime_path \0 json(metadata) \0 json(description))
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::trace;

use crate::config::BuildMetadata;

/// Concurrent map from input fingerprint to rendered text.
#[derive(Debug, Default)]
pub struct RenderCache {
    entries: DashMap<String, String>,
    hits:    AtomicUsize,
    misses:  AtomicUsize
}

impl RenderCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fingerprint of everything a render depends on.
    ///
    /// `None` when the description cannot be serialized; such renders are
    /// simply not cached.
    pub fn fingerprint<T: Serialize>(
        kind: &str,
        description: &T,
        metadata: &BuildMetadata,
        runtime_path: &str
    ) -> Option<String> {
        let description = serde_json::to_vec(description).ok()?;
        let metadata = serde_json::to_vec(metadata).ok()?;

        let mut hasher = Sha256::new();
        hasher.update(kind.as_bytes());
        hasher.update([0u8]);
        hasher.update(runtime_path.as_bytes());
        hasher.update([0u8]);
        hasher.update(&metadata);
        hasher.update([0u8]);
        hasher.update(&description);
        Some(format!("{:x}", hasher.finalize()))
    }

    /// Cached text for `key`, rendering and storing it on a miss.
    pub fn get_or_render(&self, key: Option<String>, render: impl FnOnce() -> String) -> String {
        let Some(key) = key else {
            return render();
        };
        if let Some(text) = self.entries.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(key = %key, "render cache hit");
            return text.value().clone();
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        let text = render();
        self.entries.insert(key, text.clone());
        text
    }

    /// Number of cached renders.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Nothing cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookups answered from the cache.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    /// Lookups that had to render.
    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries.clear();
    }
}
