// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Cooperative cancellation.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering}
};

use crate::error::{Result, SynthError};

/// Cloneable cancellation flag checked between declarations.
///
/// Clones share the flag, so the host keeps one clone and hands another to
/// the pipeline.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>
}

impl CancellationToken {
    /// Token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Whether cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// `Err(Cancelled)` once cancellation was requested.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::Cancelled`] after [`cancel`](Self::cancel).
    pub fn checkpoint(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(SynthError::Cancelled)
        } else {
            Ok(())
        }
    }
}
