// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Exhaustive mapping with default.
//!
//! Every per-variant dispatch in generated code (parse, stringify, label,
//! summary, remarks) is one `match` described as data:
//!
//! ```text
//! match <scrutinee> {
//!     <pattern> => <expression>,   one arm per entry, in order
//!     _ => <fallback>,             only when the arms are not exhaustive
//! }
//! ```
//!
//! Generated `match` expressions must compile without an unreachable
//! pattern warning, so the fallback is dropped once the caller marks the
//! arms as covering every case.

use super::SourceWriter;

/// Ordered `(pattern, expression)` arms plus a fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchTable {
    scrutinee:  String,
    arms:       Vec<(String, String)>,
    fallback:   Option<String>,
    exhaustive: bool
}

impl MatchTable {
    /// Table over `scrutinee`.
    pub fn new(scrutinee: impl Into<String>) -> Self {
        Self {
            scrutinee:  scrutinee.into(),
            arms:       Vec::new(),
            fallback:   None,
            exhaustive: false
        }
    }

    /// Append an arm.
    #[must_use]
    pub fn arm(mut self, pattern: impl Into<String>, expression: impl Into<String>) -> Self {
        self.arms.push((pattern.into(), expression.into()));
        self
    }

    /// Expression for everything the arms do not cover.
    #[must_use]
    pub fn fallback(mut self, expression: impl Into<String>) -> Self {
        self.fallback = Some(expression.into());
        self
    }

    /// Mark the arms as covering every possible value.
    #[must_use]
    pub fn exhaustive(mut self, exhaustive: bool) -> Self {
        self.exhaustive = exhaustive;
        self
    }

    /// Write the `match` expression.
    pub fn write(&self, w: &mut SourceWriter) {
        w.open(format!("match {}", self.scrutinee));
        for (pattern, expression) in &self.arms {
            w.line(format!("{pattern} => {expression},"));
        }
        if !self.exhaustive
            && let Some(fallback) = &self.fallback
        {
            w.line(format!("_ => {fallback},"));
        }
        w.close();
    }
}
