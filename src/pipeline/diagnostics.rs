// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Diagnostics sink.
//!
//! Every per-declaration failure is reported here instead of being returned
//! as an error. Reports carry a stable id scoped by generator family so that
//! tooling can filter or suppress them:
//!
//! | Prefix | Family |
//! |--------|--------|
//! | `SYNTH` | Shared marker handling |
//! | `ENUM` | Enum extensions |
//! | `PROP` | Observable properties |
//! | `CMD` | Command bindings |
//!
//! The sink is append-only and safe to share between worker threads.
//! [`DiagnosticSink::finish`] returns the reports in a stable order so that
//! two runs over the same corpus produce identical lists.

use std::{
    fmt,
    sync::{Mutex, PoisonError}
};

use serde::Serialize;
use tracing::debug;

use crate::model::Location;

/// Report severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Generation proceeds.
    Warning,
    /// The affected item is skipped.
    Error
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error")
        }
    }
}

/// Static description of one diagnostic kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticDescriptor {
    /// Stable id, e.g. `CMD0003`.
    pub id:       &'static str,
    /// Short title.
    pub title:    &'static str,
    /// Category used for grouping.
    pub category: &'static str,
    /// Severity.
    pub severity: Severity
}

/// Marker arguments could not be parsed.
pub const MALFORMED_MARKER: DiagnosticDescriptor = DiagnosticDescriptor {
    id:       "SYNTH0001",
    title:    "Malformed marker arguments",
    category: "Markers",
    severity: Severity::Error
};

/// Two declarations produce artifacts with the same name.
pub const DUPLICATE_ARTIFACT: DiagnosticDescriptor = DiagnosticDescriptor {
    id:       "SYNTH0002",
    title:    "Duplicate artifact name",
    category: "Output",
    severity: Severity::Error
};

/// One report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Diagnostic {
    /// Stable id.
    pub id:       &'static str,
    /// Short title.
    pub title:    &'static str,
    /// Category.
    pub category: &'static str,
    /// Severity.
    pub severity: Severity,
    /// Human readable message.
    pub message:  String,
    /// Offending source position.
    pub location: Location
}

impl Diagnostic {
    /// Build a report from a descriptor.
    pub fn new(
        descriptor: &DiagnosticDescriptor,
        location: &Location,
        message: impl Into<String>
    ) -> Self {
        Self {
            id:       descriptor.id,
            title:    descriptor.title,
            category: descriptor.category,
            severity: descriptor.severity,
            message:  message.into(),
            location: location.clone()
        }
    }

    /// Whether this report is an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}[{}]: {}",
            self.location, self.severity, self.id, self.message
        )
    }
}

/// Thread-safe, append-only report list.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    reports: Mutex<Vec<Diagnostic>>
}

impl DiagnosticSink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a report.
    pub fn report(&self, diagnostic: Diagnostic) {
        debug!(
            id = diagnostic.id,
            location = %diagnostic.location,
            "{}",
            diagnostic.message
        );
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }

    /// Build and append a report.
    pub fn emit(
        &self,
        descriptor: &DiagnosticDescriptor,
        location: &Location,
        message: impl Into<String>
    ) {
        self.report(Diagnostic::new(descriptor, location, message));
    }

    /// Number of reports so far.
    pub fn len(&self) -> usize {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// No reports so far.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take the reports sorted by location, id and message.
    pub fn finish(self) -> Vec<Diagnostic> {
        let mut reports = self
            .reports
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        reports.sort_by(|a, b| {
            a.location
                .cmp(&b.location)
                .then_with(|| a.id.cmp(b.id))
                .then_with(|| a.message.cmp(&b.message))
        });
        reports
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    const SAMPLE: DiagnosticDescriptor = DiagnosticDescriptor {
        id:       "TEST0001",
        title:    "Sample",
        category: "Tests",
        severity: Severity::Warning
    };

    #[test]
    fn finish_sorts_by_location_then_id() {
        let sink = DiagnosticSink::new();
        sink.emit(&SAMPLE, &Location::new("b.rs", 1, 1), "late file");
        sink.emit(&MALFORMED_MARKER, &Location::new("a.rs", 9, 2), "second");
        sink.emit(&SAMPLE, &Location::new("a.rs", 9, 2), "first by id");
        sink.emit(&SAMPLE, &Location::new("a.rs", 2, 5), "early line");

        let ids: Vec<_> = sink
            .finish()
            .into_iter()
            .map(|d| (d.location.file, d.location.line, d.id))
            .collect();
        assert_eq!(
            ids,
            vec![
                ("a.rs".to_string(), 2, "TEST0001"),
                ("a.rs".to_string(), 9, "SYNTH0001"),
                ("a.rs".to_string(), 9, "TEST0001"),
                ("b.rs".to_string(), 1, "TEST0001"),
            ]
        );
    }

    #[test]
    fn concurrent_reports_are_all_kept() {
        let sink = DiagnosticSink::new();
        thread::scope(|scope| {
            for worker in 0..4 {
                let sink = &sink;
                scope.spawn(move || {
                    for line in 0..25 {
                        sink.emit(&SAMPLE, &Location::new("x.rs", line, worker), "x");
                    }
                });
            }
        });
        assert_eq!(sink.len(), 100);
    }

    #[test]
    fn display_includes_id_and_location() {
        let d = Diagnostic::new(&MALFORMED_MARKER, &Location::new("src/lib.rs", 3, 7), "bad args");
        assert_eq!(d.to_string(), "src/lib.rs:3:7: error[SYNTH0001]: bad args");
        assert!(d.is_error());
    }
}
