// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use crate::pipeline::{DiagnosticDescriptor, Severity};

const CATEGORY: &str = "NotifyProperty";

/// Duplicate notify_property marker.
pub const DUPLICATE_MARKER: DiagnosticDescriptor = DiagnosticDescriptor {
    id:       "PROP0001",
    title:    "Duplicate notify_property marker",
    category: CATEGORY,
    severity: Severity::Error
};

/// Marker on an unnamed field.
pub const UNNAMED_FIELD: DiagnosticDescriptor = DiagnosticDescriptor {
    id:       "PROP0002",
    title:    "Marker on an unnamed field",
    category: CATEGORY,
    severity: Severity::Error
};

/// Invalid property name.
pub const INVALID_PROPERTY_NAME: DiagnosticDescriptor = DiagnosticDescriptor {
    id:       "PROP0003",
    title:    "Invalid property name",
    category: CATEGORY,
    severity: Severity::Error
};

/// Observable owner lacks an event field.
pub const MISSING_EVENT_FIELD: DiagnosticDescriptor = DiagnosticDescriptor {
    id:       "PROP0004",
    title:    "Observable owner lacks an event field",
    category: CATEGORY,
    severity: Severity::Error
};

/// Duplicate property.
pub const DUPLICATE_PROPERTY: DiagnosticDescriptor = DiagnosticDescriptor {
    id:       "PROP0005",
    title:    "Duplicate property",
    category: CATEGORY,
    severity: Severity::Error
};

/// Generic owner type is not supported.
pub const GENERIC_OWNER: DiagnosticDescriptor = DiagnosticDescriptor {
    id:       "PROP0006",
    title:    "Generic owner type is not supported",
    category: CATEGORY,
    severity: Severity::Warning
};
