// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use crate::pipeline::{DiagnosticDescriptor, Severity};

const CATEGORY: &str = "EnumTransform";

/// Duplicate enum_transform marker.
pub const DUPLICATE_MARKER: DiagnosticDescriptor = DiagnosticDescriptor {
    id:       "ENUM0001",
    title:    "Duplicate enum_transform marker",
    category: CATEGORY,
    severity: Severity::Error
};

/// Variant carries data.
pub const DATA_VARIANT: DiagnosticDescriptor = DiagnosticDescriptor {
    id:       "ENUM0002",
    title:    "Variant carries data",
    category: CATEGORY,
    severity: Severity::Error
};

/// Invalid extension trait name.
pub const INVALID_EXTENSION_NAME: DiagnosticDescriptor = DiagnosticDescriptor {
    id:       "ENUM0003",
    title:    "Invalid extension trait name",
    category: CATEGORY,
    severity: Severity::Error
};

/// Generic enum is not supported.
pub const GENERIC_ENUM: DiagnosticDescriptor = DiagnosticDescriptor {
    id:       "ENUM0004",
    title:    "Generic enum is not supported",
    category: CATEGORY,
    severity: Severity::Warning
};

/// Duplicate description marker.
pub const DUPLICATE_DESCRIPTION: DiagnosticDescriptor = DiagnosticDescriptor {
    id:       "ENUM0005",
    title:    "Duplicate description marker",
    category: CATEGORY,
    severity: Severity::Warning
};
