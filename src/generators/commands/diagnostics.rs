// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use crate::pipeline::{DiagnosticDescriptor, Severity};

const CATEGORY: &str = "Command";

/// Command handler has no receiver.
pub const STATIC_HANDLER: DiagnosticDescriptor = DiagnosticDescriptor {
    id:       "CMD0004",
    title:    "Command handler has no receiver",
    category: CATEGORY,
    severity: Severity::Warning
};

/// Command handler takes parameters.
pub const HANDLER_PARAMETERS: DiagnosticDescriptor = DiagnosticDescriptor {
    id:       "CMD0006",
    title:    "Command handler takes parameters",
    category: CATEGORY,
    severity: Severity::Error
};

/// Duplicate command marker.
pub const DUPLICATE_MARKER: DiagnosticDescriptor = DiagnosticDescriptor {
    id:       "CMD0007",
    title:    "Duplicate command marker",
    category: CATEGORY,
    severity: Severity::Error
};

/// Duplicate command.
pub const DUPLICATE_COMMAND: DiagnosticDescriptor = DiagnosticDescriptor {
    id:       "CMD0008",
    title:    "Duplicate command",
    category: CATEGORY,
    severity: Severity::Error
};

/// Generic owner type is not supported.
pub const GENERIC_OWNER: DiagnosticDescriptor = DiagnosticDescriptor {
    id:       "CMD0009",
    title:    "Generic owner type is not supported",
    category: CATEGORY,
    severity: Severity::Warning
};

/// Invalid command name.
pub const INVALID_COMMAND_NAME: DiagnosticDescriptor = DiagnosticDescriptor {
    id:       "CMD0010",
    title:    "Invalid command name",
    category: CATEGORY,
    severity: Severity::Error
};

/// Command handler returns a value.
pub const NON_UNIT_HANDLER: DiagnosticDescriptor = DiagnosticDescriptor {
    id:       "CMD0011",
    title:    "Command handler returns a value",
    category: CATEGORY,
    severity: Severity::Error
};
