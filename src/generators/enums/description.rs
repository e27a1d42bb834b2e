// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use indexmap::IndexMap;
use serde::Serialize;

/// Per-variant metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MemberField {
    /// Variant name as written.
    pub value:       String,
    /// Label from the `description` marker.
    pub description: Option<String>,
    /// Summary from the variant documentation.
    pub summary:     Option<String>,
    /// Remarks from the variant documentation.
    pub remarks:     Option<String>
}

/// Everything needed to render one enum extension trait.
///
/// `members` is the only source of truth for which variants exist and in
/// which order. `descriptions` and `fields` are keyed by member name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumDescription {
    /// Enum name.
    pub name:           String,
    /// Module that declares the enum.
    pub module_path:    String,
    /// Visibility of the enum, mirrored by the trait.
    pub visibility:     String,
    /// Extension trait name, `{name}Ex` unless overridden.
    pub extension_name: String,
    /// Variant names in declaration order.
    pub members:        Vec<String>,
    /// Variant name to explicit label.
    pub descriptions:   IndexMap<String, String>,
    /// Variant name to metadata.
    pub fields:         IndexMap<String, MemberField>
}

impl EnumDescription {
    /// Artifact name, `{name}.g`.
    #[must_use]
    pub fn artifact_name(&self) -> String {
        format!("{}.g", self.name)
    }

    /// Qualified source path for the header.
    #[must_use]
    pub fn source_path(&self) -> String {
        format!("{}::{}", self.module_path, self.name)
    }

    /// Whether at least one member has a summary.
    #[must_use]
    pub fn has_summaries(&self) -> bool {
        self.fields.values().any(|f| f.summary.is_some())
    }

    /// Whether at least one member has remarks.
    #[must_use]
    pub fn has_remarks(&self) -> bool {
        self.fields.values().any(|f| f.remarks.is_some())
    }
}
