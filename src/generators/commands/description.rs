// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use serde::Serialize;

/// One lazily created command bound to a handler method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandDescription {
    /// Owning type name.
    pub owner:            String,
    /// Handler method called by `execute`.
    pub execute_method:   String,
    /// Generated associated function, e.g. `save_command`.
    pub command_property: String,
    /// Fully qualified wrapper type, generics included.
    pub wrapper_type:     String,
    /// Predicate method called by `can_execute`.
    pub can_execute:      Option<String>,
    /// Handler documentation, copied onto the command.
    pub leading_comment:  Option<String>
}

/// Commands of one owning type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandGroup {
    /// Owning type name.
    pub owner:       String,
    /// Module that declares the owner.
    pub module_path: String,
    /// Commands in method order.
    pub commands:    Vec<CommandDescription>
}

impl CommandGroup {
    /// Artifact name, `{owner}.commands.g`.
    #[must_use]
    pub fn artifact_name(&self) -> String {
        format!("{}.commands.g", self.owner)
    }

    /// Qualified source path for the header.
    #[must_use]
    pub fn source_path(&self) -> String {
        format!("{}::{}", self.module_path, self.owner)
    }
}
