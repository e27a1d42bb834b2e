// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use serde::Serialize;

/// One generated accessor pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDescription {
    /// Owning type name.
    pub owner:                   String,
    /// Backing field as declared.
    pub field_name:              String,
    /// Derived or explicit property name, e.g. `UserName`.
    pub property_name:           String,
    /// Getter identifier and notification key, e.g. `user_name`.
    pub accessor:                String,
    /// Field type as written.
    pub declared_type:           String,
    /// Copied from the owning group.
    pub requires_infrastructure: bool,
    /// Field documentation, copied onto the getter.
    pub leading_comment:         Option<String>
}

impl PropertyDescription {
    /// Setter identifier, e.g. `set_user_name`.
    #[must_use]
    pub fn setter(&self) -> String {
        crate::utils::naming::setter_name(&self.accessor)
    }
}

/// Accessors of one owning type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyGroup {
    /// Owning type name.
    pub owner:                   String,
    /// Module that declares the owner.
    pub module_path:             String,
    /// Setters raise change notifications.
    pub observable:              bool,
    /// The owner needs the generated `NotifyPropertyChanged` impl.
    pub requires_infrastructure: bool,
    /// Field holding the event, when infrastructure is required.
    pub event_field:             Option<String>,
    /// Qualified path of the change-notification trait.
    pub notify_trait:            String,
    /// Qualified path of the event type.
    pub event_type:              String,
    /// Accessors in field order.
    pub properties:              Vec<PropertyDescription>
}

impl PropertyGroup {
    /// Artifact name of the accessors, `{owner}.properties.g`.
    #[must_use]
    pub fn artifact_name(&self) -> String {
        format!("{}.properties.g", self.owner)
    }

    /// Artifact name of the infrastructure, `{owner}.NotifyPropertyChanged.g`.
    #[must_use]
    pub fn infrastructure_name(&self) -> String {
        format!("{}.NotifyPropertyChanged.g", self.owner)
    }

    /// Qualified source path for headers.
    #[must_use]
    pub fn source_path(&self) -> String {
        format!("{}::{}", self.module_path, self.owner)
    }
}
