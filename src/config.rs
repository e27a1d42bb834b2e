// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Pipeline configuration.
//!
//! Configuration is layered with `figment`:
//!
//! ```text
//! defaults (SynthConfig::default)
//!     └── TOML file           (SynthConfig::load)
//!         └── DECLSYNTH_* env (nested keys split on "__")
//! ```
//!
//! # Example
//!
//! ```toml
//! runtime_path = "crate::mvvm"
//! match_mode = "exact"
//!
//! [markers.command]
//! name = "command"
//! aliases = ["cmd"]
//!
//! [generators]
//! enums = true
//! properties = true
//! commands = false
//! ```

use std::path::Path;

use chrono::Utc;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml}
};
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    model::{MarkerMatcher, MatchMode}
};

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "DECLSYNTH_";

/// Complete pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    /// Module path where the runtime artifacts are included.
    ///
    /// Generated code refers to runtime types through this path, e.g.
    /// `crate::synth::RelayCommand`.
    pub runtime_path: String,

    /// How attribute names are compared with marker names.
    pub match_mode: MatchMode,

    /// Marker names and aliases per generator family.
    pub markers: MarkerNames,

    /// Names of the runtime capability traits and types.
    pub capabilities: Capabilities,

    /// Which generators run.
    pub generators: Generators
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            runtime_path: "crate::synth".to_string(),
            match_mode:   MatchMode::default(),
            markers:      MarkerNames::default(),
            capabilities: Capabilities::default(),
            generators:   Generators::default()
        }
    }
}

/// A marker name plus accepted aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerSpec {
    /// Canonical attribute name (last path segment).
    pub name: String,

    /// Additional attribute names treated as the same marker.
    #[serde(default)]
    pub aliases: Vec<String>
}

impl MarkerSpec {
    /// Marker recognised under `name` only.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:    name.into(),
            aliases: Vec::new()
        }
    }

    /// Build a matcher for this marker.
    #[must_use]
    pub fn matcher(&self, mode: MatchMode) -> MarkerMatcher {
        MarkerMatcher::new(&self.name, &self.aliases, mode)
    }
}

/// Marker names for each generator family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerNames {
    /// Marks an enum for extension-trait synthesis.
    pub enum_transform:  MarkerSpec,
    /// Attaches a short label to an enum variant.
    pub description:     MarkerSpec,
    /// Marks a struct field as an observable property.
    pub notify_property: MarkerSpec,
    /// Marks a method as a command handler or predicate.
    pub command:         MarkerSpec
}

impl Default for MarkerNames {
    fn default() -> Self {
        Self {
            enum_transform:  MarkerSpec::new("enum_transform"),
            description:     MarkerSpec::new("description"),
            notify_property: MarkerSpec::new("notify_property"),
            command:         MarkerSpec::new("command")
        }
    }
}

/// Capability names checked against the corpus and used by generated code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    /// Change-notification trait.
    pub notify:     String,
    /// Event storage type an observable owner must hold.
    pub event_type: String,
    /// Command trait a custom wrapper must implement.
    pub command:    String
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            notify:     "NotifyPropertyChanged".to_string(),
            event_type: "PropertyChangedEvent".to_string(),
            command:    "Command".to_string()
        }
    }
}

/// Generator toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Generators {
    /// Enum extension traits.
    pub enums:      bool,
    /// Observable property accessors.
    pub properties: bool,
    /// Command bindings.
    pub commands:   bool
}

impl Default for Generators {
    fn default() -> Self {
        Self {
            enums:      true,
            properties: true,
            commands:   true
        }
    }
}

impl SynthConfig {
    /// Figment seeded with the built-in defaults.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
    }

    /// Load defaults, then `path`, then `DECLSYNTH_*` environment overrides.
    ///
    /// A missing file is not an error; figment treats it as empty.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::Config`](crate::SynthError::Config) when a
    /// source cannot be parsed or a value has the wrong type.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::figment()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        Ok(config)
    }

    /// Load from an in-memory TOML document on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::Config`](crate::SynthError::Config) on invalid
    /// TOML or mistyped values.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let config = Self::figment().merge(Toml::string(toml)).extract()?;
        Ok(config)
    }

    /// Fully qualified path of a runtime item, e.g. `crate::synth::Command`.
    #[must_use]
    pub fn runtime_item(&self, item: &str) -> String {
        crate::render::runtime_item(&self.runtime_path, item)
    }
}

/// Build information stamped into artifact headers.
///
/// Injected into the renderer instead of read from the clock so that output
/// can be made byte-reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildMetadata {
    /// Tool name.
    pub tool:      String,
    /// Tool version.
    pub version:   String,
    /// Generation time, omitted from headers when `None`.
    pub timestamp: Option<String>
}

impl BuildMetadata {
    /// Metadata without a timestamp.
    #[must_use]
    pub fn reproducible() -> Self {
        Self {
            tool:      env!("CARGO_PKG_NAME").to_string(),
            version:   env!("CARGO_PKG_VERSION").to_string(),
            timestamp: None
        }
    }

    /// Metadata stamped with the current UTC time.
    #[must_use]
    pub fn current() -> Self {
        Self::reproducible().with_timestamp(Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string())
    }

    /// Replace the timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }
}

impl Default for BuildMetadata {
    fn default() -> Self {
        Self::reproducible()
    }
}
