// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Markers and marker matching.
//!
//! A [`Marker`] is the parser-independent form of an attribute:
//!
//! ```text
//! #[command(name = "save", can_execute = can_save, wrapper = ui::Cmd)]
//!   ^^^^^^^ ^^^^^^^^^^^^^  ^^^^^^^^^^^^^^^^^^^^^^  ^^^^^^^^^^^^^^^^^
//!   name    Str            Path                    Path
//! ```
//!
//! Named arguments keep declaration order. Positional literals (as in
//! `#[description("Red")]`) are stored separately.

use serde::{Deserialize, Serialize};

use super::Location;

/// Literal or path value of a marker argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerValue {
    /// String literal.
    Str(String),
    /// Boolean literal or bare flag.
    Bool(bool),
    /// Integer literal.
    Int(i128),
    /// Identifier or type path, rendered with `::` separators.
    Path(String)
}

impl MarkerValue {
    /// Text of a string or path value.
    ///
    /// Member references may be written either way:
    /// `can_execute = "can_save"` or `can_execute = can_save`.
    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Str(s) | Self::Path(s) => Some(s),
            Self::Bool(_) | Self::Int(_) => None
        }
    }

    /// Boolean value, if this is one.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None
        }
    }

    /// String literal content, if this is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None
        }
    }
}

/// An attribute attached to a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    /// Last path segment of the attribute.
    pub name:       String,
    /// Named arguments in declaration order.
    pub args:       Vec<(String, MarkerValue)>,
    /// Positional literal arguments.
    pub positional: Vec<MarkerValue>,
    /// Where the attribute is written.
    pub location:   Location,
    /// The argument list could not be parsed.
    pub malformed:  bool
}

impl Marker {
    /// Marker without arguments.
    pub fn new(name: impl Into<String>, location: Location) -> Self {
        Self {
            name:       name.into(),
            args:       Vec::new(),
            positional: Vec::new(),
            location,
            malformed:  false
        }
    }

    /// Add a named argument.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: MarkerValue) -> Self {
        self.args.push((key.into(), value));
        self
    }

    /// Add a positional argument.
    #[must_use]
    pub fn with_positional(mut self, value: MarkerValue) -> Self {
        self.positional.push(value);
        self
    }

    /// First named argument called `key`.
    #[must_use]
    pub fn arg(&self, key: &str) -> Option<&MarkerValue> {
        self.args
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    /// Named argument as a member or type name.
    #[must_use]
    pub fn name_arg(&self, key: &str) -> Option<&str> {
        self.arg(key).and_then(MarkerValue::as_name)
    }

    /// Named boolean argument, `default` when absent or not a bool.
    #[must_use]
    pub fn bool_arg(&self, key: &str, default: bool) -> bool {
        self.arg(key)
            .and_then(MarkerValue::as_bool)
            .unwrap_or(default)
    }

    /// First positional string literal.
    #[must_use]
    pub fn first_str(&self) -> Option<&str> {
        self.positional.iter().find_map(MarkerValue::as_str)
    }
}

/// Attribute-name comparison strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Attribute name equals the marker name or an alias.
    #[default]
    Exact,
    /// Attribute name contains the marker name or an alias.
    Substring
}

/// Decides whether an attribute name belongs to a marker family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerMatcher {
    names: Vec<String>,
    mode:  MatchMode
}

impl MarkerMatcher {
    /// Matcher for `name` plus `aliases`.
    pub fn new(name: &str, aliases: &[String], mode: MatchMode) -> Self {
        let mut names = Vec::with_capacity(aliases.len() + 1);
        names.push(name.to_string());
        names.extend(aliases.iter().filter(|a| !a.is_empty()).cloned());
        Self {
            names,
            mode
        }
    }

    /// Exact matcher for a single name.
    pub fn exact(name: &str) -> Self {
        Self::new(name, &[], MatchMode::Exact)
    }

    /// Whether `attribute_name` belongs to this family.
    #[must_use]
    pub fn matches(&self, attribute_name: &str) -> bool {
        match self.mode {
            MatchMode::Exact => self.names.iter().any(|n| n == attribute_name),
            MatchMode::Substring => self
                .names
                .iter()
                .any(|n| !n.is_empty() && attribute_name.contains(n.as_str()))
        }
    }

    /// Markers of this family, in attachment order.
    pub fn select<'m>(&self, markers: &'m [Marker]) -> impl Iterator<Item = &'m Marker> {
        markers.iter().filter(move |m| self.matches(&m.name))
    }

    /// Whether any marker belongs to this family.
    #[must_use]
    pub fn any(&self, markers: &[Marker]) -> bool {
        self.select(markers).next().is_some()
    }

    /// Canonical marker name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.names[0]
    }
}
