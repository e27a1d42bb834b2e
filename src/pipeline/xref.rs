// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Cross-reference resolution between sibling declarations.
//!
//! A command handler may be guarded by a predicate on the same type. The
//! predicate is found by the first strategy that applies:
//!
//! 1. **Explicit** - `#[command(can_execute = can_save)]` names it. The
//!    method must exist and be `fn(&self) -> bool`.
//! 2. **Convention** - a method named `can_{command}_execute` that takes only
//!    `&self`, returns `bool` and carries a command marker itself.
//! 3. **Fallback** - the single `fn(&self) -> bool` whose command marker
//!    declares the same command name, e.g.
//!    `#[command(name = "save_command")] fn allowed(&self) -> bool`.
//!
//! Member names are compared in snake case, so `CanSaveExecute` and
//! `can_save_execute` are the same name.

use thiserror::Error;

use super::{DiagnosticDescriptor, Severity};
use crate::{
    model::{DeclarationModel, MarkerMatcher, MethodDecl, Receiver, TypeDecl, TypeKey},
    utils::naming
};

const CATEGORY: &str = "Command";

/// Explicit predicate names no method of the owner.
pub const MISSING_PREDICATE: DiagnosticDescriptor = DiagnosticDescriptor {
    id:       "CMD0001",
    title:    "Predicate not found",
    category: CATEGORY,
    severity: Severity::Error
};

/// Explicit predicate has the wrong signature.
pub const INCOMPATIBLE_PREDICATE: DiagnosticDescriptor = DiagnosticDescriptor {
    id:       "CMD0002",
    title:    "Predicate has an incompatible signature",
    category: CATEGORY,
    severity: Severity::Error
};

/// Wrapper type unknown or lacking the command capability.
pub const WRAPPER_CAPABILITY: DiagnosticDescriptor = DiagnosticDescriptor {
    id:       "CMD0003",
    title:    "Wrapper does not satisfy the command capability",
    category: CATEGORY,
    severity: Severity::Error
};

/// Several fallback candidates declare the same command.
pub const AMBIGUOUS_PREDICATE: DiagnosticDescriptor = DiagnosticDescriptor {
    id:       "CMD0005",
    title:    "Ambiguous predicate",
    category: CATEGORY,
    severity: Severity::Warning
};

/// Why a cross reference could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XrefError {
    /// Explicit predicate does not exist on the owner.
    #[error("`{owner}` has no method `{name}` to use as the predicate of `{command}`")]
    MissingPredicate {
        /// Owning type.
        owner:   String,
        /// Name given in the marker.
        name:    String,
        /// Command being linked.
        command: String
    },

    /// Explicit predicate exists but is not `fn(&self) -> bool`.
    #[error("predicate `{name}` of `{command}` must be `fn(&self) -> bool`")]
    IncompatiblePredicate {
        /// Predicate method.
        name:    String,
        /// Command being linked.
        command: String
    },

    /// Fallback scan found more than one candidate.
    #[error("predicate of `{command}` is ambiguous between {}; none is used", .candidates.join(", "))]
    AmbiguousPredicate {
        /// Command being linked.
        command:    String,
        /// Matching methods, quoted.
        candidates: Vec<String>
    },

    /// Wrapper type is not declared in the corpus.
    #[error("wrapper type `{wrapper}` is not declared")]
    UnknownWrapper {
        /// Path as written.
        wrapper: String
    },

    /// Wrapper type does not implement the capability trait.
    #[error("wrapper type `{wrapper}` does not implement `{capability}`")]
    MissingCapability {
        /// Resolved wrapper type.
        wrapper:    String,
        /// Required trait.
        capability: String
    }
}

impl XrefError {
    /// Diagnostic kind for this failure.
    #[must_use]
    pub fn descriptor(&self) -> &'static DiagnosticDescriptor {
        match self {
            Self::MissingPredicate { .. } => &MISSING_PREDICATE,
            Self::IncompatiblePredicate { .. } => &INCOMPATIBLE_PREDICATE,
            Self::AmbiguousPredicate { .. } => &AMBIGUOUS_PREDICATE,
            Self::UnknownWrapper { .. } | Self::MissingCapability { .. } => &WRAPPER_CAPABILITY
        }
    }

    /// Whether the command should be skipped.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.descriptor().severity == Severity::Error
    }
}

fn is_predicate_shape(method: &MethodDecl) -> bool {
    method.receiver == Receiver::Ref && method.params == 1 && method.returns_bool()
}

/// Resolve the predicate of `command` on `owner`.
///
/// `family` recognizes command markers on the candidate predicates.
///
/// # Errors
///
/// Returns an [`XrefError`] when an explicit predicate is missing or has the
/// wrong shape, or when the fallback scan is ambiguous.
pub fn resolve_predicate<'m>(
    model: &'m dyn DeclarationModel,
    owner: &TypeKey,
    command: &str,
    explicit: Option<&str>,
    family: &MarkerMatcher
) -> Result<Option<&'m MethodDecl>, XrefError> {
    let methods = model.methods_of(owner);

    if let Some(name) = explicit {
        let wanted = naming::normalize(name);
        let Some(method) = methods
            .iter()
            .copied()
            .find(|m| naming::normalize(&m.name) == wanted)
        else {
            return Err(XrefError::MissingPredicate {
                owner:   owner.to_string(),
                name:    name.to_string(),
                command: command.to_string()
            });
        };
        if !is_predicate_shape(method) {
            return Err(XrefError::IncompatiblePredicate {
                name:    method.name.clone(),
                command: command.to_string()
            });
        }
        return Ok(Some(method));
    }

    let conventional = naming::predicate_name(command);
    if let Some(method) = methods.iter().copied().find(|m| {
        naming::normalize(&m.name) == conventional
            && is_predicate_shape(m)
            && family.any(&m.markers)
    }) {
        return Ok(Some(method));
    }

    let wanted = naming::normalize(command);
    let declared: Vec<&MethodDecl> = methods
        .iter()
        .copied()
        .filter(|m| is_predicate_shape(m))
        .filter(|m| {
            family
                .select(&m.markers)
                .filter_map(|marker| marker.name_arg("name"))
                .any(|name| naming::normalize(name) == wanted)
        })
        .collect();

    match declared.as_slice() {
        [] => Ok(None),
        [only] => Ok(Some(*only)),
        many => Err(XrefError::AmbiguousPredicate {
            command:    command.to_string(),
            candidates: many.iter().map(|m| format!("`{}`", m.name)).collect()
        })
    }
}

/// Resolve a wrapper type written in module `scope` and check its
/// capability.
///
/// # Errors
///
/// Returns an [`XrefError`] when the type is unknown or does not implement
/// `capability`.
pub fn check_wrapper<'m>(
    model: &'m dyn DeclarationModel,
    scope: &str,
    wrapper: &str,
    capability: &str
) -> Result<&'m TypeDecl, XrefError> {
    let ty = model
        .find_type(scope, wrapper)
        .ok_or_else(|| XrefError::UnknownWrapper {
            wrapper: wrapper.to_string()
        })?;
    if !model.implements(&ty.key, capability) {
        return Err(XrefError::MissingCapability {
            wrapper:    ty.key.to_string(),
            capability: capability.to_string()
        });
    }
    Ok(ty)
}
