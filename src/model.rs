// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Parser-independent declaration model.
//!
//! The pipeline consumes the corpus only through [`DeclarationModel`]. The
//! crate ships one implementation, [`SynModel`](crate::corpus::SynModel),
//! but any host able to answer these queries can drive the generators.
//!
//! # Queries
//!
//! | Method | Purpose |
//! |--------|---------|
//! | [`syntax`](DeclarationModel::syntax) | Cheap view for the filter |
//! | [`resolve`](DeclarationModel::resolve) | Candidate to semantic record |
//! | [`type_decl`](DeclarationModel::type_decl) | Lookup by qualified path |
//! | [`methods_of`](DeclarationModel::methods_of) | Sibling enumeration |
//! | [`find_type`](DeclarationModel::find_type) | Type reference resolution |
//! | [`implements`](DeclarationModel::implements) | Capability query |

mod decl;
mod marker;

pub use decl::{
    DeclId, DeclKind, FieldDecl, Location, MethodDecl, Receiver, Resolved, SyntaxDecl, TypeDecl,
    TypeKey, TypeShape, VariantDecl
};
pub use marker::{Marker, MarkerMatcher, MarkerValue, MatchMode};

/// Read-only view of a declaration corpus.
///
/// Implementations must be immutable for the duration of a run; the
/// pipeline queries them from several threads at once.
pub trait DeclarationModel: Sync {
    /// Every syntactic declaration, in corpus order.
    fn syntax(&self) -> &[SyntaxDecl];

    /// Bind a candidate to its semantic record.
    ///
    /// `None` means the candidate cannot be bound (for example a method of
    /// a type missing from the corpus). Such candidates are dropped without
    /// a diagnostic.
    fn resolve(&self, candidate: &SyntaxDecl) -> Option<Resolved<'_>>;

    /// Type declared at `key`.
    fn type_decl(&self, key: &TypeKey) -> Option<&TypeDecl>;

    /// Inherent methods of `owner` across all `impl` blocks, in corpus order.
    fn methods_of(&self, owner: &TypeKey) -> Vec<&MethodDecl>;

    /// Resolve a type reference written inside module `scope`.
    fn find_type(&self, scope: &str, path: &str) -> Option<&TypeDecl>;

    /// Whether `ty` implements the trait named `capability`.
    ///
    /// Only the last path segment of `capability` is compared.
    fn implements(&self, ty: &TypeKey, capability: &str) -> bool;
}
