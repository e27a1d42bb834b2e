// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Declaration records.
//!
//! Two layers describe the corpus:
//!
//! | Layer | Type | Cost |
//! |-------|------|------|
//! | Syntax | [`SyntaxDecl`] | Name, kind and attribute names only |
//! | Semantic | [`TypeDecl`], [`MethodDecl`] | Members, markers, docs, owner |
//!
//! The filter only ever sees the syntax layer. Candidates that pass are
//! resolved into the semantic layer through
//! [`DeclarationModel::resolve`](super::DeclarationModel::resolve).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Marker;

/// Source position of a declaration or attribute.
///
/// Lines and columns are 1-based. Ordering is by file, then line, then
/// column, which is the order diagnostics are reported in.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Location {
    /// File path as given to the corpus.
    pub file:   String,
    /// 1-based line.
    pub line:   usize,
    /// 1-based column.
    pub column: usize
}

impl Location {
    /// Create a location.
    pub fn new(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Fully qualified type path, e.g. `crate::ui::Color`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeKey(String);

impl TypeKey {
    /// Key for `name` declared in `module_path`.
    pub fn new(module_path: &str, name: &str) -> Self {
        if module_path.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{module_path}::{name}"))
        }
    }

    /// Key from an already qualified path.
    pub fn from_qualified(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Qualified path text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of a syntactic declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclKind {
    /// `enum` item.
    Enum,
    /// `struct` item.
    Struct,
    /// Method inside an inherent `impl` block.
    Method,
    /// Struct field.
    Field,
    /// Enum variant.
    Variant
}

/// Adapter-assigned handle of a syntactic declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeclId(pub usize);

/// Syntax-only view used by the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxDecl {
    /// Handle for [`DeclarationModel::resolve`](super::DeclarationModel::resolve).
    pub id:              DeclId,
    /// Declaration kind.
    pub kind:            DeclKind,
    /// Identifier as written (`_` for unnamed fields).
    pub name:            String,
    /// Last path segment of every attached attribute, in order.
    pub attribute_names: Vec<String>,
    /// Declaration position.
    pub location:        Location
}

/// An enum variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantDecl {
    /// Variant identifier.
    pub name:         String,
    /// Explicit discriminant expression.
    pub discriminant: Option<String>,
    /// Variant carries tuple or struct data.
    pub has_fields:   bool,
    /// Attached markers.
    pub markers:      Vec<Marker>,
    /// Raw documentation text with comment markers stripped.
    pub docs:         Option<String>,
    /// Variant position.
    pub location:     Location
}

/// A struct field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    /// Field identifier, `None` for tuple fields.
    pub name:     Option<String>,
    /// Position among the struct's fields.
    pub index:    usize,
    /// Field type, compactly printed.
    pub ty:       String,
    /// Attached markers.
    pub markers:  Vec<Marker>,
    /// Raw documentation text.
    pub docs:     Option<String>,
    /// Field position.
    pub location: Location
}

/// Members of a type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeShape {
    /// Enum variants in declaration order.
    Enum(Vec<VariantDecl>),
    /// Struct fields in declaration order.
    Struct(Vec<FieldDecl>)
}

/// A resolved type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    /// Qualified path.
    pub key:         TypeKey,
    /// Type identifier.
    pub name:        String,
    /// Containing module path.
    pub module_path: String,
    /// Visibility as written (`pub`, `pub(crate)`, empty for private).
    pub visibility:  String,
    /// Variants or fields.
    pub shape:       TypeShape,
    /// Declared with generic parameters.
    pub generic:     bool,
    /// Attached markers.
    pub markers:     Vec<Marker>,
    /// Raw documentation text.
    pub docs:        Option<String>,
    /// Type position.
    pub location:    Location
}

impl TypeDecl {
    /// Variants, if this is an enum.
    #[must_use]
    pub fn variants(&self) -> Option<&[VariantDecl]> {
        match &self.shape {
            TypeShape::Enum(variants) => Some(variants),
            TypeShape::Struct(_) => None
        }
    }

    /// Fields, if this is a struct.
    #[must_use]
    pub fn fields(&self) -> Option<&[FieldDecl]> {
        match &self.shape {
            TypeShape::Struct(fields) => Some(fields),
            TypeShape::Enum(_) => None
        }
    }
}

/// How a method takes `self`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Receiver {
    /// Associated function.
    None,
    /// `&self`.
    Ref,
    /// `&mut self`.
    RefMut,
    /// `self`.
    Value
}

/// A method from an inherent `impl` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDecl {
    /// Owning type.
    pub owner:       TypeKey,
    /// Method identifier.
    pub name:        String,
    /// Receiver kind.
    pub receiver:    Receiver,
    /// Parameter count including the receiver.
    pub params:      usize,
    /// Return type, `None` for unit.
    pub return_type: Option<String>,
    /// Attached markers.
    pub markers:     Vec<Marker>,
    /// Raw documentation text.
    pub docs:        Option<String>,
    /// Method position.
    pub location:    Location
}

impl MethodDecl {
    /// Takes only the receiver.
    #[must_use]
    pub fn is_receiver_only(&self) -> bool {
        self.receiver != Receiver::None && self.params == 1
    }

    /// Returns `bool`.
    #[must_use]
    pub fn returns_bool(&self) -> bool {
        self.return_type.as_deref() == Some("bool")
    }

    /// Returns unit.
    #[must_use]
    pub fn returns_unit(&self) -> bool {
        self.return_type.is_none()
    }
}

/// Semantic form of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    /// Enum or struct.
    Type(&'a TypeDecl),
    /// Struct field and its owner.
    Field {
        /// Owning struct.
        owner: &'a TypeDecl,
        /// The field.
        field: &'a FieldDecl
    },
    /// Enum variant and its owner.
    Variant {
        /// Owning enum.
        owner:   &'a TypeDecl,
        /// The variant.
        variant: &'a VariantDecl
    },
    /// Inherent method.
    Method(&'a MethodDecl)
}
