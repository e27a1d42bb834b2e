// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Rust-source corpus adapter.
//!
//! [`SynModel`] parses a set of [`SourceFile`]s with `syn` and answers the
//! [`DeclarationModel`] queries the pipeline needs. It is the only part of
//! the crate that knows about `syn` parse trees.
//!
//! # What is collected
//!
//! | Item | Becomes |
//! |------|---------|
//! | `enum` | [`TypeDecl`] + one [`SyntaxDecl`] per variant |
//! | `struct` | [`TypeDecl`] + one [`SyntaxDecl`] per field |
//! | inherent `impl` | [`MethodDecl`] per associated function |
//! | trait `impl`, `#[derive]` | capability facts for [`implements`](DeclarationModel::implements) |
//! | inline `mod x { .. }` | items collected under `module::x` |
//!
//! Files that fail to parse are skipped and listed in
//! [`SynModel::parse_failures`]; they never abort a run.
//!
//! # Type references
//!
//! `use` declarations are not tracked. A reference is resolved in this order:
//! absolute (`crate::a::T`), relative to the current module (`self::`,
//! `super::`, `a::T`), then, for single identifiers, the unique type of that
//! name in the corpus.

mod source;
mod walker;

use std::{
    collections::{HashMap, HashSet},
    path::PathBuf
};

pub use source::{SourceFile, module_path_for};

use crate::{
    model::{
        DeclarationModel, MethodDecl, Resolved, SyntaxDecl, TypeDecl, TypeKey
    },
    utils::tokens::last_segment
};

/// A corpus file that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    /// File path.
    pub path:    PathBuf,
    /// Parser message.
    pub message: String
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Type(usize),
    Field { ty: usize, index: usize },
    Variant { ty: usize, index: usize },
    Method(usize),
    Unresolved
}

/// [`DeclarationModel`] over `syn` parse trees.
#[derive(Debug, Default)]
pub struct SynModel {
    syntax:           Vec<SyntaxDecl>,
    targets:          Vec<Target>,
    types:            Vec<TypeDecl>,
    by_key:           HashMap<TypeKey, usize>,
    by_name:          HashMap<String, Vec<usize>>,
    methods:          Vec<MethodDecl>,
    methods_by_owner: HashMap<TypeKey, Vec<usize>>,
    capabilities:     HashSet<(TypeKey, String)>,
    parse_failures:   Vec<ParseFailure>
}

impl SynModel {
    /// Parse every file into one model.
    pub fn from_files(files: &[SourceFile]) -> Self {
        walker::build(files)
    }

    /// Model of a single in-memory crate root.
    pub fn from_source(text: &str) -> Self {
        Self::from_files(&[SourceFile::new("lib.rs", "crate", text)])
    }

    /// Files skipped because they did not parse.
    pub fn parse_failures(&self) -> &[ParseFailure] {
        &self.parse_failures
    }

    /// All collected type declarations, in corpus order.
    pub fn types(&self) -> &[TypeDecl] {
        &self.types
    }

    fn lookup(&self, qualified: &str) -> Option<&TypeDecl> {
        self.by_key
            .get(&TypeKey::from_qualified(qualified))
            .map(|&i| &self.types[i])
    }

    fn unique_by_name(&self, name: &str) -> Option<&TypeDecl> {
        match self.by_name.get(name).map(Vec::as_slice) {
            Some([only]) => Some(&self.types[*only]),
            _ => None
        }
    }
}

fn parent_module(scope: &str) -> Option<&str> {
    scope.rsplit_once("::").map(|(parent, _)| parent)
}

fn join(base: &str, rest: &[&str]) -> String {
    let mut out = base.to_string();
    for segment in rest {
        if !out.is_empty() {
            out.push_str("::");
        }
        out.push_str(segment);
    }
    out
}

impl DeclarationModel for SynModel {
    fn syntax(&self) -> &[SyntaxDecl] {
        &self.syntax
    }

    fn resolve(&self, candidate: &SyntaxDecl) -> Option<Resolved<'_>> {
        match *self.targets.get(candidate.id.0)? {
            Target::Type(i) => Some(Resolved::Type(&self.types[i])),
            Target::Field { ty, index } => {
                let owner = &self.types[ty];
                let field = owner.fields()?.get(index)?;
                Some(Resolved::Field { owner, field })
            }
            Target::Variant { ty, index } => {
                let owner = &self.types[ty];
                let variant = owner.variants()?.get(index)?;
                Some(Resolved::Variant { owner, variant })
            }
            Target::Method(i) => Some(Resolved::Method(&self.methods[i])),
            Target::Unresolved => None
        }
    }

    fn type_decl(&self, key: &TypeKey) -> Option<&TypeDecl> {
        self.by_key.get(key).map(|&i| &self.types[i])
    }

    fn methods_of(&self, owner: &TypeKey) -> Vec<&MethodDecl> {
        self.methods_by_owner
            .get(owner)
            .map(|ids| ids.iter().map(|&i| &self.methods[i]).collect())
            .unwrap_or_default()
    }

    fn find_type(&self, scope: &str, path: &str) -> Option<&TypeDecl> {
        let path = path.split('<').next().unwrap_or(path).trim();
        let segments: Vec<&str> = path.split("::").map(str::trim).collect();
        let (&first, rest) = segments.split_first()?;

        match first {
            "" | "Self" => None,
            "crate" => self.lookup(path),
            "self" | "super" => {
                let mut base = scope;
                let mut rest = segments.as_slice();
                if rest.first() == Some(&"self") {
                    rest = &rest[1..];
                }
                while rest.first() == Some(&"super") {
                    base = parent_module(base)?;
                    rest = &rest[1..];
                }
                self.lookup(&join(base, rest))
            }
            _ => self
                .lookup(&join(scope, &segments))
                .or_else(|| {
                    if rest.is_empty() {
                        self.unique_by_name(first)
                    } else {
                        self.lookup(&join("crate", &segments))
                    }
                })
        }
    }

    fn implements(&self, ty: &TypeKey, capability: &str) -> bool {
        self.capabilities
            .contains(&(ty.clone(), last_segment(capability).to_string()))
    }
}

#[cfg(test)]
mod tests;
