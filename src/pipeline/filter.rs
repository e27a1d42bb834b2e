// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Declaration corpus filter.
//!
//! A syntax-only predicate run over every declaration before any semantic
//! resolution. It looks at nothing but the declaration kind and the names
//! of its attributes, so it is cheap, side-effect-free and safe to run in
//! parallel in any order.

use rayon::prelude::*;

use crate::model::{DeclKind, DeclarationModel, MarkerMatcher, SyntaxDecl};

/// Whether `decl` is of `kind` and carries a marker of the family.
pub fn accepts(decl: &SyntaxDecl, kind: DeclKind, matcher: &MarkerMatcher) -> bool {
    decl.kind == kind
        && decl
            .attribute_names
            .iter()
            .any(|name| matcher.matches(name))
}

/// Candidates of `kind` in corpus order.
pub fn candidates<'m>(
    model: &'m dyn DeclarationModel,
    kind: DeclKind,
    matcher: &MarkerMatcher
) -> Vec<&'m SyntaxDecl> {
    model
        .syntax()
        .par_iter()
        .filter(|decl| accepts(decl, kind, matcher))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DeclId, Location, MatchMode};

    fn decl(kind: DeclKind, attrs: &[&str]) -> SyntaxDecl {
        SyntaxDecl {
            id: DeclId(0),
            kind,
            name: "Item".to_string(),
            attribute_names: attrs.iter().map(|a| (*a).to_string()).collect(),
            location: Location::default()
        }
    }

    #[test]
    fn accepts_matching_kind_and_marker() {
        let matcher = MarkerMatcher::exact("command");
        assert!(accepts(&decl(DeclKind::Method, &["inline", "command"]), DeclKind::Method, &matcher));
    }

    #[test]
    fn rejects_other_kind() {
        let matcher = MarkerMatcher::exact("command");
        assert!(!accepts(&decl(DeclKind::Field, &["command"]), DeclKind::Method, &matcher));
    }

    #[test]
    fn rejects_unmarked() {
        let matcher = MarkerMatcher::exact("command");
        assert!(!accepts(&decl(DeclKind::Method, &["doc", "inline"]), DeclKind::Method, &matcher));
        assert!(!accepts(&decl(DeclKind::Method, &[]), DeclKind::Method, &matcher));
    }

    #[test]
    fn substring_mode_accepts_prefixed_names() {
        let matcher = MarkerMatcher::new("command", &[], MatchMode::Substring);
        assert!(accepts(&decl(DeclKind::Method, &["relay_command"]), DeclKind::Method, &matcher));
    }
}
