// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Name derivation.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `_user_name` | [`property_name`] | `UserName` |
//! | `UserName` | [`accessor_name`] | `user_name` |
//! | `on_save_executed` | [`command_name`] | `save_command` |
//! | `save_command` | [`predicate_name`] | `can_save_execute` |
//!
//! All comparisons between member names go through [`normalize`], so
//! `CanSaveExecute` and `can_save_execute` name the same member.

use convert_case::{Case, Casing};

/// Property name for a backing field.
///
/// Leading underscores are stripped. The first letter, and every letter that
/// follows an underscore, is upper-cased and that underscore is dropped.
/// Underscores not followed by a letter are kept.
pub fn property_name(field: &str) -> String {
    let trimmed = field.trim_start_matches('_');
    let mut out = String::with_capacity(trimmed.len());
    let mut chars = trimmed.chars().peekable();
    let mut at_start = true;

    while let Some(c) = chars.next() {
        if c == '_' && chars.peek().is_some_and(char::is_ascii_alphabetic) {
            if let Some(next) = chars.next() {
                out.push(next.to_ascii_uppercase());
            }
            at_start = false;
            continue;
        }
        if at_start && c.is_ascii_alphabetic() {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        at_start = false;
    }
    out
}

/// Snake-case accessor identifier for a property name.
pub fn accessor_name(property: &str) -> String {
    property.to_case(Case::Snake)
}

/// Setter identifier for an accessor.
pub fn setter_name(accessor: &str) -> String {
    format!("set_{accessor}")
}

/// Canonical form used when comparing member names.
pub fn normalize(name: &str) -> String {
    name.to_case(Case::Snake)
}

fn words(name: &str) -> Vec<String> {
    normalize(name)
        .split('_')
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Command property derived from a handler method name.
///
/// A leading `on` and a trailing `executed` are dropped when other words
/// remain, then `command` is appended unless already last.
pub fn command_name(method: &str) -> String {
    let mut words = words(method);
    if words.len() > 1 && words[0] == "on" {
        words.remove(0);
    }
    if words.len() > 1 && words.last().is_some_and(|w| w == "executed") {
        words.pop();
    }
    if words.last().is_none_or(|w| w != "command") {
        words.push("command".to_string());
    }
    words.join("_")
}

/// Command name without its trailing `command` word.
pub fn trimmed_command_name(command: &str) -> String {
    let mut words = words(command);
    if words.last().is_some_and(|w| w == "command") {
        words.pop();
    }
    words.join("_")
}

/// Conventional predicate name for a command.
pub fn predicate_name(command: &str) -> String {
    let trimmed = trimmed_command_name(command);
    if trimmed.is_empty() {
        "can_execute".to_string()
    } else {
        format!("can_{trimmed}_execute")
    }
}

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final", "macro",
    "override", "priv", "try", "typeof", "unsized", "virtual", "yield"
];

/// Whether `name` can be emitted as a plain Rust identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    if name == "_" || KEYWORDS.contains(&name) {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
