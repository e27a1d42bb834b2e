// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Compact token printing.
//!
//! `TokenStream::to_string` separates every token with a space, which turns
//! `Option<Vec<u8>>` into `Option < Vec < u8 > >`. Field types and paths are
//! copied into generated code and compared by name, so they are printed in
//! the form a human would write instead.

use proc_macro2::{Delimiter, Spacing, TokenStream, TokenTree};
use quote::ToTokens;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Prev {
    Start,
    Word,
    Separator,
    Spaced,
    Tick,
    Glue,
    Arrow
}

/// Print a token stream compactly.
pub fn compact(tokens: TokenStream) -> String {
    let mut out = String::new();
    write_stream(tokens, &mut out);
    out
}

/// Print any `syn` node compactly.
pub fn compact_of<T: ToTokens>(node: &T) -> String {
    compact(node.to_token_stream())
}

/// Print a path as `a::b::C`, dropping generic arguments.
pub fn path_text(path: &syn::Path) -> String {
    let mut out = String::new();
    if path.leading_colon.is_some() {
        out.push_str("::");
    }
    let segments: Vec<String> = path.segments.iter().map(|s| s.ident.to_string()).collect();
    out.push_str(&segments.join("::"));
    out
}

/// Last identifier of a `::` path, ignoring generic arguments.
pub fn last_segment(path: &str) -> &str {
    let base = path.split('<').next().unwrap_or(path);
    base.rsplit("::").next().unwrap_or(base).trim()
}

/// Visibility as written, empty for private items.
pub fn visibility_text(vis: &syn::Visibility) -> String {
    compact_of(vis)
}

fn write_stream(tokens: TokenStream, out: &mut String) {
    let mut prev = Prev::Start;
    for tree in tokens {
        match tree {
            TokenTree::Ident(ident) => {
                push_word(out, prev, &ident.to_string());
                prev = Prev::Word;
            }
            TokenTree::Literal(lit) => {
                push_word(out, prev, &lit.to_string());
                prev = Prev::Word;
            }
            TokenTree::Punct(punct) => {
                let c = punct.as_char();
                prev = match c {
                    ',' | ';' => {
                        out.push(c);
                        Prev::Separator
                    }
                    '\'' => {
                        if matches!(prev, Prev::Word | Prev::Separator) {
                            out.push(' ');
                        }
                        out.push(c);
                        Prev::Tick
                    }
                    '-' if punct.spacing() == Spacing::Joint => {
                        out.push_str(" -");
                        Prev::Arrow
                    }
                    '>' if prev == Prev::Arrow => {
                        out.push_str("> ");
                        Prev::Spaced
                    }
                    '+' | '=' => {
                        out.push(' ');
                        out.push(c);
                        out.push(' ');
                        Prev::Spaced
                    }
                    _ => {
                        if prev == Prev::Separator {
                            out.push(' ');
                        }
                        out.push(c);
                        Prev::Glue
                    }
                };
            }
            TokenTree::Group(group) => {
                let (open, close) = match group.delimiter() {
                    Delimiter::Parenthesis => ("(", ")"),
                    Delimiter::Bracket => ("[", "]"),
                    Delimiter::Brace => ("{", "}"),
                    Delimiter::None => ("", "")
                };
                if prev == Prev::Separator {
                    out.push(' ');
                }
                out.push_str(open);
                write_stream(group.stream(), out);
                out.push_str(close);
                prev = Prev::Word;
            }
        }
    }
}

fn push_word(out: &mut String, prev: Prev, word: &str) {
    if matches!(prev, Prev::Word | Prev::Separator) {
        out.push(' ');
    }
    out.push_str(word);
}
