// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Doc attribute collection.
//!
//! In Rust, doc comments (`///` and `/** */`) are stored as `#[doc = "..."]`
//! attributes. The corpus adapter uses this module to turn them into the raw
//! text blob the documentation extractor consumes, with the comment markers
//! already stripped.
//!
//! # Example
//!
//! ```rust,ignore
//! /// <summary>Primary colour.</summary>
//! /// <remarks>Used for highlights.</remarks>
//! Red,
//!
//! // Collects to: "<summary>Primary colour.</summary>\n<remarks>Used for highlights.</remarks>"
//! ```

use syn::Attribute;

/// Collect doc comments from attributes.
///
/// Combines all `#[doc = "..."]` attributes into a single string,
/// trimming whitespace from each line.
///
/// # Returns
///
/// Combined doc string, or `None` if no doc comments present.
pub fn collect_doc_text(attrs: &[Attribute]) -> Option<String> {
    let doc_lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| {
            if let syn::Meta::NameValue(meta) = &attr.meta
                && let syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(lit_str),
                    ..
                }) = &meta.value
            {
                return Some(lit_str.value());
            }
            None
        })
        .collect();

    if doc_lines.is_empty() {
        return None;
    }

    // Block comments arrive as one attribute with embedded newlines. A bare
    // `///` arrives as an empty chunk and must survive as a paragraph break.
    let combined = doc_lines
        .iter()
        .flat_map(|chunk| chunk.split('\n'))
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");

    let trimmed = combined.trim().to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
