// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Enum extension traits.
//!
//! An enum marked `#[enum_transform]` gets an extension trait with name and
//! value operations that need no reflection at runtime:
//!
//! ```rust,ignore
//! #[enum_transform]
//! pub enum Color {
//!     /// <summary>Warm colour.</summary>
//!     #[description("Bright red")]
//!     Red,
//!     Green,
//! }
//!
//! // Generated in Color.g.rs:
//! pub trait ColorEx: Sized + 'static { /* ... */ }
//! impl ColorEx for Color { /* ... */ }
//!
//! assert_eq!(Color::parse("Red"), Ok(Color::Red));
//! assert_eq!(Color::Green.description(), "Green");
//! assert_eq!(Color::names(), &["Red", "Green"]);
//! ```
//!
//! # Marker arguments
//!
//! | Marker | Argument | Effect |
//! |--------|----------|--------|
//! | `enum_transform` | `extension = "Name"` | Trait name instead of `{Enum}Ex` |
//! | `description` | `"text"` (positional) or `= "text"` | Label returned by `description()` |
//!
//! `summary()` and `remarks()` are emitted only when at least one variant
//! documents them.

mod assemble;
mod description;
mod diagnostics;
mod render;

pub use assemble::assemble;
pub use description::{EnumDescription, MemberField};
pub use diagnostics::{
    DATA_VARIANT, DUPLICATE_DESCRIPTION, DUPLICATE_MARKER, GENERIC_ENUM, INVALID_EXTENSION_NAME
};
use rayon::prelude::*;
pub use render::render;
use tracing::{debug, trace};

use crate::{
    error::Result,
    model::{DeclKind, Resolved},
    pipeline::{Context, filter},
    render::Artifact
};

/// Extension traits for every marked enum in the model.
///
/// # Errors
///
/// Returns [`SynthError::Cancelled`](crate::SynthError::Cancelled) when the
/// run is cancelled.
pub fn generate(ctx: &Context<'_>) -> Result<Vec<Artifact>> {
    let candidates = filter::candidates(ctx.model, DeclKind::Enum, &ctx.markers.enum_transform);

    let artifacts = candidates
        .par_iter()
        .map(|candidate| {
            ctx.checkpoint()?;
            let Some(Resolved::Type(ty)) = ctx.model.resolve(candidate) else {
                trace!(name = %candidate.name, "enum candidate did not resolve");
                return Ok(None);
            };
            Ok(assemble(ctx, ty).map(|desc| {
                let text = ctx.render_cached("enum", &desc, || {
                    render(&desc, ctx.metadata, &ctx.config.runtime_path)
                });
                Artifact::new(desc.artifact_name(), text).with_origin(ty.location.clone())
            }))
        })
        .collect::<Result<Vec<_>>>()?;

    let artifacts: Vec<Artifact> = artifacts.into_iter().flatten().collect();
    debug!(
        candidates = candidates.len(),
        artifacts = artifacts.len(),
        "enum extensions generated"
    );
    Ok(artifacts)
}

#[cfg(test)]
mod tests;
