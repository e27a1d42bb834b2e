// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Command bindings.
//!
//! Methods marked `#[command]` become lazily created, shared command
//! objects exposed as associated functions of their owner:
//!
//! ```rust,ignore
//! impl Editor {
//!     #[command]
//!     fn on_save_executed(&mut self) { .. }
//!
//!     #[command]
//!     fn can_save_execute(&self) -> bool { .. }
//! }
//!
//! // Generated in Editor.commands.g.rs:
//! impl Editor {
//!     pub fn save_command() -> &'static crate::synth::RelayCommand<Editor> { .. }
//! }
//!
//! let save = Editor::save_command();
//! if save.can_execute(&editor) {
//!     save.execute(&mut editor);
//! }
//! ```
//!
//! # Marker arguments
//!
//! | Argument | Effect |
//! |----------|--------|
//! | `name = "x"` | Command name instead of the one derived from the method |
//! | `can_execute = method` | Predicate, bypassing convention and fallback |
//! | `wrapper = path::Type` | Command type instead of `RelayCommand<Owner>` |
//!
//! A custom wrapper must implement the `Command` trait and provide
//! `fn new(execute: fn(&mut Owner), can_execute: Option<fn(&Owner) -> bool>) -> Self`.
//! See [`xref`](crate::pipeline::xref) for how predicates are found.

mod assemble;
mod description;
mod diagnostics;
mod render;

use std::collections::BTreeMap;

pub use assemble::assemble;
pub use description::{CommandDescription, CommandGroup};
pub use diagnostics::{
    DUPLICATE_COMMAND, DUPLICATE_MARKER, GENERIC_OWNER, HANDLER_PARAMETERS, INVALID_COMMAND_NAME,
    NON_UNIT_HANDLER, STATIC_HANDLER
};
use rayon::prelude::*;
pub use render::render;
use tracing::{debug, trace};

use crate::{
    error::Result,
    model::{DeclKind, MethodDecl, Resolved, TypeKey},
    pipeline::{Context, filter},
    render::Artifact
};

/// Command artifacts for every owner with marked methods.
///
/// # Errors
///
/// Returns [`SynthError::Cancelled`](crate::SynthError::Cancelled) when the
/// run is cancelled.
pub fn generate(ctx: &Context<'_>) -> Result<Vec<Artifact>> {
    let candidates = filter::candidates(ctx.model, DeclKind::Method, &ctx.markers.command);

    let mut owners: BTreeMap<&TypeKey, Vec<&MethodDecl>> = BTreeMap::new();
    for candidate in &candidates {
        ctx.checkpoint()?;
        match ctx.model.resolve(candidate) {
            Some(Resolved::Method(method)) => {
                owners.entry(&method.owner).or_default().push(method);
            }
            _ => trace!(name = %candidate.name, "method candidate did not resolve")
        }
    }

    let owners: Vec<_> = owners.into_iter().collect();
    let artifacts = owners
        .par_iter()
        .map(|(key, methods)| {
            ctx.checkpoint()?;
            let Some(owner) = ctx.model.type_decl(key) else {
                trace!(owner = %key, "command owner is not declared");
                return Ok(None);
            };
            Ok(assemble(ctx, owner, methods).map(|group| {
                let text = ctx.render_cached("commands", &group, || render(&group, ctx.metadata));
                Artifact::new(group.artifact_name(), text).with_origin(owner.location.clone())
            }))
        })
        .collect::<Result<Vec<_>>>()?;

    let artifacts: Vec<Artifact> = artifacts.into_iter().flatten().collect();
    debug!(
        candidates = candidates.len(),
        owners = owners.len(),
        artifacts = artifacts.len(),
        "command bindings generated"
    );
    Ok(artifacts)
}
