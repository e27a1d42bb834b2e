// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Observable property accessors.
//!
//! Fields marked `#[notify_property]` get a getter and a setter in an extra
//! inherent `impl` block of their owner:
//!
//! ```rust,ignore
//! pub struct Editor {
//!     /// Display name.
//!     #[notify_property]
//!     _user_name: String,
//!     #[notify_property(name = "Handle")]
//!     login: String,
//!     events: PropertyChangedEvent,
//! }
//!
//! // Generated in Editor.properties.g.rs:
//! impl Editor {
//!     pub fn user_name(&self) -> &String { .. }
//!     pub fn set_user_name(&mut self, value: String) -> bool { .. }
//!     pub fn handle(&self) -> &String { .. }
//!     pub fn set_handle(&mut self, value: String) -> bool { .. }
//! }
//! ```
//!
//! The property name comes from the field (`_user_name` becomes `UserName`)
//! unless the marker names it. Accessors use its snake-case form.
//!
//! # Change notification
//!
//! Setters raise `NotifyPropertyChanged::on_property_changed` when the owner
//! is observable: it implements `NotifyPropertyChanged` itself, or at least
//! one field opts in (`observable = true`, the default). An owner that opts
//! in without implementing the trait also gets `{Type}.NotifyPropertyChanged.g`,
//! which binds its `PropertyChangedEvent` field. That artifact is produced
//! once per owner no matter how many fields are marked.
//!
//! Both names follow [`Capabilities`](crate::config::Capabilities), so a
//! renamed trait or event type is what the generated code calls.

mod assemble;
mod description;
mod diagnostics;
mod render;

use std::collections::BTreeMap;

pub use assemble::assemble;
pub use description::{PropertyDescription, PropertyGroup};
pub use diagnostics::{
    DUPLICATE_MARKER, DUPLICATE_PROPERTY, GENERIC_OWNER, INVALID_PROPERTY_NAME,
    MISSING_EVENT_FIELD, UNNAMED_FIELD
};
use rayon::prelude::*;
pub use render::{render, render_infrastructure};
use tracing::{debug, trace};

use crate::{
    error::Result,
    model::{DeclKind, FieldDecl, Resolved, TypeDecl, TypeKey},
    pipeline::{Context, filter},
    render::Artifact
};

/// Accessor artifacts for every owner with marked fields.
///
/// # Errors
///
/// Returns [`SynthError::Cancelled`](crate::SynthError::Cancelled) when the
/// run is cancelled.
pub fn generate(ctx: &Context<'_>) -> Result<Vec<Artifact>> {
    let candidates =
        filter::candidates(ctx.model, DeclKind::Field, &ctx.markers.notify_property);

    let mut owners: BTreeMap<&TypeKey, (&TypeDecl, Vec<&FieldDecl>)> = BTreeMap::new();
    for candidate in &candidates {
        ctx.checkpoint()?;
        match ctx.model.resolve(candidate) {
            Some(Resolved::Field { owner, field }) => {
                owners
                    .entry(&owner.key)
                    .or_insert_with(|| (owner, Vec::new()))
                    .1
                    .push(field);
            }
            _ => trace!(name = %candidate.name, "field candidate did not resolve")
        }
    }

    let owners: Vec<_> = owners.into_values().collect();
    let artifacts = owners
        .par_iter()
        .map(|(owner, fields)| {
            ctx.checkpoint()?;
            Ok(assemble(ctx, owner, fields).map(|group| group_artifacts(ctx, &group, owner)))
        })
        .collect::<Result<Vec<_>>>()?;

    let artifacts: Vec<Artifact> = artifacts.into_iter().flatten().flatten().collect();
    debug!(
        candidates = candidates.len(),
        owners = owners.len(),
        artifacts = artifacts.len(),
        "property accessors generated"
    );
    Ok(artifacts)
}

fn group_artifacts(ctx: &Context<'_>, group: &PropertyGroup, owner: &TypeDecl) -> Vec<Artifact> {
    let text = ctx.render_cached("properties", group, || render(group, ctx.metadata));
    let mut out =
        vec![Artifact::new(group.artifact_name(), text).with_origin(owner.location.clone())];
    if let Some(text) = render_infrastructure(group, ctx.metadata) {
        out.push(
            Artifact::new(group.infrastructure_name(), text).with_origin(owner.location.clone())
        );
    }
    out
}
