// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::collections::HashSet;

use super::{
    PropertyDescription, PropertyGroup,
    diagnostics::{
        DUPLICATE_MARKER, DUPLICATE_PROPERTY, GENERIC_OWNER, INVALID_PROPERTY_NAME,
        MISSING_EVENT_FIELD, UNNAMED_FIELD
    }
};
use crate::{
    model::{FieldDecl, TypeDecl},
    pipeline::Context,
    utils::{naming, tokens::last_segment}
};

/// Build the accessor group of `owner` from its marked `fields`.
///
/// Fields that cannot become properties are reported and left out; the
/// rest of the group is still generated. Returns `None` when nothing is
/// left or the owner itself is unusable.
pub fn assemble(
    ctx: &Context<'_>,
    owner: &TypeDecl,
    fields: &[&FieldDecl]
) -> Option<PropertyGroup> {
    if owner.generic {
        ctx.sink.emit(
            &GENERIC_OWNER,
            &owner.location,
            format!("`{}` has generic parameters; its properties are skipped", owner.name)
        );
        return None;
    }

    let mut seen = HashSet::new();
    let mut opted_in = false;
    let mut properties = Vec::with_capacity(fields.len());

    for field in fields {
        let subject = match &field.name {
            Some(name) => format!("field `{}::{name}`", owner.name),
            None => format!("field {} of `{}`", field.index, owner.name)
        };
        let Some(marker) = ctx.exclusive_marker(
            &ctx.markers.notify_property,
            &field.markers,
            &DUPLICATE_MARKER,
            &subject
        ) else {
            continue;
        };
        let Some(field_name) = &field.name else {
            ctx.sink.emit(
                &UNNAMED_FIELD,
                &field.location,
                format!("{subject} has no name to derive a property from")
            );
            continue;
        };

        let property_name = marker
            .name_arg("name")
            .map_or_else(|| naming::property_name(field_name), str::to_string);
        let accessor = naming::accessor_name(&property_name);
        if !naming::is_identifier(&property_name) || !naming::is_identifier(&accessor) {
            ctx.sink.emit(
                &INVALID_PROPERTY_NAME,
                &marker.location,
                format!("`{property_name}` is not a usable property name for {subject}")
            );
            continue;
        }
        if !seen.insert(accessor.clone()) {
            ctx.sink.emit(
                &DUPLICATE_PROPERTY,
                &field.location,
                format!("{subject} maps to property `{property_name}`, which is already generated")
            );
            continue;
        }

        opted_in |= marker.bool_arg("observable", true);
        properties.push(PropertyDescription {
            owner: owner.name.clone(),
            field_name: field_name.clone(),
            property_name,
            accessor,
            declared_type: field.ty.clone(),
            requires_infrastructure: false,
            leading_comment: field.docs.clone()
        });
    }

    if properties.is_empty() {
        return None;
    }

    let capabilities = &ctx.config.capabilities;
    let implemented = ctx.model.implements(&owner.key, &capabilities.notify);
    let observable = implemented || opted_in;
    let requires_infrastructure = opted_in && !implemented;

    let event_field = if requires_infrastructure {
        let found = owner.fields().and_then(|all| {
            all.iter().find(|f| {
                let ty = f.ty.split('<').next().unwrap_or_default().trim();
                last_segment(ty) == capabilities.event_type
            })
        });
        let Some(name) = found.and_then(|f| f.name.clone()) else {
            ctx.sink.emit(
                &MISSING_EVENT_FIELD,
                &owner.location,
                format!(
                    "`{}` raises property changes but has no `{}` field",
                    owner.name, capabilities.event_type
                )
            );
            return None;
        };
        Some(name)
    } else {
        None
    };

    for property in &mut properties {
        property.requires_infrastructure = requires_infrastructure;
    }

    Some(PropertyGroup {
        owner: owner.name.clone(),
        module_path: owner.module_path.clone(),
        observable,
        requires_infrastructure,
        event_field,
        notify_trait: ctx.runtime(&capabilities.notify),
        event_type: ctx.runtime(&capabilities.event_type),
        properties
    })
}
