// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use indexmap::IndexMap;

use super::{
    EnumDescription, MemberField,
    diagnostics::{
        DATA_VARIANT, DUPLICATE_DESCRIPTION, DUPLICATE_MARKER, GENERIC_ENUM,
        INVALID_EXTENSION_NAME
    }
};
use crate::{
    model::{TypeDecl, VariantDecl},
    pipeline::{Context, diagnostics::MALFORMED_MARKER, docs},
    utils::naming
};

/// Build the description of a marked enum.
///
/// Returns `None`, with the reason reported to the sink, when the enum
/// cannot be extended.
pub fn assemble(ctx: &Context<'_>, ty: &TypeDecl) -> Option<EnumDescription> {
    let subject = format!("enum `{}`", ty.name);
    let marker =
        ctx.exclusive_marker(&ctx.markers.enum_transform, &ty.markers, &DUPLICATE_MARKER, &subject)?;
    let variants = ty.variants()?;

    if ty.generic {
        ctx.sink.emit(
            &GENERIC_ENUM,
            &ty.location,
            format!("{subject} has generic parameters and is skipped")
        );
        return None;
    }

    let mut structural = false;
    for variant in variants.iter().filter(|v| v.has_fields) {
        ctx.sink.emit(
            &DATA_VARIANT,
            &variant.location,
            format!(
                "variant `{}` of {subject} carries data; only unit variants can be listed",
                variant.name
            )
        );
        structural = true;
    }
    if structural {
        return None;
    }

    let extension_name = match marker.name_arg("extension") {
        Some(name) if naming::is_identifier(name) => name.to_string(),
        Some(name) => {
            ctx.sink.emit(
                &INVALID_EXTENSION_NAME,
                &marker.location,
                format!("`{name}` is not a valid trait name for {subject}")
            );
            return None;
        }
        None => format!("{}Ex", ty.name)
    };

    let mut members = Vec::with_capacity(variants.len());
    let mut descriptions = IndexMap::new();
    let mut fields = IndexMap::with_capacity(variants.len());
    for variant in variants {
        let description = description_of(ctx, variant);
        let record = variant.docs.as_deref().map(docs::extract).unwrap_or_default();
        if let Some(label) = &description {
            descriptions.insert(variant.name.clone(), label.clone());
        }
        members.push(variant.name.clone());
        fields.insert(
            variant.name.clone(),
            MemberField {
                value: variant.name.clone(),
                description,
                summary: record.summary,
                remarks: record.remarks
            }
        );
    }

    Some(EnumDescription {
        name: ty.name.clone(),
        module_path: ty.module_path.clone(),
        visibility: ty.visibility.clone(),
        extension_name,
        members,
        descriptions,
        fields
    })
}

/// Label of a variant. The first `description` marker wins.
fn description_of(ctx: &Context<'_>, variant: &VariantDecl) -> Option<String> {
    let mut found = ctx.markers.description.select(&variant.markers);
    let first = found.next()?;
    for extra in found {
        ctx.sink.emit(
            &DUPLICATE_DESCRIPTION,
            &extra.location,
            format!(
                "variant `{}` has more than one `{}` marker; the first one is used",
                variant.name,
                ctx.markers.description.name()
            )
        );
    }
    if first.malformed {
        ctx.sink.emit(
            &MALFORMED_MARKER,
            &first.location,
            format!("arguments of `{}` on variant `{}` could not be parsed", first.name, variant.name)
        );
        return None;
    }
    first.first_str().map(str::to_string)
}
