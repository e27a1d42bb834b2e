// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::collections::HashSet;

use super::{
    CommandDescription, CommandGroup,
    diagnostics::{
        DUPLICATE_COMMAND, DUPLICATE_MARKER, GENERIC_OWNER, HANDLER_PARAMETERS,
        INVALID_COMMAND_NAME, NON_UNIT_HANDLER, STATIC_HANDLER
    }
};
use crate::{
    model::{Marker, MethodDecl, Receiver, TypeDecl},
    pipeline::{Context, xref},
    utils::naming
};

/// Build the command group of `owner` from its command-marked `methods`.
///
/// Methods returning `bool` are predicates and only take part in
/// cross-reference resolution. A command that fails validation is reported
/// and left out; its siblings are still generated.
pub fn assemble(
    ctx: &Context<'_>,
    owner: &TypeDecl,
    methods: &[&MethodDecl]
) -> Option<CommandGroup> {
    if owner.generic {
        ctx.sink.emit(
            &GENERIC_OWNER,
            &owner.location,
            format!("`{}` has generic parameters; its commands are skipped", owner.name)
        );
        return None;
    }

    let mut seen = HashSet::new();
    let mut commands = Vec::new();

    for method in methods {
        let subject = format!("method `{}::{}`", owner.name, method.name);
        let Some(marker) =
            ctx.exclusive_marker(&ctx.markers.command, &method.markers, &DUPLICATE_MARKER, &subject)
        else {
            continue;
        };
        if method.returns_bool() {
            continue;
        }
        if !handler_shape_ok(ctx, method, &subject) {
            continue;
        }
        if !method.returns_unit() {
            ctx.sink.emit(
                &NON_UNIT_HANDLER,
                &method.location,
                format!("{subject} returns a value; handlers must return `()`")
            );
            continue;
        }
        let Some(command_property) = command_property(ctx, method, marker, &subject) else {
            continue;
        };
        if !seen.insert(command_property.clone()) {
            ctx.sink.emit(
                &DUPLICATE_COMMAND,
                &method.location,
                format!("{subject} maps to `{command_property}`, which is already generated")
            );
            continue;
        }

        let can_execute = match xref::resolve_predicate(
            ctx.model,
            &owner.key,
            &command_property,
            marker.name_arg("can_execute"),
            &ctx.markers.command
        ) {
            Ok(found) => found.map(|m| m.name.clone()),
            Err(err) => {
                ctx.sink.emit(err.descriptor(), &marker.location, err.to_string());
                if err.is_fatal() {
                    continue;
                }
                None
            }
        };

        let wrapper_type = match marker.name_arg("wrapper") {
            None => format!("{}<{}>", ctx.runtime("RelayCommand"), owner.name),
            Some(wrapper) => match xref::check_wrapper(
                ctx.model,
                &owner.module_path,
                wrapper,
                &ctx.config.capabilities.command
            ) {
                Ok(ty) if ty.generic => format!("{}<{}>", ty.key, owner.name),
                Ok(ty) => ty.key.to_string(),
                Err(err) => {
                    ctx.sink.emit(err.descriptor(), &marker.location, err.to_string());
                    continue;
                }
            }
        };

        commands.push(CommandDescription {
            owner: owner.name.clone(),
            execute_method: method.name.clone(),
            command_property,
            wrapper_type,
            can_execute,
            leading_comment: method.docs.clone()
        });
    }

    if commands.is_empty() {
        return None;
    }
    Some(CommandGroup {
        owner: owner.name.clone(),
        module_path: owner.module_path.clone(),
        commands
    })
}

/// Handlers take `&self` or `&mut self` and nothing else.
fn handler_shape_ok(ctx: &Context<'_>, method: &MethodDecl, subject: &str) -> bool {
    match method.receiver {
        Receiver::None => {
            ctx.sink.emit(
                &STATIC_HANDLER,
                &method.location,
                format!("{subject} has no receiver and cannot be bound to an instance")
            );
            false
        }
        Receiver::Value => {
            ctx.sink.emit(
                &HANDLER_PARAMETERS,
                &method.location,
                format!("{subject} takes `self` by value; use `&self` or `&mut self`")
            );
            false
        }
        Receiver::Ref | Receiver::RefMut if method.params > 1 => {
            ctx.sink.emit(
                &HANDLER_PARAMETERS,
                &method.location,
                format!("{subject} takes parameters besides the receiver")
            );
            false
        }
        Receiver::Ref | Receiver::RefMut => true
    }
}

fn command_property(
    ctx: &Context<'_>,
    method: &MethodDecl,
    marker: &Marker,
    subject: &str
) -> Option<String> {
    let Some(explicit) = marker.name_arg("name") else {
        return Some(naming::command_name(&method.name));
    };
    let property = naming::normalize(explicit);
    if naming::is_identifier(explicit) && naming::is_identifier(&property) {
        return Some(property);
    }
    ctx.sink.emit(
        &INVALID_COMMAND_NAME,
        &marker.location,
        format!("`{explicit}` is not a usable command name for {subject}")
    );
    None
}
