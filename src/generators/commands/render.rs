// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use super::{CommandDescription, CommandGroup};
use crate::{
    config::BuildMetadata,
    render::{ArtifactText, SourceWriter, header_lines}
};

/// Render the `{Type}.commands.g` associated functions.
pub fn render(group: &CommandGroup, meta: &BuildMetadata) -> String {
    let mut w = SourceWriter::new();
    w.open(format!("impl {}", group.owner));
    for (index, command) in group.commands.iter().enumerate() {
        if index > 0 {
            w.blank();
        }
        command_fn(command, &mut w);
    }
    w.close();

    let mut text = ArtifactText::new(header_lines(meta, Some(&group.source_path())));
    text.section(w.finish());
    text.render()
}

fn command_fn(command: &CommandDescription, w: &mut SourceWriter) {
    let owner = &command.owner;
    let wrapper = &command.wrapper_type;

    match &command.leading_comment {
        Some(comment) => w.doc(comment),
        None => w.doc(&format!(
            "Command running [`{0}`](Self::{0}).",
            command.execute_method
        ))
    };
    w.open(format!(
        "pub fn {}() -> &'static {wrapper}",
        command.command_property
    ))
    .line(format!(
        "static COMMAND: ::std::sync::OnceLock<{wrapper}> = ::std::sync::OnceLock::new();"
    ))
    .open("COMMAND.get_or_init(||")
    .line(format!(
        "let execute: fn(&mut {owner}) = |target| target.{}();",
        command.execute_method
    ));
    match &command.can_execute {
        Some(predicate) => {
            w.line(format!(
                "let can_execute: fn(&{owner}) -> bool = |target| target.{predicate}();"
            ))
            .line(format!(
                "<{wrapper}>::new(execute, ::core::option::Option::Some(can_execute))"
            ));
        }
        None => {
            w.line(format!(
                "<{wrapper}>::new(execute, ::core::option::Option::None)"
            ));
        }
    }
    w.close_with("})").close();
}
