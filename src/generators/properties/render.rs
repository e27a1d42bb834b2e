// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use super::{PropertyDescription, PropertyGroup};
use crate::{
    config::BuildMetadata,
    render::{ArtifactText, SourceWriter, header_lines, string_literal}
};

/// Render the `{Type}.properties.g` accessors.
pub fn render(group: &PropertyGroup, meta: &BuildMetadata) -> String {
    let mut w = SourceWriter::new();
    w.open(format!("impl {}", group.owner));
    for (index, property) in group.properties.iter().enumerate() {
        if index > 0 {
            w.blank();
        }
        getter(property, &mut w);
        w.blank();
        if group.observable {
            notifying_setter(property, &group.notify_trait, &mut w);
        } else {
            plain_setter(property, &mut w);
        }
    }
    w.close();

    let mut text = ArtifactText::new(header_lines(meta, Some(&group.source_path())));
    text.section(w.finish());
    text.render()
}

fn getter(property: &PropertyDescription, w: &mut SourceWriter) {
    match &property.leading_comment {
        Some(comment) => w.doc(comment),
        None => w.doc(&format!("`{}` property.", property.property_name))
    };
    w.open(format!(
        "pub fn {}(&self) -> &{}",
        property.accessor, property.declared_type
    ))
    .line(format!("&self.{}", property.field_name))
    .close();
}

fn plain_setter(property: &PropertyDescription, w: &mut SourceWriter) {
    w.doc(&format!("Set [`{0}`](Self::{0}).", property.accessor))
        .open(format!(
            "pub fn {}(&mut self, value: {})",
            property.setter(),
            property.declared_type
        ))
        .line(format!("self.{} = value;", property.field_name))
        .close();
}

fn notifying_setter(property: &PropertyDescription, notify: &str, w: &mut SourceWriter) {
    let field = &property.field_name;
    w.doc(&format!(
        "Set [`{0}`](Self::{0}) and raise a change notification.\n\nReturns `false`, without notifying, when the value is unchanged.",
        property.accessor
    ))
    .open(format!(
        "pub fn {}(&mut self, value: {}) -> bool",
        property.setter(),
        property.declared_type
    ))
    .open(format!("if self.{field} == value"))
    .line("return false;")
    .close()
    .line(format!("self.{field} = value;"))
    .line(format!(
        "{notify}::on_property_changed(self, {});",
        string_literal(&property.accessor)
    ))
    .line("true")
    .close();
}

/// Render the `{Type}.NotifyPropertyChanged.g` impl binding the owner's
/// event field.
///
/// Returns `None` when the group does not need infrastructure.
pub fn render_infrastructure(group: &PropertyGroup, meta: &BuildMetadata) -> Option<String> {
    if !group.requires_infrastructure {
        return None;
    }
    let event_field = group.event_field.as_deref()?;

    let mut w = SourceWriter::new();
    w.open(format!("impl {} for {}", group.notify_trait, group.owner))
        .open(format!("fn property_changed(&self) -> &{}", group.event_type))
        .line(format!("&self.{event_field}"))
        .close()
        .close();

    let mut text = ArtifactText::new(header_lines(meta, Some(&group.source_path())));
    text.section(w.finish());
    Some(text.render())
}
