// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use super::{EnumDescription, MemberField};
use crate::{
    config::BuildMetadata,
    render::{ArtifactText, MatchTable, SourceWriter, header_lines, runtime_item, string_literal}
};

/// Generated trait operations, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    IsDefined,
    Parse,
    TryParse,
    AsStr,
    Description,
    Names,
    Values,
    IterNames,
    IterValues,
    Count,
    Summary,
    Remarks
}

impl Operation {
    const ALWAYS: [Self; 10] = [
        Self::IsDefined,
        Self::Parse,
        Self::TryParse,
        Self::AsStr,
        Self::Description,
        Self::Names,
        Self::Values,
        Self::IterNames,
        Self::IterValues,
        Self::Count
    ];

    fn doc(self) -> &'static str {
        match self {
            Self::IsDefined => "Whether `name` is the name of a variant.",
            Self::Parse => "Variant named `name`, or an error naming the rejected input.",
            Self::TryParse => "Variant named `name`, if any.",
            Self::AsStr => "Variant name.",
            Self::Description => "Label of the variant, falling back to its name.",
            Self::Names => "Variant names in declaration order.",
            Self::Values => "Variants in declaration order.",
            Self::IterNames => "Lazy sequence of variant names.",
            Self::IterValues => "Lazy sequence of variants.",
            Self::Count => "Number of variants.",
            Self::Summary => "Documented summary of the variant.",
            Self::Remarks => "Documented remarks of the variant."
        }
    }

    fn signature(self, error: &str) -> String {
        match self {
            Self::IsDefined => "fn is_defined(name: &str) -> bool".to_string(),
            Self::Parse => format!("fn parse(name: &str) -> ::core::result::Result<Self, {error}>"),
            Self::TryParse => "fn try_parse(name: &str) -> ::core::option::Option<Self>".to_string(),
            Self::AsStr => "fn as_str(&self) -> &'static str".to_string(),
            Self::Description => "fn description(&self) -> &'static str".to_string(),
            Self::Names => "fn names() -> &'static [&'static str]".to_string(),
            Self::Values => "fn values() -> &'static [Self]".to_string(),
            Self::IterNames => {
                "fn iter_names() -> impl ::core::iter::Iterator<Item = &'static str>".to_string()
            }
            Self::IterValues => {
                "fn iter_values() -> impl ::core::iter::Iterator<Item = Self>".to_string()
            }
            Self::Count => "fn count() -> usize".to_string(),
            Self::Summary => {
                "fn summary(&self) -> ::core::option::Option<&'static str>".to_string()
            }
            Self::Remarks => {
                "fn remarks(&self) -> ::core::option::Option<&'static str>".to_string()
            }
        }
    }

    fn for_enum(desc: &EnumDescription) -> Vec<Self> {
        let mut ops = Self::ALWAYS.to_vec();
        if desc.has_summaries() {
            ops.push(Self::Summary);
        }
        if desc.has_remarks() {
            ops.push(Self::Remarks);
        }
        ops
    }
}

/// Render the `{Name}.g` extension trait.
///
/// The output depends only on the arguments.
pub fn render(desc: &EnumDescription, meta: &BuildMetadata, runtime_path: &str) -> String {
    let error = runtime_item(runtime_path, "UnknownVariantError");
    let operations = Operation::for_enum(desc);

    let mut text = ArtifactText::new(header_lines(meta, Some(&desc.source_path())));
    text.section(declaration(desc, &operations, &error));
    text.section(implementation(desc, &operations, &error));
    text.render()
}

fn declaration(desc: &EnumDescription, operations: &[Operation], error: &str) -> String {
    let visibility = if desc.visibility.is_empty() {
        String::new()
    } else {
        format!("{} ", desc.visibility)
    };

    let mut w = SourceWriter::new();
    w.doc(&format!("Name and value operations for [`{}`].", desc.name));
    w.open(format!(
        "{visibility}trait {}: ::core::marker::Sized + 'static",
        desc.extension_name
    ));
    for (index, op) in operations.iter().enumerate() {
        if index > 0 {
            w.blank();
        }
        w.doc(op.doc()).line(format!("{};", op.signature(error)));
    }
    w.close();
    w.finish()
}

fn implementation(desc: &EnumDescription, operations: &[Operation], error: &str) -> String {
    let mut w = SourceWriter::new();
    w.open(format!("impl {} for {}", desc.extension_name, desc.name));
    for (index, op) in operations.iter().enumerate() {
        if index > 0 {
            w.blank();
        }
        w.open(op.signature(error));
        body(desc, *op, error, &mut w);
        w.close();
    }
    w.close();
    w.finish()
}

fn variant(member: &str) -> String {
    format!("Self::{member}")
}

fn list(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(", ")
}

fn body(desc: &EnumDescription, op: Operation, error: &str, w: &mut SourceWriter) {
    let members = &desc.members;
    match op {
        Operation::IsDefined => {
            w.line("Self::try_parse(name).is_some()");
        }
        Operation::Parse => members
            .iter()
            .fold(MatchTable::new("name"), |table, m| {
                table.arm(string_literal(m), format!("Ok({})", variant(m)))
            })
            .fallback(format!("Err({error}::new({}, name))", string_literal(&desc.name)))
            .write(w),
        Operation::TryParse => members
            .iter()
            .fold(MatchTable::new("name"), |table, m| {
                table.arm(string_literal(m), format!("Some({})", variant(m)))
            })
            .fallback("None")
            .write(w),
        Operation::AsStr => members
            .iter()
            .fold(MatchTable::new("*self"), |table, m| {
                table.arm(variant(m), string_literal(m))
            })
            .exhaustive(true)
            .write(w),
        Operation::Description if desc.descriptions.is_empty() => {
            w.line("self.as_str()");
        }
        Operation::Description => desc
            .descriptions
            .iter()
            .fold(MatchTable::new("*self"), |table, (m, label)| {
                table.arm(variant(m), string_literal(label))
            })
            .fallback("self.as_str()")
            .exhaustive(desc.descriptions.len() == members.len())
            .write(w),
        Operation::Names => {
            w.line(format!("&[{}]", list(members.iter().map(|m| string_literal(m)))));
        }
        Operation::Values => {
            w.line(format!(
                "const VALUES: &[{}] = &[{}];",
                desc.name,
                list(members.iter().map(|m| format!("{}::{m}", desc.name)))
            ))
            .line("VALUES");
        }
        Operation::IterNames => {
            w.line(format!(
                "[{}].into_iter()",
                list(members.iter().map(|m| string_literal(m)))
            ));
        }
        Operation::IterValues => {
            w.line(format!("[{}].into_iter()", list(members.iter().map(|m| variant(m)))));
        }
        Operation::Count => {
            w.line(members.len().to_string());
        }
        Operation::Summary => optional_text(desc, |f| f.summary.as_deref()).write(w),
        Operation::Remarks => optional_text(desc, |f| f.remarks.as_deref()).write(w)
    }
}

/// Arms for members with text, `None` for the rest.
fn optional_text(
    desc: &EnumDescription,
    text: impl Fn(&MemberField) -> Option<&str>
) -> MatchTable {
    let mut covered = 0;
    let mut table = MatchTable::new("*self");
    for member in &desc.members {
        if let Some(value) = desc.fields.get(member).and_then(&text) {
            table = table.arm(variant(member), format!("Some({})", string_literal(value)));
            covered += 1;
        }
    }
    table.fallback("None").exhaustive(covered == desc.members.len())
}
