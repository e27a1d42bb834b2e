// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use pretty_assertions::assert_eq;

use super::*;
use crate::{
    config::BuildMetadata,
    corpus::SynModel,
    model::{DeclarationModel, TypeKey},
    pipeline::testing::Harness
};

fn describe(source: &str, name: &str) -> (Option<EnumDescription>, Vec<&'static str>) {
    let model = SynModel::from_source(source);
    let harness = Harness::new();
    let desc = {
        let ctx = harness.context(&model);
        let ty = model
            .type_decl(&TypeKey::new("crate", name))
            .unwrap_or_else(|| panic!("{name} not collected"));
        assemble(&ctx, ty)
    };
    (desc, harness.ids())
}

fn render_default(desc: &EnumDescription) -> String {
    render(desc, &BuildMetadata::reproducible(), "crate::synth")
}

const COLOR: &str = r#"
    /// Palette colour.
    #[enum_transform]
    pub enum Color {
        /// <summary>Warm.</summary>
        /// <remarks>Used for errors.</remarks>
        #[description("Bright red")]
        Red,
        Green,
        /// Cool.
        Blue = 7,
    }
"#;

#[test]
fn members_keep_declaration_order() {
    let (desc, ids) = describe(COLOR, "Color");
    let desc = desc.unwrap();
    assert!(ids.is_empty());
    assert_eq!(desc.members, vec!["Red", "Green", "Blue"]);
    assert_eq!(desc.extension_name, "ColorEx");
    assert_eq!(desc.visibility, "pub");
    let keys: Vec<_> = desc.fields.keys().cloned().collect();
    assert_eq!(keys, desc.members);
}

#[test]
fn descriptions_and_docs_are_collected() {
    let (desc, _) = describe(COLOR, "Color");
    let desc = desc.unwrap();
    assert_eq!(desc.descriptions.len(), 1);
    assert_eq!(desc.descriptions["Red"], "Bright red");

    let red = &desc.fields["Red"];
    assert_eq!(red.value, "Red");
    assert_eq!(red.summary.as_deref(), Some("Warm."));
    assert_eq!(red.remarks.as_deref(), Some("Used for errors."));

    let green = &desc.fields["Green"];
    assert_eq!(green.description, None);
    assert_eq!(green.summary, None);

    let blue = &desc.fields["Blue"];
    assert_eq!(blue.summary.as_deref(), Some("Cool."));
    assert_eq!(blue.remarks, None);
}

#[test]
fn explicit_extension_name() {
    let (desc, _) = describe(
        r#"#[enum_transform(extension = "Palette")] enum Color { Red }"#,
        "Color"
    );
    let desc = desc.unwrap();
    assert_eq!(desc.extension_name, "Palette");
    assert_eq!(desc.visibility, "");
}

#[test]
fn invalid_extension_name_is_reported() {
    let (desc, ids) = describe(
        r#"#[enum_transform(extension = "not valid")] enum Color { Red }"#,
        "Color"
    );
    assert!(desc.is_none());
    assert_eq!(ids, vec!["ENUM0003"]);
}

#[test]
fn duplicate_transform_markers_skip_enum() {
    let (desc, ids) = describe("#[enum_transform] #[enum_transform] enum Color { Red }", "Color");
    assert!(desc.is_none());
    assert_eq!(ids, vec!["ENUM0001"]);
}

#[test]
fn data_variants_are_structural_errors() {
    let (desc, ids) = describe(
        "#[enum_transform] enum Shape { Dot, Circle(f32), Rect { w: f32, h: f32 } }",
        "Shape"
    );
    assert!(desc.is_none());
    assert_eq!(ids, vec!["ENUM0002", "ENUM0002"]);
}

#[test]
fn generic_enum_is_a_warning() {
    let (desc, ids) = describe("#[enum_transform] enum Slot<T> { Empty, Marker(T) }", "Slot");
    assert!(desc.is_none());
    assert_eq!(ids, vec!["ENUM0004"]);
}

#[test]
fn first_description_wins() {
    let (desc, ids) = describe(
        r#"
        #[enum_transform]
        enum Level {
            #[description("Low")]
            #[description("Minimal")]
            Low,
        }
        "#,
        "Level"
    );
    assert_eq!(desc.unwrap().descriptions["Low"], "Low");
    assert_eq!(ids, vec!["ENUM0005"]);
}

#[test]
fn malformed_transform_marker_is_reported() {
    let (desc, ids) = describe("#[enum_transform(extension = 1 + 2)] enum Color { Red }", "Color");
    assert!(desc.is_none());
    assert_eq!(ids, vec!["SYNTH0001"]);
}

#[test]
fn malformed_documentation_drops_only_that_member_text() {
    let (desc, ids) = describe(
        r#"
        #[enum_transform]
        enum Color {
            /// <summary>Broken
            Red,
            /// <summary>Fine.</summary>
            Green,
        }
        "#,
        "Color"
    );
    let desc = desc.unwrap();
    assert!(ids.is_empty());
    assert_eq!(desc.fields["Red"].summary, None);
    assert_eq!(desc.fields["Red"].remarks, None);
    assert_eq!(desc.fields["Green"].summary.as_deref(), Some("Fine."));

    let text = render_default(&desc);
    assert!(text.contains("Self::Green => Some(\"Fine.\"),"));
    assert!(!text.contains("Self::Red => Some("));
}

#[test]
fn renders_full_trait() {
    let (desc, _) = describe(
        r#"
        #[enum_transform]
        pub enum Mode {
            #[description("Read only")]
            Read,
            Write,
        }
        "#,
        "Mode"
    );
    let text = render_default(&desc.unwrap());
    let (header, body) = text.split_once('\n').unwrap();
    assert!(header.starts_with("// @generated by declsynth "));
    let expected = r#"// source: crate::Mode

/// Name and value operations for [`Mode`].
pub trait ModeEx: ::core::marker::Sized + 'static {
    /// Whether `name` is the name of a variant.
    fn is_defined(name: &str) -> bool;

    /// Variant named `name`, or an error naming the rejected input.
    fn parse(name: &str) -> ::core::result::Result<Self, crate::synth::UnknownVariantError>;

    /// Variant named `name`, if any.
    fn try_parse(name: &str) -> ::core::option::Option<Self>;

    /// Variant name.
    fn as_str(&self) -> &'static str;

    /// Label of the variant, falling back to its name.
    fn description(&self) -> &'static str;

    /// Variant names in declaration order.
    fn names() -> &'static [&'static str];

    /// Variants in declaration order.
    fn values() -> &'static [Self];

    /// Lazy sequence of variant names.
    fn iter_names() -> impl ::core::iter::Iterator<Item = &'static str>;

    /// Lazy sequence of variants.
    fn iter_values() -> impl ::core::iter::Iterator<Item = Self>;

    /// Number of variants.
    fn count() -> usize;
}

impl ModeEx for Mode {
    fn is_defined(name: &str) -> bool {
        Self::try_parse(name).is_some()
    }

    fn parse(name: &str) -> ::core::result::Result<Self, crate::synth::UnknownVariantError> {
        match name {
            "Read" => Ok(Self::Read),
            "Write" => Ok(Self::Write),
            _ => Err(crate::synth::UnknownVariantError::new("Mode", name)),
        }
    }

    fn try_parse(name: &str) -> ::core::option::Option<Self> {
        match name {
            "Read" => Some(Self::Read),
            "Write" => Some(Self::Write),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match *self {
            Self::Read => "Read",
            Self::Write => "Write",
        }
    }

    fn description(&self) -> &'static str {
        match *self {
            Self::Read => "Read only",
            _ => self.as_str(),
        }
    }

    fn names() -> &'static [&'static str] {
        &["Read", "Write"]
    }

    fn values() -> &'static [Self] {
        const VALUES: &[Mode] = &[Mode::Read, Mode::Write];
        VALUES
    }

    fn iter_names() -> impl ::core::iter::Iterator<Item = &'static str> {
        ["Read", "Write"].into_iter()
    }

    fn iter_values() -> impl ::core::iter::Iterator<Item = Self> {
        [Self::Read, Self::Write].into_iter()
    }

    fn count() -> usize {
        2
    }
}
"#;
    assert_eq!(body, expected);
}

#[test]
fn optional_lookups_follow_documentation() {
    let (desc, _) = describe(COLOR, "Color");
    let text = render_default(&desc.unwrap());
    assert!(text.contains("fn summary(&self) -> ::core::option::Option<&'static str>;"));
    assert!(text.contains("fn remarks(&self) -> ::core::option::Option<&'static str>;"));
    assert!(text.contains("Self::Blue => Some(\"Cool.\"),"));
    assert!(text.contains("Self::Red => Some(\"Used for errors.\"),"));

    let (plain, _) = describe("#[enum_transform] enum Bare { A, B }", "Bare");
    let text = render_default(&plain.unwrap());
    assert!(!text.contains("fn summary"));
    assert!(!text.contains("fn remarks"));
    assert!(text.contains("fn description(&self) -> &'static str {\n        self.as_str()\n    }"));
}

#[test]
fn fully_labelled_enum_has_no_fallback_arm() {
    let (desc, _) = describe(
        r#"#[enum_transform] enum On { #[description("yes")] Yes, #[description = "no"] No }"#,
        "On"
    );
    let text = render_default(&desc.unwrap());
    assert!(text.contains("Self::No => \"no\","));
    assert!(!text.contains("_ => self.as_str()"));
}

#[test]
fn rendered_trait_is_valid_rust() {
    let (desc, _) = describe(COLOR, "Color");
    let text = render_default(&desc.unwrap());
    let file = syn::parse_file(&text).unwrap();
    assert_eq!(file.items.len(), 2);
}

#[test]
fn labels_are_escaped() {
    let (desc, _) = describe(
        r#"#[enum_transform] enum Quote { #[description("say \"hi\"")] Hi }"#,
        "Quote"
    );
    let text = render_default(&desc.unwrap());
    assert!(text.contains(r#"Self::Hi => "say \"hi\"","#));
    syn::parse_file(&text).unwrap();
}

#[test]
fn empty_runtime_path_uses_bare_names() {
    let (desc, _) = describe("#[enum_transform] enum A { X }", "A");
    let text = render(&desc.unwrap(), &BuildMetadata::reproducible(), "");
    assert!(text.contains("Result<Self, UnknownVariantError>"));
}
