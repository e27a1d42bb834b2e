// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use super::*;
use crate::model::{DeclKind, MarkerValue, Receiver};

const SOURCE: &str = r#"
    /// Palette colour.
    #[enum_transform(extension = "ColorExt")]
    pub enum Color {
        /// <summary>Warm.</summary>
        #[description("Red colour")]
        Red = 1,
        Green,
    }

    pub struct Editor {
        #[notify_property(name = "Handle", observable = false)]
        _user_name: String,
        events: crate::synth::PropertyChangedEvent,
    }

    impl Editor {
        #[command(can_execute = can_save, wrapper = ui::SaveCommand)]
        pub fn on_save_executed(&mut self) {}

        pub fn can_save(&self) -> bool { true }

        pub fn new() -> Self { todo!() }
    }

    impl Orphan {
        #[command]
        fn lost(&self) {}
    }

    pub mod ui {
        #[derive(Debug, Clone)]
        pub struct SaveCommand;

        impl crate::synth::Command<super::Editor> for SaveCommand {}
    }
"#;

fn model() -> SynModel {
    SynModel::from_source(SOURCE)
}

fn key(path: &str) -> TypeKey {
    TypeKey::from_qualified(path)
}

#[test]
fn collects_types_with_module_paths() {
    let model = model();
    let keys: Vec<_> = model.types().iter().map(|t| t.key.to_string()).collect();
    assert_eq!(keys, vec!["crate::Color", "crate::Editor", "crate::ui::SaveCommand"]);
    assert!(model.parse_failures().is_empty());
}

#[test]
fn enum_variants_keep_order_and_docs() {
    let model = model();
    let color = model.type_decl(&key("crate::Color")).unwrap();
    assert_eq!(color.visibility, "pub");
    assert_eq!(color.docs.as_deref(), Some("Palette colour."));
    let variants = color.variants().unwrap();
    let names: Vec<_> = variants.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Red", "Green"]);
    assert_eq!(variants[0].discriminant.as_deref(), Some("1"));
    assert_eq!(variants[0].docs.as_deref(), Some("<summary>Warm.</summary>"));
    assert_eq!(variants[0].markers[0].first_str(), Some("Red colour"));
}

#[test]
fn marker_arguments_are_typed() {
    let model = model();
    let editor = model.type_decl(&key("crate::Editor")).unwrap();
    let field = &editor.fields().unwrap()[0];
    assert_eq!(field.name.as_deref(), Some("_user_name"));
    assert_eq!(field.ty, "String");
    let marker = &field.markers[0];
    assert_eq!(marker.name, "notify_property");
    assert_eq!(marker.arg("name"), Some(&MarkerValue::Str("Handle".into())));
    assert_eq!(marker.arg("observable"), Some(&MarkerValue::Bool(false)));
    assert!(!marker.malformed);

    let events = &editor.fields().unwrap()[1];
    assert_eq!(events.ty, "crate::synth::PropertyChangedEvent");
}

#[test]
fn methods_are_bound_to_owner_in_order() {
    let model = model();
    let methods = model.methods_of(&key("crate::Editor"));
    let names: Vec<_> = methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["on_save_executed", "can_save", "new"]);

    let save = methods[0];
    assert_eq!(save.receiver, Receiver::RefMut);
    assert_eq!(save.params, 1);
    assert!(save.returns_unit());
    assert_eq!(
        save.markers[0].arg("wrapper"),
        Some(&MarkerValue::Path("ui::SaveCommand".into()))
    );
    assert!(methods[1].returns_bool());
    assert!(methods[1].is_receiver_only());
    assert_eq!(methods[2].receiver, Receiver::None);
    assert_eq!(methods[2].return_type.as_deref(), Some("Self"));
}

#[test]
fn method_of_unknown_type_does_not_resolve() {
    let model = model();
    let lost = model
        .syntax()
        .iter()
        .find(|d| d.kind == DeclKind::Method && d.name == "lost")
        .unwrap();
    assert_eq!(lost.attribute_names, vec!["command"]);
    assert!(model.resolve(lost).is_none());
}

#[test]
fn syntax_entries_resolve_to_members() {
    let model = model();
    let field = model
        .syntax()
        .iter()
        .find(|d| d.kind == DeclKind::Field && d.name == "_user_name")
        .unwrap();
    match model.resolve(field) {
        Some(Resolved::Field { owner, field }) => {
            assert_eq!(owner.name, "Editor");
            assert_eq!(field.index, 0);
        }
        other => panic!("unexpected resolution: {other:?}")
    }
}

#[test]
fn capabilities_from_impls_and_derives() {
    let model = model();
    let cmd = key("crate::ui::SaveCommand");
    assert!(model.implements(&cmd, "Command"));
    assert!(model.implements(&cmd, "crate::synth::Command"));
    assert!(model.implements(&cmd, "Debug"));
    assert!(!model.implements(&cmd, "NotifyPropertyChanged"));
}

#[test]
fn find_type_resolves_relative_paths() {
    let model = model();
    assert_eq!(
        model.find_type("crate", "ui::SaveCommand").map(|t| t.name.as_str()),
        Some("SaveCommand")
    );
    assert_eq!(
        model.find_type("crate::ui", "super::Editor").map(|t| t.name.as_str()),
        Some("Editor")
    );
    assert_eq!(
        model.find_type("crate::ui", "SaveCommand").map(|t| t.name.as_str()),
        Some("SaveCommand")
    );
    assert_eq!(
        model.find_type("crate::ui", "Color").map(|t| t.name.as_str()),
        Some("Color")
    );
    assert!(model.find_type("crate", "Missing").is_none());
    assert!(model.find_type("crate", "Self").is_none());
}

#[test]
fn ambiguous_bare_name_does_not_resolve() {
    let model = SynModel::from_source(
        r#"
        mod a { pub struct Item; }
        mod b { pub struct Item; }
        "#
    );
    assert!(model.find_type("crate", "Item").is_none());
    assert!(model.find_type("crate::a", "Item").is_some());
}

#[test]
fn malformed_marker_is_flagged() {
    let model = SynModel::from_source(
        r#"
        impl Vm {
            #[command(name = 1 + 2)]
            fn go(&self) {}
        }
        struct Vm;
        "#
    );
    let method = model.methods_of(&key("crate::Vm"))[0];
    assert!(method.markers[0].malformed);
}

#[test]
fn unparsable_file_is_skipped() {
    let files = vec![
        SourceFile::new("good.rs", "crate::good", "pub struct Fine;"),
        SourceFile::new("bad.rs", "crate::bad", "pub struct {"),
    ];
    let model = SynModel::from_files(&files);
    assert_eq!(model.types().len(), 1);
    assert_eq!(model.parse_failures().len(), 1);
    assert_eq!(model.parse_failures()[0].path, PathBuf::from("bad.rs"));
}

#[test]
fn locations_are_one_based() {
    let model = SynModel::from_source("struct A;\nenum B { X }");
    let b = model.type_decl(&key("crate::B")).unwrap();
    assert_eq!((b.location.line, b.location.column), (2, 6));
    assert_eq!(b.location.file, "lib.rs");
}
