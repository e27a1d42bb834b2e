// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Behaviour of the code the build script generated for this crate.

use std::sync::{Arc, Mutex};

use declsynth_fixture_app::{
    model::{Access, AccessEx, Profile},
    synth::{Command, NotifyPropertyChanged},
    ui::Editor
};

#[test]
fn enum_extension_round_trips_names() {
    assert_eq!(Access::parse("Admin"), Ok(Access::Admin));
    assert_eq!(Access::try_parse("Write"), Some(Access::Write));
    assert_eq!(Access::try_parse("Owner"), None);

    let err = Access::parse("Owner").unwrap_err();
    assert_eq!(err.type_name, "Access");
    assert_eq!(err.value, "Owner");

    assert_eq!(Access::names(), &["Read", "Write", "Admin"]);
    assert_eq!(Access::count(), 3);
    assert_eq!(
        Access::iter_values().collect::<Vec<_>>(),
        vec![Access::Read, Access::Write, Access::Admin]
    );
}

#[test]
fn enum_extension_exposes_documentation() {
    assert_eq!(Access::Read.description(), "Read only");
    assert_eq!(Access::Write.description(), "Write");
    assert_eq!(Access::Admin.description(), "Full control");
    assert_eq!(Access::Read.summary(), Some("Read access."));
    assert_eq!(Access::Write.summary(), None);
    assert_eq!(Access::Read.remarks(), Some("Default for guests."));
}

#[test]
fn setters_notify_with_accessor_names() {
    let mut profile = Profile::new("ann");
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    profile
        .property_changed()
        .subscribe(move |name| sink.lock().unwrap().push(name.to_string()));

    assert!(profile.set_user_name("Ann".to_string()));
    assert!(!profile.set_user_name("Ann".to_string()));
    assert!(profile.set_handle("ann2".to_string()));
    assert!(profile.set_access(Access::Admin));

    assert_eq!(profile.user_name(), "Ann");
    assert_eq!(profile.handle(), "ann2");
    assert_eq!(*profile.access(), Access::Admin);
    assert_eq!(*seen.lock().unwrap(), vec!["user_name", "handle", "access"]);
}

#[test]
fn save_command_follows_its_predicate() {
    let mut editor = Editor::new();
    let save = Editor::save_command();
    assert!(std::ptr::eq(save, Editor::save_command()));

    assert!(!save.can_execute(&editor));
    editor.touch();
    assert!(save.can_execute(&editor));
    save.execute(&mut editor);
    assert!(!editor.is_dirty());
}

#[test]
fn wrapped_command_runs_without_predicate() {
    let mut editor = Editor::new();
    let reload = Editor::reload_command();
    assert!(reload.can_execute(&editor));
    reload.execute(&mut editor);
}
