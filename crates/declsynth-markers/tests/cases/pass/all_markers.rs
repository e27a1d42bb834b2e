// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use declsynth_markers::{NotifyProperties, command, enum_transform};

/// Editing mode.
#[enum_transform(extension = "ModeOps")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Reading only.
    #[description("Read only")]
    Read,
    #[description = "Read and write"]
    Write,
}

#[derive(Debug, Default, NotifyProperties)]
pub struct Form {
    #[notify_property]
    title: String,
    #[notify_property(name = "Handle", observable = false)]
    login: String,
}

pub struct Editor {
    dirty: bool,
}

impl Editor {
    #[command]
    fn on_save_executed(&mut self) {
        self.dirty = false;
    }

    #[command]
    fn can_save_execute(&self) -> bool {
        self.dirty
    }

    #[command(name = "store", can_execute = can_save_execute, wrapper = RelayLike)]
    fn persist(&mut self) {
        self.on_save_executed();
    }
}

fn main() {
    let mut editor = Editor { dirty: true };
    assert!(editor.can_save_execute());
    editor.persist();
    assert!(!editor.can_save_execute());

    let form = Form::default();
    assert!(form.title.is_empty());
    assert!(form.login.is_empty());

    assert_ne!(Mode::Read, Mode::Write);
}
