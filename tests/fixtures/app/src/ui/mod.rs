// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

mod widgets;

use declsynth_markers::command;

pub struct Editor {
    dirty: bool,
}

impl Editor {
    pub fn new() -> Self {
        Self { dirty: false }
    }

    pub fn touch(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
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

    #[command(wrapper = widgets::TrackedCommand)]
    fn on_reload_executed(&mut self) {}

    #[command(wrapper = widgets::PlainCommand)]
    fn on_close_executed(&mut self) {}
}

include!(concat!(env!("OUT_DIR"), "/Editor.commands.g.rs"));
