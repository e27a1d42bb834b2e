// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

pub struct TrackedCommand<T> {
    execute:     fn(&mut T),
    can_execute: Option<fn(&T) -> bool>,
}

impl<T> TrackedCommand<T> {
    pub fn new(execute: fn(&mut T), can_execute: Option<fn(&T) -> bool>) -> Self {
        Self { execute, can_execute }
    }
}

impl<T> crate::synth::Command<T> for TrackedCommand<T> {
    fn can_execute(&self, target: &T) -> bool {
        self.can_execute.is_none_or(|predicate| predicate(target))
    }

    fn execute(&self, target: &mut T) {
        (self.execute)(target);
    }

    fn subscribe_can_execute_changed(&self, _handler: Box<dyn Fn() + Send + Sync>) {}

    fn raise_can_execute_changed(&self) {}
}

pub struct PlainCommand;
