// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Standalone runtime artifacts.
//!
//! Generated code refers to a handful of support types through the
//! configured runtime path (`crate::synth` by default). These artifacts
//! define them. Each is emitted once per run while its generator is
//! enabled, whether or not any declaration needs it, and the host includes
//! them in the runtime module:
//!
//! ```rust,ignore
//! // src/synth.rs
//! include!(concat!(env!("OUT_DIR"), "/EnumTransform.g.rs"));
//! include!(concat!(env!("OUT_DIR"), "/NotifyProperty.g.rs"));
//! include!(concat!(env!("OUT_DIR"), "/Command.g.rs"));
//! ```

use crate::{
    config::{BuildMetadata, Capabilities},
    render::{Artifact, ArtifactText, header_lines}
};

/// Artifact name of the enum runtime.
pub const ENUM_RUNTIME: &str = "EnumTransform.g";
/// Artifact name of the property runtime.
pub const NOTIFY_RUNTIME: &str = "NotifyProperty.g";
/// Artifact name of the command runtime.
pub const COMMAND_RUNTIME: &str = "Command.g";

const UNKNOWN_VARIANT_ERROR: &str = r#"/// A name did not match any variant of an enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariantError {
    /// Enum type name.
    pub type_name: &'static str,
    /// Rejected input.
    pub value: ::std::string::String,
}

impl UnknownVariantError {
    /// Error for `value` rejected by `type_name`.
    pub fn new(type_name: &'static str, value: &str) -> Self {
        Self {
            type_name,
            value: value.to_owned(),
        }
    }
}

impl ::core::fmt::Display for UnknownVariantError {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "`{}` is not a variant of `{}`", self.value, self.type_name)
    }
}

impl ::std::error::Error for UnknownVariantError {}"#;

const PROPERTY_CHANGED_EVENT: &str = r#"type PropertyChangedHandler = ::std::boxed::Box<dyn Fn(&str) + Send + Sync>;

/// Subscribers notified with the accessor name of a changed property.
#[derive(Default)]
pub struct $event {
    handlers: ::std::sync::Mutex<::std::vec::Vec<PropertyChangedHandler>>,
}

impl $event {
    /// Event without subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler`.
    pub fn subscribe(&self, handler: impl Fn(&str) + Send + Sync + 'static) {
        self.handlers
            .lock()
            .unwrap_or_else(::std::sync::PoisonError::into_inner)
            .push(::std::boxed::Box::new(handler));
    }

    /// Call every handler with `property`.
    pub fn raise(&self, property: &str) {
        let handlers = self
            .handlers
            .lock()
            .unwrap_or_else(::std::sync::PoisonError::into_inner);
        for handler in handlers.iter() {
            handler(property);
        }
    }

    /// Number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers
            .lock()
            .unwrap_or_else(::std::sync::PoisonError::into_inner)
            .len()
    }
}

impl ::core::fmt::Debug for $event {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.debug_struct("$event")
            .field("handlers", &self.handler_count())
            .finish()
    }
}

/// Types that announce property changes.
pub trait $notify {
    /// Event raised on every change.
    fn property_changed(&self) -> &$event;

    /// Raise the event for `property`.
    fn on_property_changed(&self, property: &str) {
        self.property_changed().raise(property);
    }
}"#;

const COMMAND: &str = r#"type CanExecuteChangedHandler = ::std::boxed::Box<dyn Fn() + Send + Sync>;

/// Action bound to a target, guarded by an optional predicate.
pub trait $command<T> {
    /// Run the action.
    fn execute(&self, target: &mut T);

    /// Whether the action may run.
    fn can_execute(&self, target: &T) -> bool;

    /// Register a handler called when `can_execute` may have changed.
    fn subscribe_can_execute_changed(&self, handler: ::std::boxed::Box<dyn Fn() + Send + Sync>);

    /// Notify every `can_execute` subscriber.
    fn raise_can_execute_changed(&self);
}

/// Default [`$command`] wrapping plain function pointers.
pub struct RelayCommand<T> {
    execute: fn(&mut T),
    can_execute: ::core::option::Option<fn(&T) -> bool>,
    handlers: ::std::sync::Mutex<::std::vec::Vec<CanExecuteChangedHandler>>,
}

impl<T> RelayCommand<T> {
    /// Command running `execute`, allowed when `can_execute` says so.
    pub fn new(execute: fn(&mut T), can_execute: ::core::option::Option<fn(&T) -> bool>) -> Self {
        Self {
            execute,
            can_execute,
            handlers: ::std::sync::Mutex::new(::std::vec::Vec::new()),
        }
    }
}

impl<T> $command<T> for RelayCommand<T> {
    fn execute(&self, target: &mut T) {
        (self.execute)(target);
    }

    fn can_execute(&self, target: &T) -> bool {
        self.can_execute.is_none_or(|predicate| predicate(target))
    }

    fn subscribe_can_execute_changed(&self, handler: ::std::boxed::Box<dyn Fn() + Send + Sync>) {
        self.handlers
            .lock()
            .unwrap_or_else(::std::sync::PoisonError::into_inner)
            .push(handler);
    }

    fn raise_can_execute_changed(&self) {
        let handlers = self
            .handlers
            .lock()
            .unwrap_or_else(::std::sync::PoisonError::into_inner);
        for handler in handlers.iter() {
            handler();
        }
    }
}

impl<T> ::core::fmt::Debug for RelayCommand<T> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.debug_struct("RelayCommand")
            .field("has_can_execute", &self.can_execute.is_some())
            .finish_non_exhaustive()
    }
}"#;

fn runtime_artifact(name: &str, meta: &BuildMetadata, body: &str) -> Artifact {
    let mut text = ArtifactText::new(header_lines(meta, None));
    text.section(body);
    Artifact::new(name, text.render())
}

/// Replace `$slot` placeholders with configured names.
fn fill(template: &str, slots: &[(&str, &str)]) -> String {
    slots
        .iter()
        .fold(template.to_string(), |text, (slot, name)| text.replace(slot, name))
}

/// `UnknownVariantError`, returned by generated `parse`.
pub fn enum_runtime(meta: &BuildMetadata) -> Artifact {
    runtime_artifact(ENUM_RUNTIME, meta, UNKNOWN_VARIANT_ERROR)
}

/// The event type and change-notification trait, named after `capabilities`.
pub fn notify_runtime(meta: &BuildMetadata, capabilities: &Capabilities) -> Artifact {
    let body = fill(
        PROPERTY_CHANGED_EVENT,
        &[
            ("$event", capabilities.event_type.as_str()),
            ("$notify", capabilities.notify.as_str())
        ]
    );
    runtime_artifact(NOTIFY_RUNTIME, meta, &body)
}

/// The command trait, named after `capabilities`, and the default
/// `RelayCommand`.
pub fn command_runtime(meta: &BuildMetadata, capabilities: &Capabilities) -> Artifact {
    let body = fill(COMMAND, &[("$command", capabilities.command.as_str())]);
    runtime_artifact(COMMAND_RUNTIME, meta, &body)
}
