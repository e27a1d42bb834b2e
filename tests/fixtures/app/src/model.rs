// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use declsynth_markers::{NotifyProperties, enum_transform};

/// Access level of a profile.
#[enum_transform]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// <summary>Read access.</summary>
    /// <remarks>Default for guests.</remarks>
    #[description("Read only")]
    Read,
    Write,
    /// <summary>Everything.</summary>
    #[description = "Full control"]
    Admin,
}

#[enum_transform(extension = "StatusOps")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Status {
    Active,
    Archived,
}

#[derive(NotifyProperties)]
pub struct Profile {
    changed: crate::synth::PropertyChangedEvent,
    /// Name shown to other users.
    #[notify_property]
    _UserName: String,
    #[notify_property(name = "Handle")]
    login: String,
    #[notify_property]
    access: Access,
}

impl Profile {
    pub fn new(login: &str) -> Self {
        Self {
            changed:   crate::synth::PropertyChangedEvent::new(),
            _UserName: String::new(),
            login:     login.to_owned(),
            access:    Access::Read
        }
    }
}

include!(concat!(env!("OUT_DIR"), "/Access.g.rs"));
include!(concat!(env!("OUT_DIR"), "/Status.g.rs"));
include!(concat!(env!("OUT_DIR"), "/Profile.properties.g.rs"));
include!(concat!(env!("OUT_DIR"), "/Profile.NotifyPropertyChanged.g.rs"));
