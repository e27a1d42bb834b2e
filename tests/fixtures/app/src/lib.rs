// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

// `broken.rs` stays on disk for discovery and is never compiled.
pub mod model;
pub mod synth;
pub mod ui;
