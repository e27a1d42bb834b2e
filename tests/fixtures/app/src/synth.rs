// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

include!(concat!(env!("OUT_DIR"), "/EnumTransform.g.rs"));
include!(concat!(env!("OUT_DIR"), "/NotifyProperty.g.rs"));
include!(concat!(env!("OUT_DIR"), "/Command.g.rs"));
