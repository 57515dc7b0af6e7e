// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event listing.

use serde::{Deserialize, Serialize};

/// An event type and the number of listeners subscribed to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    /// Event type, e.g. `state_changed`.
    pub event: String,
    /// Number of listeners.
    pub listener_count: u32,
}
