// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Logbook entries, as returned by `GET /api/logbook`.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One logbook entry.
///
/// Entries describe either a state change (`state` and `entity_id` set)
/// or a free form event (`message` set).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogbookRecord {
    /// Time of the entry.
    pub when: DateTime<FixedOffset>,
    /// Display name of the entity or event source.
    #[serde(default)]
    pub name: String,
    /// New state, for state change entries.
    #[serde(default)]
    pub state: Option<String>,
    /// Entity the entry refers to.
    #[serde(default)]
    pub entity_id: Option<String>,
    /// Icon of the entity.
    #[serde(default)]
    pub icon: Option<String>,
    /// Free form message, for event entries.
    #[serde(default)]
    pub message: Option<String>,
    /// Domain of the entity or integration.
    #[serde(default)]
    pub domain: Option<String>,
    /// User that triggered the entry.
    #[serde(default)]
    pub context_user_id: Option<String>,
}
