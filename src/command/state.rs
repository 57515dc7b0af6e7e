// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Body of a state write.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// New state for an entity, sent to `POST /api/states/{entity_id}`.
///
/// # Examples
///
/// ```
/// use hass_rest::command::StateUpdate;
///
/// let update = StateUpdate::new("21.5").with_attribute("unit_of_measurement", "°C");
/// assert_eq!(
///     serde_json::to_string(&update).unwrap(),
///     r#"{"state":"21.5","attributes":{"unit_of_measurement":"°C"}}"#
/// );
///
/// // Attributes are omitted when none are set.
/// let bare = StateUpdate::new("on");
/// assert_eq!(serde_json::to_string(&bare).unwrap(), r#"{"state":"on"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateUpdate {
    /// State value.
    pub state: String,
    /// Attributes replacing the current ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Map<String, Value>>,
}

impl StateUpdate {
    /// Creates an update with the given state and no attributes.
    #[must_use]
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            attributes: None,
        }
    }

    /// Adds one attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Replaces all attributes.
    #[must_use]
    pub fn with_attributes(mut self, attributes: Map<String, Value>) -> Self {
        self.attributes = Some(attributes);
        self
    }
}
