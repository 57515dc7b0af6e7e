// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity states and state history.

use chrono::{DateTime, FixedOffset};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Attribute holding the display name of an entity.
const FRIENDLY_NAME: &str = "friendly_name";

/// The state of one entity.
///
/// # Examples
///
/// ```
/// use hass_rest::types::StateEntity;
///
/// let json = r#"{
///     "entity_id": "sun.sun",
///     "state": "below_horizon",
///     "attributes": {"friendly_name": "Sun", "elevation": -12.5},
///     "last_changed": "2016-05-30T21:43:29.204838+00:00",
///     "last_updated": "2016-05-30T21:50:30.529465+00:00",
///     "context": {"id": "01H", "parent_id": null, "user_id": null}
/// }"#;
/// let state: StateEntity = serde_json::from_str(json).unwrap();
/// assert_eq!(state.domain(), "sun");
/// assert_eq!(state.friendly_name(), Some("Sun"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateEntity {
    /// Domain qualified id, e.g. `light.kitchen`.
    pub entity_id: String,
    /// State value.
    pub state: String,
    /// Attributes of the entity.
    #[serde(default)]
    pub attributes: Map<String, Value>,
    /// Last time the state value changed.
    pub last_changed: DateTime<FixedOffset>,
    /// Last time the state or its attributes were written.
    pub last_updated: DateTime<FixedOffset>,
    /// Context of the change that produced this state.
    #[serde(default)]
    pub context: StateContext,
}

impl StateEntity {
    /// Returns the `friendly_name` attribute, if it is a string.
    #[must_use]
    pub fn friendly_name(&self) -> Option<&str> {
        friendly_name(&self.attributes)
    }

    /// Returns the domain part of the entity id.
    #[must_use]
    pub fn domain(&self) -> &str {
        domain(&self.entity_id)
    }
}

/// Identifies the change that produced a state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateContext {
    /// Context id.
    pub id: String,
    /// Id of the parent context, if any.
    pub parent_id: Option<String>,
    /// User that caused the change, if any.
    pub user_id: Option<String>,
}

/// Outcome of `POST /api/states/{entity_id}`.
#[derive(Debug, Clone, PartialEq)]
pub struct StateResponse {
    /// The state as stored by the server.
    pub entity: StateEntity,
    /// Response status: `201 Created` for a new entity, `200 OK` for an update.
    pub status: StatusCode,
}

impl StateResponse {
    /// Returns true when the entity did not exist before.
    #[must_use]
    pub fn is_created(&self) -> bool {
        self.status == StatusCode::CREATED
    }
}

/// One historical state of an entity.
///
/// With a minimal response, only the first change of each entity carries
/// the entity id and attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityChange {
    /// Domain qualified id (empty on trimmed entries).
    #[serde(default)]
    pub entity_id: String,
    /// State value.
    pub state: String,
    /// Attributes of the entity.
    #[serde(default)]
    pub attributes: Map<String, Value>,
    /// Time the state value changed.
    pub last_changed: DateTime<FixedOffset>,
    /// Time the state was written (absent on trimmed entries).
    #[serde(default)]
    pub last_updated: Option<DateTime<FixedOffset>>,
}

impl EntityChange {
    /// Returns the `friendly_name` attribute, if it is a string.
    #[must_use]
    pub fn friendly_name(&self) -> Option<&str> {
        friendly_name(&self.attributes)
    }
}

/// State history: one inner list per entity, in chronological order.
pub type StateChanges = Vec<Vec<EntityChange>>;

fn friendly_name(attributes: &Map<String, Value>) -> Option<&str> {
    attributes.get(FRIENDLY_NAME).and_then(Value::as_str)
}

fn domain(entity_id: &str) -> &str {
    entity_id
        .split_once('.')
        .map_or(entity_id, |(domain, _)| domain)
}
