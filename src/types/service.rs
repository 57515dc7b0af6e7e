// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Service descriptions, as returned by `GET /api/services`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// All services exposed under one domain.
///
/// # Examples
///
/// ```
/// use hass_rest::types::ServiceDomain;
///
/// let json = r#"{
///     "domain": "light",
///     "services": {
///         "turn_on": {
///             "name": "Turn on",
///             "description": "Turn on one or more lights.",
///             "fields": {
///                 "brightness": {
///                     "name": "Brightness value",
///                     "required": false,
///                     "example": 120,
///                     "selector": {"number": {"min": 0, "max": 255}}
///                 }
///             }
///         }
///     }
/// }"#;
/// let domain: ServiceDomain = serde_json::from_str(json).unwrap();
/// let turn_on = domain.service("turn_on").unwrap();
/// assert!(turn_on.fields["brightness"].selector.contains_key("number"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceDomain {
    /// Domain name, e.g. `light`.
    pub domain: String,
    /// Services keyed by service name.
    pub services: HashMap<String, Service>,
}

impl ServiceDomain {
    /// Looks up a service by name.
    #[must_use]
    pub fn service(&self, name: &str) -> Option<&Service> {
        self.services.get(name)
    }
}

/// A callable service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    /// Human readable name.
    pub name: String,
    /// Description of what the service does.
    pub description: String,
    /// Parameters keyed by field name.
    pub fields: HashMap<String, ServiceField>,
    /// Entities the service can target, as described by the server.
    pub target: Option<Value>,
}

/// One parameter of a [`Service`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceField {
    /// Whether the field is hidden behind advanced mode.
    pub advanced: bool,
    /// Human readable name.
    pub name: String,
    /// Description of the field.
    pub description: String,
    /// Whether the field must be provided.
    pub required: bool,
    /// Example value.
    pub example: Option<Value>,
    /// UI selector, keyed by selector type (e.g. `number`, `entity`).
    pub selector: HashMap<String, Value>,
}
