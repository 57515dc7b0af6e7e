// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity targeted service calls.

use serde::{Deserialize, Serialize};

use crate::command::ServiceCommand;

/// Calls a service on a single entity.
///
/// Only `entity_id` is sent in the body.
///
/// # Examples
///
/// ```
/// use hass_rest::command::{DefaultServiceCommand, ServiceCommand};
///
/// let cmd = DefaultServiceCommand::new("switch", "toggle", "switch.fan");
/// assert_eq!(cmd.domain(), "switch");
/// assert_eq!(cmd.entity_id, "switch.fan");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultServiceCommand {
    /// Service name.
    #[serde(skip)]
    pub service: String,
    /// Service domain.
    #[serde(skip)]
    pub domain: String,
    /// Targeted entity.
    pub entity_id: String,
}

impl DefaultServiceCommand {
    /// Creates a command calling `domain.service` on `entity_id`.
    #[must_use]
    pub fn new(
        domain: impl Into<String>,
        service: impl Into<String>,
        entity_id: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            domain: domain.into(),
            entity_id: entity_id.into(),
        }
    }

    /// Creates a `light.turn_on` command.
    #[must_use]
    pub fn turn_light_on(entity_id: impl Into<String>) -> Self {
        Self::new("light", "turn_on", entity_id)
    }

    /// Creates a `light.turn_off` command.
    #[must_use]
    pub fn turn_light_off(entity_id: impl Into<String>) -> Self {
        Self::new("light", "turn_off", entity_id)
    }
}

impl ServiceCommand for DefaultServiceCommand {
    fn domain(&self) -> &str {
        &self.domain
    }

    fn service(&self) -> &str {
        &self.service
    }
}
