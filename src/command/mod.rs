// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request payloads that change server state.
//!
//! # Available Payloads
//!
//! | Type | Endpoint | Example |
//! |------|----------|---------|
//! | [`DefaultServiceCommand`] | `POST /api/services/{domain}/{service}` | `light.turn_on` |
//! | [`StateUpdate`] | `POST /api/states/{entity_id}` | set `sensor.x` to `21.5` |
//!
//! # Service Commands
//!
//! A service command names the service to call (domain and service) and
//! carries the body sent with the call. The domain and service only build
//! the request path and never appear in the body.
//!
//! ```
//! use hass_rest::command::{DefaultServiceCommand, ServiceCommand};
//!
//! let cmd = DefaultServiceCommand::turn_light_on("light.kitchen");
//!
//! assert_eq!(cmd.domain(), "light");
//! assert_eq!(cmd.service(), "turn_on");
//! assert_eq!(
//!     serde_json::to_string(&cmd).unwrap(),
//!     r#"{"entity_id":"light.kitchen"}"#
//! );
//! ```

mod service;
mod state;

pub use service::DefaultServiceCommand;
pub use state::StateUpdate;

use serde::Serialize;

/// A service call that can be sent with [`Client::call_service`](crate::Client::call_service).
///
/// The serialized value is the request body.
pub trait ServiceCommand: Serialize {
    /// Returns the service domain, e.g. `"light"`.
    fn domain(&self) -> &str;

    /// Returns the service name, e.g. `"turn_on"`.
    fn service(&self) -> &str;
}
