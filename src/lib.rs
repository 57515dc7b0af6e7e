// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `hass_rest` - A typed async client for the Home Assistant REST API.
//!
//! Every endpoint of the REST API is exposed as a method of [`Client`]
//! returning typed data. All of them funnel through a single request
//! executor ([`Client::execute`]) which attaches the bearer token, maps
//! status codes to [`Error`] variants and decodes the body.
//!
//! # Supported Endpoints
//!
//! | Method | Endpoint |
//! |--------|----------|
//! | [`Client::ping`] | `GET /api/` |
//! | [`Client::config`] | `GET /api/config` |
//! | [`Client::discovery_info`] | `GET /api/discovery_info` |
//! | [`Client::events`] | `GET /api/events` |
//! | [`Client::services`] | `GET /api/services` |
//! | [`Client::history`] | `GET /api/history/period/<start>?...` |
//! | [`Client::logbook`] | `GET /api/logbook/<start>?...` |
//! | [`Client::states`] | `GET /api/states` |
//! | [`Client::state`] | `GET /api/states/{entity_id}` |
//! | [`Client::set_state`] | `POST /api/states/{entity_id}` |
//! | [`Client::error_log`] | `GET /api/error_log` |
//! | [`Client::camera_snapshot`] | `GET /api/camera_proxy/{entity_id}` |
//! | [`Client::call_service`] | `POST /api/services/{domain}/{service}` |
//! | [`Client::fire_event`] | `POST /api/events/{event_type}` |
//! | [`Client::render_template`] | `POST /api/template` |
//! | [`Client::check_config`] | `POST /api/config/core/check_config` |
//!
//! # Quick Start
//!
//! ```no_run
//! use hass_rest::{Client, ClientConfig};
//! use hass_rest::command::DefaultServiceCommand;
//! use hass_rest::filter::StateChangesFilter;
//!
//! #[tokio::main]
//! async fn main() -> hass_rest::Result<()> {
//!     let config = ClientConfig::new("http://homeassistant.local:8123", "long-lived-token")
//!         .with_debug(true);
//!     let client = Client::new(config)?;
//!
//!     client.ping().await?;
//!
//!     for state in client.states().await? {
//!         println!("{} = {}", state.entity_id, state.state);
//!     }
//!
//!     client
//!         .call_service(&DefaultServiceCommand::turn_light_on("light.kitchen"))
//!         .await?;
//!
//!     let history = client
//!         .history(&StateChangesFilter::default().with_entity_id("light.kitchen"))
//!         .await?;
//!     println!("{} entities in history", history.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Identifiers are checked before anything is sent: an empty entity id,
//! domain, service, event type or template yields [`Error::Validation`]
//! without touching the network.
//!
//! ```
//! use hass_rest::{Client, ClientConfig, Error, ValidationError};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let client = Client::new(ClientConfig::new("http://127.0.0.1:1", "token")).unwrap();
//! let err = client.state("").await.unwrap_err();
//! assert!(matches!(err, Error::Validation(ValidationError::EmptyEntityId)));
//! # }
//! ```
//!
//! # Custom Transports
//!
//! Anything implementing [`protocol::Transport`] can carry the requests,
//! which is how the client is driven in tests or behind a proxy.

mod client;
pub mod command;
pub mod error;
pub mod filter;
pub mod protocol;
pub mod types;

pub use client::Client;
pub use command::{DefaultServiceCommand, ServiceCommand, StateUpdate};
pub use error::{DecodeError, Error, Result, TransportError, ValidationError};
pub use filter::{LogbookFilter, QueryFilter, StateChangesFilter};
pub use protocol::{ClientConfig, Transport};
pub use types::{JpegImage, StateEntity};
