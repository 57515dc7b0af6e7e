// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Data types exchanged with the Home Assistant REST API.
//!
//! These are plain records mirroring the JSON documents the server sends
//! back. They are created for one call and handed over to the caller.
//!
//! # Types
//!
//! - [`Config`], [`UnitSystem`], [`DiscoveryInfo`], [`ConfigCheck`] - server configuration
//! - [`Event`] - event types with their listener count
//! - [`ServiceDomain`], [`Service`], [`ServiceField`] - callable services
//! - [`StateEntity`], [`StateContext`], [`StateResponse`] - current entity states
//! - [`EntityChange`], [`StateChanges`] - state history
//! - [`LogbookRecord`] - logbook entries
//! - [`JpegImage`], [`PixelFormat`] - camera snapshots
//! - [`ApiMessage`] - `{"message": ...}` acknowledgements

mod config;
mod event;
mod image;
mod logbook;
mod service;
mod state;

pub use config::{ApiMessage, Config, ConfigCheck, DiscoveryInfo, UnitSystem};
pub use event::Event;
pub use image::JpegImage;
pub use jpeg_decoder::PixelFormat;
pub use logbook::LogbookRecord;
pub use service::{Service, ServiceDomain, ServiceField};
pub use state::{EntityChange, StateChanges, StateContext, StateEntity, StateResponse};
