// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Server configuration documents.

use serde::{Deserialize, Serialize};

/// Current configuration, as returned by `GET /api/config`.
///
/// # Examples
///
/// ```
/// use hass_rest::types::Config;
///
/// let json = r#"{
///     "components": ["http", "light"],
///     "location_name": "Home",
///     "latitude": 52.37,
///     "longitude": 4.89,
///     "elevation": 0,
///     "time_zone": "Europe/Amsterdam",
///     "unit_system": {"length": "km", "mass": "g", "temperature": "°C", "volume": "L"},
///     "version": "2024.1.0"
/// }"#;
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.location_name, "Home");
/// assert_eq!(config.unit_system.temperature, "°C");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Loaded integrations.
    pub components: Vec<String>,
    /// Configuration directory on the server.
    pub config_dir: String,
    /// Elevation in meters.
    pub elevation: i32,
    /// Latitude of the home location.
    pub latitude: f64,
    /// Longitude of the home location.
    pub longitude: f64,
    /// Name of the home location.
    pub location_name: String,
    /// IANA time zone name.
    pub time_zone: String,
    /// Units used for display.
    pub unit_system: UnitSystem,
    /// Server version.
    pub version: String,
    /// Directories the server is allowed to read from.
    pub whitelist_external_dirs: Vec<String>,
}

/// Units used by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitSystem {
    /// Length unit, e.g. `km`.
    pub length: String,
    /// Mass unit, e.g. `g`.
    pub mass: String,
    /// Temperature unit, e.g. `°C`.
    pub temperature: String,
    /// Volume unit, e.g. `L`.
    pub volume: String,
}

/// Discovery information, as returned by `GET /api/discovery_info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryInfo {
    /// URL the server is reachable at.
    pub base_url: String,
    /// Name of the home location.
    pub location_name: String,
    /// Whether the legacy API password is required.
    pub requires_api_password: bool,
    /// Server version.
    pub version: String,
}

/// Result of `POST /api/config/core/check_config`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigCheck {
    /// `"valid"` or `"invalid"`.
    pub result: String,
    /// Error report, when the configuration is invalid.
    pub errors: Option<String>,
    /// Warning report, if any.
    pub warnings: Option<String>,
}

impl ConfigCheck {
    /// Returns true when the server reported the configuration as valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.result == "valid"
    }
}

/// Acknowledgement body of the form `{"message": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiMessage {
    /// Message text.
    pub message: String,
}
