// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Client configuration and the `reqwest` transport.

use std::fmt;
use std::time::Duration;

use reqwest::header::HeaderValue;

use crate::error::{TransportError, ValidationError};
use crate::protocol::{HttpRequest, HttpResponse, Transport};

// ============================================================================
// ClientConfig
// ============================================================================

/// Configuration of a [`Client`](crate::Client).
///
/// Immutable once built: the builder methods consume and return `self`.
///
/// # Examples
///
/// ```
/// use hass_rest::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new("http://homeassistant.local:8123", "my-token")
///     .with_debug(true)
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.host(), "http://homeassistant.local:8123");
/// assert!(config.debug());
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    host: String,
    token: String,
    debug: bool,
    timeout: Duration,
}

impl ClientConfig {
    /// Default request timeout, applied when the client builds its own transport.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration for the given host and long-lived access token.
    ///
    /// # Arguments
    ///
    /// * `host` - Base URL of the server, e.g. `http://192.168.1.10:8123`.
    ///   Endpoint paths are appended verbatim, so omit the trailing slash.
    /// * `token` - Long-lived access token sent as a bearer token
    #[must_use]
    pub fn new(host: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            token: token.into(),
            debug: false,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Enables or disables request/response diagnostics.
    ///
    /// When enabled, every request and a capped preview of every textual
    /// response body is emitted as a `tracing` debug event.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the access token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns whether diagnostics are enabled.
    #[must_use]
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the absolute URL for an endpoint path.
    ///
    /// Host and path are concatenated as-is.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.host)
    }

    /// Builds the `Authorization` header value for the access token.
    pub(crate) fn authorization(&self) -> Result<HeaderValue, ValidationError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|_| ValidationError::InvalidToken)?;
        value.set_sensitive(true);
        Ok(value)
    }

    /// Builds a `reqwest` client honoring this configuration.
    pub(crate) fn build_http_client(&self) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder().timeout(self.timeout).build()
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host", &self.host)
            .field("token", &"<redacted>")
            .field("debug", &self.debug)
            .field("timeout", &self.timeout)
            .finish()
    }
}

// ============================================================================
// reqwest transport
// ============================================================================

impl Transport for reqwest::Client {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .request(request.method, &request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        // Reading the body to the end hands the connection back to the pool.
        let body = response.bytes().await?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = ClientConfig::new("http://ha.local:8123", "abc");
        assert_eq!(config.host(), "http://ha.local:8123");
        assert_eq!(config.token(), "abc");
        assert!(!config.debug());
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn config_builder_chain() {
        let config = ClientConfig::new("http://ha.local:8123", "abc")
            .with_debug(true)
            .with_timeout(Duration::from_secs(3));
        assert!(config.debug());
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn url_is_plain_concatenation() {
        let config = ClientConfig::new("http://ha.local:8123/", "abc");
        assert_eq!(config.url("/api/"), "http://ha.local:8123//api/");
    }

    #[test]
    fn debug_output_redacts_token() {
        let config = ClientConfig::new("http://ha.local:8123", "super-secret");
        let printed = format!("{config:?}");
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn authorization_header() {
        let config = ClientConfig::new("http://ha.local:8123", "abc");
        let value = config.authorization().unwrap();
        assert!(value.is_sensitive());
        assert_eq!(value.to_str().unwrap(), "Bearer abc");
    }

    #[test]
    fn authorization_rejects_newline() {
        let config = ClientConfig::new("http://ha.local:8123", "abc\ndef");
        assert_eq!(
            config.authorization().unwrap_err(),
            ValidationError::InvalidToken
        );
    }
}
