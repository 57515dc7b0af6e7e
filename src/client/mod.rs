// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The REST client and its request executor.
//!
//! All typed endpoint methods (see the `api` submodule) go through
//! [`Client::execute`], which:
//!
//! 1. builds the URL by appending the path to the configured host
//! 2. attaches the bearer token
//! 3. sends the request through the [`Transport`]
//! 4. maps the status code to an [`Error`] or to success
//! 5. hands the body of a successful response to a [`Decoder`]

mod api;

use std::borrow::Cow;

use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::protocol::{ClientConfig, Decoder, HttpRequest, HttpResponse, Transport};

/// Largest body preview emitted in debug mode.
const DEBUG_BODY_LIMIT: usize = 4096;

/// Error body sent along with `400 Bad Request`.
#[derive(Debug, Default, Deserialize)]
struct BadRequestBody {
    #[serde(default)]
    message: String,
}

/// Client for the Home Assistant REST API.
///
/// The client holds no mutable state: it may be shared between tasks as
/// long as its transport can.
///
/// # Examples
///
/// ```no_run
/// use hass_rest::{Client, ClientConfig};
/// use hass_rest::command::DefaultServiceCommand;
///
/// # async fn example() -> hass_rest::Result<()> {
/// let client = Client::new(ClientConfig::new("http://homeassistant.local:8123", "token"))?;
///
/// client.ping().await?;
/// let kitchen = client.state("light.kitchen").await?;
/// println!("kitchen is {}", kitchen.state);
///
/// client
///     .call_service(&DefaultServiceCommand::turn_light_off("light.kitchen"))
///     .await?;
/// # Ok(())
/// # }
/// ```
///
/// Sharing a transport between clients:
///
/// ```no_run
/// use std::sync::Arc;
/// use hass_rest::{Client, ClientConfig};
///
/// # fn example() -> hass_rest::Result<()> {
/// let http = Arc::new(reqwest::Client::new());
/// let home = Client::with_transport(ClientConfig::new("http://home:8123", "a"), Arc::clone(&http))?;
/// let cabin = Client::with_transport(ClientConfig::new("http://cabin:8123", "b"), http)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client<T = reqwest::Client> {
    config: ClientConfig,
    authorization: HeaderValue,
    transport: T,
}

impl Client {
    /// Creates a client with its own `reqwest` transport.
    ///
    /// The transport uses the timeout of `config`, which defaults to
    /// [`ClientConfig::DEFAULT_TIMEOUT`] (10 seconds). It bounds the whole
    /// request including reading the body, so raise it with
    /// [`ClientConfig::with_timeout`] for long history queries or large
    /// camera snapshots. Clients built with [`Client::with_transport`]
    /// leave timeouts to that transport.
    ///
    /// # Errors
    ///
    /// Returns error if the token is not a valid header value or the HTTP
    /// client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = config.build_http_client().map_err(Error::ClientBuild)?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client sending requests through `transport`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidToken` if the token is not a valid
    /// header value.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self> {
        let authorization = config.authorization()?;
        Ok(Self {
            config,
            authorization,
            transport,
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn client_config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends one request and decodes the response.
    ///
    /// `path` is appended verbatim to the configured host and must already
    /// contain any query string. `body`, when given, is sent as JSON.
    ///
    /// Returns the success status together with the decoded body, so
    /// callers can tell `201 Created` from `200 OK`.
    ///
    /// # Errors
    ///
    /// - `Error::Transport` if no response was received
    /// - `Error::NotFound`, `Error::Unauthorized`, `Error::BadRequest` or
    ///   `Error::UnexpectedStatus` for a non-2xx status
    /// - `Error::Decode` if the decoder rejects the body
    pub async fn execute<D: Decoder>(
        &self,
        method: Method,
        path: &str,
        body: Option<Bytes>,
        decoder: D,
    ) -> Result<(StatusCode, D::Output)> {
        let url = self.config.url(path);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.authorization.clone());
        if body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        if self.config.debug() {
            tracing::debug!(method = %method, url = %url, "Sending request");
        }

        let request = HttpRequest {
            method: method.clone(),
            url: url.clone(),
            headers,
            body,
        };
        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(source) => {
                return Err(Error::Transport {
                    method,
                    url,
                    source,
                });
            }
        };

        tracing::trace!(status = response.status.as_u16(), url = %url, "Received response");

        let HttpResponse { status, body } = response;
        classify(status, &body)?;

        if self.config.debug() && decoder.is_textual() {
            let (text, truncated) = preview(&body);
            tracing::debug!(
                method = %method,
                url = %url,
                status = status.as_u16(),
                truncated,
                body = %text,
                "Received response body"
            );
        }

        match decoder.decode(body) {
            Ok(output) => Ok((status, output)),
            Err(source) => Err(Error::Decode {
                method,
                url,
                source,
            }),
        }
    }
}

/// Maps a response status to success or to the matching error.
///
/// Any 2xx status is a success.
fn classify(status: StatusCode, body: &[u8]) -> Result<()> {
    match status {
        StatusCode::NOT_FOUND => Err(Error::NotFound),
        StatusCode::UNAUTHORIZED => Err(Error::Unauthorized),
        StatusCode::BAD_REQUEST => {
            let message = serde_json::from_slice::<BadRequestBody>(body)
                .unwrap_or_default()
                .message;
            Err(Error::BadRequest { message })
        }
        status if status.is_success() => Ok(()),
        status => Err(Error::UnexpectedStatus(status.as_u16())),
    }
}

/// Returns at most `DEBUG_BODY_LIMIT` bytes of the body as text, and
/// whether it was cut.
fn preview(body: &[u8]) -> (Cow<'_, str>, bool) {
    let end = body.len().min(DEBUG_BODY_LIMIT);
    (String::from_utf8_lossy(&body[..end]), end < body.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_success_range() {
        assert!(classify(StatusCode::OK, b"").is_ok());
        assert!(classify(StatusCode::CREATED, b"").is_ok());
        assert!(classify(StatusCode::NO_CONTENT, b"").is_ok());
    }

    #[test]
    fn classify_dedicated_errors() {
        assert!(matches!(
            classify(StatusCode::NOT_FOUND, b""),
            Err(Error::NotFound)
        ));
        assert!(matches!(
            classify(StatusCode::UNAUTHORIZED, b""),
            Err(Error::Unauthorized)
        ));
    }

    #[test]
    fn classify_bad_request_message() {
        let err = classify(StatusCode::BAD_REQUEST, br#"{"message":"bad filter"}"#).unwrap_err();
        assert!(matches!(err, Error::BadRequest { message } if message == "bad filter"));
    }

    #[test]
    fn classify_bad_request_unparseable_body() {
        let err = classify(StatusCode::BAD_REQUEST, b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, Error::BadRequest { message } if message.is_empty()));
    }

    #[test]
    fn classify_other_statuses() {
        assert!(matches!(
            classify(StatusCode::MOVED_PERMANENTLY, b""),
            Err(Error::UnexpectedStatus(301))
        ));
        assert!(matches!(
            classify(StatusCode::METHOD_NOT_ALLOWED, b""),
            Err(Error::UnexpectedStatus(405))
        ));
        assert!(matches!(
            classify(StatusCode::INTERNAL_SERVER_ERROR, b""),
            Err(Error::UnexpectedStatus(500))
        ));
    }

    #[test]
    fn preview_caps_body() {
        let body = vec![b'a'; DEBUG_BODY_LIMIT + 10];
        let (text, truncated) = preview(&body);
        assert_eq!(text.len(), DEBUG_BODY_LIMIT);
        assert!(truncated);

        let (text, truncated) = preview(b"short");
        assert_eq!(text, "short");
        assert!(!truncated);
    }
}
