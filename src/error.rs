// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `hass_rest` library.
//!
//! Every client call returns [`Result`]. Errors fall into three groups:
//!
//! - rejected before any request is sent ([`Error::Validation`])
//! - classified from the HTTP status of the response ([`Error::NotFound`],
//!   [`Error::Unauthorized`], [`Error::BadRequest`], [`Error::UnexpectedStatus`])
//! - failures while talking to the server or reading its answer
//!   ([`Error::Transport`], [`Error::Decode`], [`Error::Encode`])
//!
//! [`Error::ClientBuild`] is only returned by [`Client::new`](crate::Client::new).

use reqwest::Method;
use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A required argument was missing or malformed. No request was sent.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The server answered `404 Not Found`.
    #[error("not found")]
    NotFound,

    /// The server answered `401 Unauthorized`.
    #[error("unauthorized")]
    Unauthorized,

    /// The server answered `400 Bad Request`.
    ///
    /// `message` is taken from the `{"message": ...}` error body and is
    /// empty when that body could not be parsed.
    #[error("bad request: {message}")]
    BadRequest {
        /// Message supplied by the server.
        message: String,
    },

    /// The server answered with any other non-success status.
    #[error("unexpected response status {0}")]
    UnexpectedStatus(u16),

    /// The request could not be completed (DNS, connection, timeout...).
    #[error("request [{method}] {url} failed: {source}")]
    Transport {
        /// HTTP method of the failed request.
        method: Method,
        /// Full URL of the failed request.
        url: String,
        /// Underlying transport failure.
        #[source]
        source: TransportError,
    },

    /// The response body did not have the expected shape.
    #[error("failed to decode response body of [{method}] {url}: {source}")]
    Decode {
        /// HTTP method of the request.
        method: Method,
        /// Full URL of the request.
        url: String,
        /// Underlying decoding failure.
        #[source]
        source: DecodeError,
    },

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// The default HTTP transport could not be created.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// Errors raised before a request is dispatched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Entity id was empty.
    #[error("entity id must not be empty")]
    EmptyEntityId,

    /// Service domain was empty.
    #[error("service domain must not be empty")]
    EmptyDomain,

    /// Service name was empty.
    #[error("service name must not be empty")]
    EmptyService,

    /// Template source was empty.
    #[error("template must not be empty")]
    EmptyTemplate,

    /// Event type was empty.
    #[error("event type must not be empty")]
    EmptyEventType,

    /// Access token cannot be sent as an HTTP header value.
    #[error("access token contains characters not allowed in a header")]
    InvalidToken,
}

/// Failures reported by a [`Transport`](crate::protocol::Transport).
#[derive(Debug, Error)]
pub enum TransportError {
    /// Error reported by `reqwest`.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Error reported by a custom transport.
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Wraps an arbitrary error raised by a custom transport.
    pub fn other(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Other(err.into())
    }
}

/// Failures while decoding a successful response body.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Body was not the expected JSON document.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// Body was not valid UTF-8 text.
    #[error("body is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Body was not a decodable JPEG image.
    #[error("invalid JPEG image: {0}")]
    InvalidJpeg(#[from] jpeg_decoder::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
