// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport plumbing between the [`Client`](crate::Client) and the server.
//!
//! The client never talks to the network directly. Every request goes
//! through a [`Transport`], which the caller supplies (or lets the client
//! build from a [`ClientConfig`]). This keeps connection pooling, TLS and
//! timeouts in the hands of the caller and makes the client easy to test.
//!
//! # Components
//!
//! - [`Transport`]: sends one [`HttpRequest`] and returns one [`HttpResponse`]
//! - [`ClientConfig`]: host, access token and diagnostics settings
//! - [`Decoder`]: turns a successful response body into a typed value
//!   ([`Json`], [`Discard`], [`PlainText`], [`Jpeg`])

mod decoder;
mod http;

use std::future::Future;
use std::sync::Arc;

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};

use crate::error::TransportError;

pub use decoder::{Decoder, Discard, Jpeg, Json, PlainText};
pub use http::ClientConfig;

/// A fully built request, ready to be sent.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL (configured host followed by the endpoint path).
    pub url: String,
    /// Request headers, including `Authorization`.
    pub headers: HeaderMap,
    /// Optional request body.
    pub body: Option<Bytes>,
}

/// A response as returned by a [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Response status code.
    pub status: StatusCode,
    /// Complete response body.
    pub body: Bytes,
}

impl HttpResponse {
    /// Creates a response from a status and a body.
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Something able to perform one HTTP round trip.
///
/// Implemented for [`reqwest::Client`], and for shared handles (`Arc<T>`,
/// `&T`) so the transport can outlive or be shared between clients.
///
/// Implementations must not retry. Cancellation is the caller's business:
/// dropping the returned future abandons the request.
pub trait Transport {
    /// Sends the request and waits for the complete response.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` when no response could be obtained.
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send {
        (**self).send(request)
    }
}

impl<T: Transport> Transport for &T {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send {
        (**self).send(request)
    }
}
