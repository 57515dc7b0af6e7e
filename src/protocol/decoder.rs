// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response body decoders.

use std::marker::PhantomData;

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::error::DecodeError;
use crate::types::JpegImage;

/// Turns the body of a successful response into a typed value.
pub trait Decoder {
    /// The decoded value.
    type Output;

    /// Whether the body is text that may be previewed in diagnostics.
    ///
    /// Binary decoders return `false` so their bodies are never logged.
    fn is_textual(&self) -> bool {
        true
    }

    /// Decodes the complete response body.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError` if the body does not have the expected shape.
    fn decode(self, body: Bytes) -> Result<Self::Output, DecodeError>;
}

/// Decodes a JSON document into `T`.
///
/// # Examples
///
/// ```
/// use hass_rest::protocol::{Decoder, Json};
///
/// let value = Json::<Vec<u8>>::new().decode("[1, 2, 3]".into()).unwrap();
/// assert_eq!(value, vec![1, 2, 3]);
/// ```
#[derive(Debug)]
pub struct Json<T>(PhantomData<fn() -> T>);

impl<T> Json<T> {
    /// Creates a JSON decoder.
    #[must_use]
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Json<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> Decoder for Json<T> {
    type Output = T;

    fn decode(self, body: Bytes) -> Result<T, DecodeError> {
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Ignores the body. Success is signaled by the status code alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl Decoder for Discard {
    type Output = ();

    fn decode(self, _body: Bytes) -> Result<(), DecodeError> {
        Ok(())
    }
}

/// Reads the whole body as UTF-8 text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl Decoder for PlainText {
    type Output = String;

    fn decode(self, body: Bytes) -> Result<String, DecodeError> {
        Ok(String::from_utf8(body.to_vec())?)
    }
}

/// Interprets the body as a JPEG image.
#[derive(Debug, Clone, Copy, Default)]
pub struct Jpeg;

impl Decoder for Jpeg {
    type Output = JpegImage;

    fn is_textual(&self) -> bool {
        false
    }

    fn decode(self, body: Bytes) -> Result<JpegImage, DecodeError> {
        JpegImage::from_bytes(body)
    }
}
