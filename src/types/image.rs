// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Camera snapshots.

use bytes::Bytes;
use jpeg_decoder::PixelFormat;

use crate::error::DecodeError;

/// A decoded JPEG image as returned by `GET /api/camera_proxy/{entity_id}`.
///
/// Holds both the encoded stream, as sent by the server, and the decoded
/// pixels. A value of this type has been fully decoded, so a truncated or
/// corrupt snapshot never makes it this far.
#[derive(Debug, Clone, PartialEq)]
pub struct JpegImage {
    data: Bytes,
    pixels: Vec<u8>,
    width: u16,
    height: u16,
    pixel_format: PixelFormat,
}

impl JpegImage {
    /// Decodes an encoded JPEG image.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::InvalidJpeg` if the data is not a complete,
    /// decodable JPEG stream.
    pub fn from_bytes(data: Bytes) -> Result<Self, DecodeError> {
        let mut decoder = jpeg_decoder::Decoder::new(&data[..]);
        let pixels = decoder.decode()?;
        let info = decoder.info().ok_or_else(|| {
            jpeg_decoder::Error::Format("no frame header in image".to_owned())
        })?;

        Ok(Self {
            data,
            pixels,
            width: info.width,
            height: info.height,
            pixel_format: info.pixel_format,
        })
    }

    /// Returns the width in pixels.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Returns the height in pixels.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Returns the layout of [`pixels`](Self::pixels).
    #[must_use]
    pub fn pixel_format(&self) -> PixelFormat {
        self.pixel_format
    }

    /// Returns the decoded pixels, row by row.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns the encoded image.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the image and returns the encoded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.data
    }
}
