//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate. Supports 8-bit
//! grayscale (expanded to RGB) and 24-bit RGB.

use crate::{IoError, IoResult};
use hsvpick_core::RgbImage;
use jpeg_decoder::{Decoder, PixelFormat};
use std::io::Read;

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<RgbImage> {
    let mut decoder = Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::InvalidData("JPEG header missing after decode".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;

    match info.pixel_format {
        PixelFormat::RGB24 => Ok(RgbImage::from_raw(width, height, pixels)?),
        PixelFormat::L8 => {
            let mut data = Vec::with_capacity(pixels.len() * 3);
            for &gray in &pixels {
                data.extend_from_slice(&[gray, gray, gray]);
            }
            Ok(RgbImage::from_raw(width, height, data)?)
        }
        other => Err(IoError::UnsupportedFormat(format!(
            "unsupported JPEG pixel format: {:?}",
            other
        ))),
    }
}
