//! PNG image format support
//!
//! Reads PNG images using the `png` crate. Every supported layout is
//! expanded to 3-channel RGB: grayscale replicates into all channels and
//! alpha is dropped.

use crate::{IoError, IoResult};
use hsvpick_core::RgbImage;
use png::{BitDepth, ColorType, Decoder};
use std::io::{BufRead, Seek};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<RgbImage> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG bit depth: {:?}",
            bit_depth
        )));
    }

    // Samples per pixel for the supported layouts
    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "indexed PNG images are not supported".to_string(),
            ));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;
    buf.truncate(output_info.buffer_size());

    let expected = (width as usize) * (height as usize) * samples;
    if buf.len() < expected {
        return Err(IoError::InvalidData(format!(
            "PNG frame too short: {} bytes for {}x{} with {} samples",
            buf.len(),
            width,
            height,
            samples
        )));
    }

    let mut data = Vec::with_capacity((width as usize) * (height as usize) * 3);
    for px in buf[..expected].chunks_exact(samples) {
        match samples {
            1 => {
                data.extend_from_slice(&[px[0], px[0], px[0]]);
            }
            2 => {
                data.extend_from_slice(&[px[0], px[0], px[0]]);
            }
            3 | 4 => {
                data.extend_from_slice(&[px[0], px[1], px[2]]);
            }
            _ => unreachable!(),
        }
    }

    Ok(RgbImage::from_raw(width, height, data)?)
}
