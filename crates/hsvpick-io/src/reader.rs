//! Image reading dispatch

use crate::format::{ImageFormat, detect_format};
use crate::{IoResult, jpeg, png};
use hsvpick_core::RgbImage;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read an image from a file path, detecting the format from its header.
///
/// # Errors
///
/// Fails for absent or unreadable files, unrecognized formats, and decode
/// errors. The caller treats any of these as fatal at startup.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<RgbImage> {
    let format = detect_format(&path)?;
    let file = File::open(&path)?;
    let reader = BufReader::new(file);
    match format {
        ImageFormat::Png => png::read_png(reader),
        ImageFormat::Jpeg => jpeg::read_jpeg(reader),
    }
}
