//! Preview composition
//!
//! Builds the live-preview frame the GUI shows: the containment mask is
//! replicated into all three channels and OR'd with the original image, so
//! matching pixels burn to white while the rest of the frame stays visible
//! underneath.

use crate::error::FilterResult;
use hsvpick_core::{Error, Mask, RgbImage};

/// Combine an RGB frame with a containment mask for display.
///
/// # Errors
///
/// Returns a dimension mismatch error if the mask and frame differ in
/// size.
pub fn overlay_mask(img: &RgbImage, mask: &Mask) -> FilterResult<RgbImage> {
    if img.width() != mask.width() || img.height() != mask.height() {
        return Err(Error::DimensionMismatch {
            expected: (img.width(), img.height()),
            actual: (mask.width(), mask.height()),
        }
        .into());
    }

    let mut out = RgbImage::new(img.width(), img.height())?;
    for y in 0..img.height() {
        for x in 0..img.width() {
            let (r, g, b) = img.get_pixel_unchecked(x, y);
            let m = if mask.is_on(x, y) { 255 } else { 0 };
            out.set_pixel_unchecked(x, y, r | m, g | m, b | m);
        }
    }
    Ok(out)
}
