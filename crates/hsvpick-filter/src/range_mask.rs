//! Binary containment masks
//!
//! Turns a [`ColorRange`] plus an HSV frame into a mask of the pixels
//! inside the range. The S and V windows are plain linear intervals; the
//! hue window is circular and may wrap past 0, in which case no single
//! linear query can produce the mask - it has to be the union of the two
//! complementary linear hue queries. A single-query rendition silently
//! produces a wrong mask whenever the selected hue sits near 0/179.

use crate::error::FilterResult;
use hsvpick_core::{ColorRange, HUE_RANGE, Hsv, HsvImage, Mask};

/// Mask the pixels whose channels all lie inside the linear windows
/// `[lo.h, hi.h]`, `[lo.s, hi.s]`, `[lo.v, hi.v]` (inclusive).
///
/// The hue interval here is linear, not circular; wrap handling belongs to
/// [`range_mask`].
pub fn in_range(img: &HsvImage, lo: Hsv, hi: Hsv) -> FilterResult<Mask> {
    let mut mask = Mask::new(img.width(), img.height())?;
    for y in 0..img.height() {
        for x in 0..img.width() {
            let (h, s, v) = img.get_pixel_unchecked(x, y);
            let (h, s, v) = (h as i32, s as i32, v as i32);
            if lo.h <= h && h <= hi.h && lo.s <= s && s <= hi.s && lo.v <= v && v <= hi.v {
                mask.set_on(x, y);
            }
        }
    }
    Ok(mask)
}

/// Mask the pixels of an HSV frame that fall inside a color range.
///
/// When the hue window wraps (`max < min`), the mask is built as the union
/// of two linear queries, `[min, 179]` and `[0, max]`, each intersected
/// with the same S and V windows.
pub fn range_mask(img: &HsvImage, range: &ColorRange) -> FilterResult<Mask> {
    let (hmin, hmax) = range.hue_window();
    let (smin, smax) = range.sat_window();
    let (vmin, vmax) = range.val_window();

    if hmax >= hmin {
        in_range(
            img,
            Hsv::new(hmin, smin, vmin),
            Hsv::new(hmax, smax, vmax),
        )
    } else {
        let mut mask = in_range(
            img,
            Hsv::new(hmin, smin, vmin),
            Hsv::new(HUE_RANGE - 1, smax, vmax),
        )?;
        let low_side = in_range(
            img,
            Hsv::new(0, smin, vmin),
            Hsv::new(hmax, smax, vmax),
        )?;
        mask.or_with(&low_side)?;
        Ok(mask)
    }
}
