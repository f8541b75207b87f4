//! Running sample averaging
//!
//! Blends repeated samples into the current range's center as a running
//! integer average. Tolerances are left alone; this mode refines where the
//! selection sits, not how wide it is.

use hsvpick_core::{ColorRange, Hsv};

/// Fold one more sample into the running average of the range's center.
///
/// `count` is the number of samples already folded in; each axis becomes
/// `round((current*count + sample) / (count + 1))`. Hue is averaged as a
/// plain integer, not circularly - this mode is for refining an estimate
/// that is already close, never for spanning the wrap boundary.
pub fn fold_sample(range: &mut ColorRange, sample: Hsv, count: u32) {
    let n = count as i32;
    range.set_h(fold(range.h(), sample.h, n));
    range.set_s(fold(range.s(), sample.s, n));
    range.set_v(fold(range.v(), sample.v, n));
}

/// Rounded integer running average step.
#[inline]
fn fold(current: i32, sample: i32, n: i32) -> i32 {
    (current * n + sample + (n + 1) / 2) / (n + 1)
}
