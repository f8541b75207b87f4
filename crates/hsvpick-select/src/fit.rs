//! Adaptive range fitting
//!
//! Grows a [`ColorRange`] just enough to include a new sample, one axis at
//! a time, minimizing growth rather than simply widening toward the sample.
//! The hue axis is circular and moves whichever interval edge is nearer to
//! the sample; the S and V axes are linear.
//!
//! The alternative entry point [`reset_to_sample`] collapses the range to
//! the minimum representable width around the sample, starting a brand-new
//! tight selection.

use hsvpick_core::{ColorRange, HUE_RANGE, Hsv, HueEdge, hue_contains, hue_span, nearer_hue_edge};

/// Integer ceiling of x/2 for non-negative x.
#[inline]
fn ceil_half(x: i32) -> i32 {
    (x + 1) / 2
}

/// Grow the range minimally so that the sample is included on all axes.
///
/// Axes are fitted independently; an axis already containing its sample
/// component is left untouched, so fitting the same sample twice changes
/// state only on the first call.
pub fn include_sample(range: &mut ColorRange, sample: Hsv) {
    fit_hue(range, sample.h);
    fit_sat(range, sample.s);
    fit_val(range, sample.v);
}

/// Collapse all three tolerances to width 1, centered exactly on the
/// sample.
pub fn reset_to_sample(range: &mut ColorRange, sample: Hsv) {
    range.set_range_h(1);
    range.set_range_s(1);
    range.set_range_v(1);
    range.set_h(sample.h);
    range.set_s(sample.s);
    range.set_v(sample.v);
}

fn fit_hue(range: &mut ColorRange, hue: i32) {
    let (min, max) = range.hue_window();
    if hue_contains(hue, min, max) {
        return;
    }

    // Move the nearer edge to the sample, then recenter on the new span
    // (not on the sample).
    let (new_min, new_max) = match nearer_hue_edge(hue, min, max) {
        (HueEdge::Max, _) => (min, hue),
        (HueEdge::Min, _) => (hue, max),
    };
    let tolerance = ceil_half(hue_span(new_min, new_max));
    range.set_range_h(tolerance);
    range.set_h((new_min + tolerance) % HUE_RANGE);
}

fn fit_sat(range: &mut ColorRange, sat: i32) {
    let (lo, hi) = range.sat_window();
    if sat > hi {
        // Keep the low edge, recenter around it.
        range.set_range_s(ceil_half(sat - lo));
        range.set_s(lo + range.range_s());
    } else if sat < lo {
        // Keep the high edge's width but center on the sample, not on
        // hi - tolerance. Intentionally asymmetric with the branch above.
        range.set_range_s(ceil_half(hi - sat));
        range.set_s(sat + range.range_s());
    }
}

fn fit_val(range: &mut ColorRange, val: i32) {
    let (lo, hi) = range.val_window();
    if val > hi {
        range.set_range_v(ceil_half(val - lo));
        range.set_v(lo + range.range_v());
    } else if val < lo {
        range.set_range_v(ceil_half(hi - val));
        range.set_v(val + range.range_v());
    }
}
