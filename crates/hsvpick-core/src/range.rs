//! The selected color range
//!
//! [`ColorRange`] is the central value type of the picker: a center color in
//! HSV plus a half-width tolerance per axis. The hue axis is circular, so
//! its effective interval may wrap past 0; the S and V windows are linear
//! and clamped to [0,255] when applied, not when stored.

use crate::color::{HUE_RANGE, Hsv};
use crate::hue::{hue_bounds, hue_contains};

/// A selected center color with per-axis half-width tolerances.
///
/// Field domains, enforced by the setters as silent clamps:
/// - `h` in [0,179], `s` and `v` in [0,255]
/// - `range_h` in [0,179] (evaluated clamped to 89, half the hue circle)
/// - `range_s` and `range_v` in [0,255]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRange {
    h: i32,
    s: i32,
    v: i32,
    range_h: i32,
    range_s: i32,
    range_v: i32,
}

impl Default for ColorRange {
    fn default() -> Self {
        Self {
            h: 90,
            s: 240,
            v: 200,
            range_h: 10,
            range_s: 50,
            range_v: 50,
        }
    }
}

impl ColorRange {
    /// Create a range from raw values; every value is clamped into its
    /// field's domain.
    pub fn new(h: i32, s: i32, v: i32, range_h: i32, range_s: i32, range_v: i32) -> Self {
        let mut range = Self::default();
        range.set_h(h);
        range.set_s(s);
        range.set_v(v);
        range.set_range_h(range_h);
        range.set_range_s(range_s);
        range.set_range_v(range_v);
        range
    }

    /// Hue center.
    #[inline]
    pub fn h(&self) -> i32 {
        self.h
    }

    /// Saturation center.
    #[inline]
    pub fn s(&self) -> i32 {
        self.s
    }

    /// Value center.
    #[inline]
    pub fn v(&self) -> i32 {
        self.v
    }

    /// Hue tolerance (half-width).
    #[inline]
    pub fn range_h(&self) -> i32 {
        self.range_h
    }

    /// Saturation tolerance (half-width).
    #[inline]
    pub fn range_s(&self) -> i32 {
        self.range_s
    }

    /// Value tolerance (half-width).
    #[inline]
    pub fn range_v(&self) -> i32 {
        self.range_v
    }

    /// The center color as an [`Hsv`] triple.
    pub fn center(&self) -> Hsv {
        Hsv::new(self.h, self.s, self.v)
    }

    /// Set the hue center, clamped to [0,179].
    pub fn set_h(&mut self, h: i32) {
        self.h = h.clamp(0, HUE_RANGE - 1);
    }

    /// Set the saturation center, clamped to [0,255].
    pub fn set_s(&mut self, s: i32) {
        self.s = s.clamp(0, 255);
    }

    /// Set the value center, clamped to [0,255].
    pub fn set_v(&mut self, v: i32) {
        self.v = v.clamp(0, 255);
    }

    /// Set the hue tolerance, clamped to [0,179].
    ///
    /// Values above 89 are accepted but behave like 89 when the hue window
    /// is evaluated.
    pub fn set_range_h(&mut self, range_h: i32) {
        self.range_h = range_h.clamp(0, HUE_RANGE - 1);
    }

    /// Set the saturation tolerance, clamped to [0,255].
    pub fn set_range_s(&mut self, range_s: i32) {
        self.range_s = range_s.clamp(0, 255);
    }

    /// Set the value tolerance, clamped to [0,255].
    pub fn set_range_v(&mut self, range_v: i32) {
        self.range_v = range_v.clamp(0, 255);
    }

    /// The effective hue interval as (min, max).
    ///
    /// `max < min` signals the interval wraps past 0.
    pub fn hue_window(&self) -> (i32, i32) {
        hue_bounds(self.h, self.range_h)
    }

    /// The effective saturation window, clamped to [0,255].
    pub fn sat_window(&self) -> (i32, i32) {
        ((self.s - self.range_s).max(0), (self.s + self.range_s).min(255))
    }

    /// The effective value window, clamped to [0,255].
    pub fn val_window(&self) -> (i32, i32) {
        ((self.v - self.range_v).max(0), (self.v + self.range_v).min(255))
    }

    /// Check whether a sample color falls inside the range on all three
    /// axes.
    pub fn contains(&self, sample: Hsv) -> bool {
        let (hmin, hmax) = self.hue_window();
        let (smin, smax) = self.sat_window();
        let (vmin, vmax) = self.val_window();
        hue_contains(sample.h, hmin, hmax)
            && smin <= sample.s
            && sample.s <= smax
            && vmin <= sample.v
            && sample.v <= vmax
    }
}
