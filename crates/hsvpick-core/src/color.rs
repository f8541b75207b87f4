//! HSV color values and RGB conversion
//!
//! Uses the OpenCV-style 8-bit HSV convention: hue runs 0..179 (not 0..359)
//! so it fits a byte, a saturation of 255 is a fully saturated color, and a
//! value of 255 is brightest.
//!
//! Hue correspondence:
//! - 0: red
//! - 30: yellow
//! - 60: green
//! - 90: cyan
//! - 120: blue
//! - 150: magenta

use crate::buffer::{HsvImage, RgbImage};

/// Number of distinct hue values; hue N wraps to 0.
pub const HUE_RANGE: i32 = 180;

/// HSV color values.
///
/// Ranges: h [0..179] (h=180 wraps to 0), s [0..255], v [0..255].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: i32,
    pub s: i32,
    pub v: i32,
}

impl Hsv {
    /// Create a new HSV color.
    pub fn new(h: i32, s: i32, v: i32) -> Self {
        Self { h, s, v }
    }
}

/// Convert RGB to HSV color space.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let ri = r as i32;
    let gi = g as i32;
    let bi = b as i32;

    let min = ri.min(gi).min(bi);
    let max = ri.max(gi).max(bi);
    let delta = max - min;

    let v = max;
    if delta == 0 {
        return Hsv { h: 0, s: 0, v };
    }

    let s = (255.0 * delta as f32 / max as f32 + 0.5) as i32;
    let h_raw = if ri == max {
        (gi - bi) as f32 / delta as f32
    } else if gi == max {
        2.0 + (bi - ri) as f32 / delta as f32
    } else {
        4.0 + (ri - gi) as f32 / delta as f32
    };

    let mut h = h_raw * 30.0;
    if h < 0.0 {
        h += 180.0;
    }
    if h >= 179.5 {
        h = 0.0;
    }
    let h = (h + 0.5) as i32;

    Hsv { h, s, v }
}

/// Convert HSV to RGB color space.
pub fn hsv_to_rgb(hsv: Hsv) -> (u8, u8, u8) {
    let Hsv {
        mut h,
        s: sval,
        v: vval,
    } = hsv;

    if sval == 0 {
        return (vval as u8, vval as u8, vval as u8);
    }

    if h == 180 {
        h = 0;
    }
    let hf = h as f32 / 30.0;
    let i = hf as i32;
    let f = hf - i as f32;
    let s = sval as f32 / 255.0;
    let x = (vval as f32 * (1.0 - s) + 0.5) as i32;
    let y = (vval as f32 * (1.0 - s * f) + 0.5) as i32;
    let z = (vval as f32 * (1.0 - s * (1.0 - f)) + 0.5) as i32;

    let (r, g, b) = match i {
        0 => (vval, z, x),
        1 => (y, vval, x),
        2 => (x, vval, z),
        3 => (x, y, vval),
        4 => (z, x, vval),
        5 => (vval, x, y),
        _ => (0, 0, 0),
    };

    (r as u8, g as u8, b as u8)
}

impl RgbImage {
    /// Convert the whole image to HSV.
    pub fn to_hsv(&self) -> HsvImage {
        let w = self.width();
        let h = self.height();
        let mut data = Vec::with_capacity((w as usize) * (h as usize) * 3);
        for px in self.as_raw().chunks_exact(3) {
            let hsv = rgb_to_hsv(px[0], px[1], px[2]);
            data.push(hsv.h as u8);
            data.push(hsv.s as u8);
            data.push(hsv.v as u8);
        }
        HsvImage::from_vec(w, h, data)
    }
}

impl HsvImage {
    /// Convert the whole image to RGB.
    pub fn to_rgb(&self) -> RgbImage {
        let w = self.width();
        let h = self.height();
        let mut data = Vec::with_capacity((w as usize) * (h as usize) * 3);
        for y in 0..h {
            for x in 0..w {
                let (ph, ps, pv) = self.get_pixel_unchecked(x, y);
                let (r, g, b) = hsv_to_rgb(Hsv::new(ph as i32, ps as i32, pv as i32));
                data.push(r);
                data.push(g);
                data.push(b);
            }
        }
        RgbImage::from_vec(w, h, data)
    }
}
