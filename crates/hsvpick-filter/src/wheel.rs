//! Picker scene rendering
//!
//! Renders the color-wheel window contents into an owned [`HsvImage`]: a
//! hue strip across the top, the saturation/value plane for the current
//! hue below it, outlines for every saved palette entry, and a solid tile
//! of the current color. The host converts the result to RGB and displays
//! it; nothing here touches a screen.
//!
//! All drawing goes through explicit (x, y) pixel accessors on the buffer.

use crate::error::FilterResult;
use hsvpick_core::{ColorRange, HUE_RANGE, Hsv, HsvImage};

// ============================================================================
// Layout constants
// ============================================================================

/// Scene width in pixels.
pub const SCENE_WIDTH: u32 = 361;
/// Scene height in pixels.
pub const SCENE_HEIGHT: u32 = 306;
/// Thickness of the hue strip at the top.
pub const HUE_STRIP_HEIGHT: u32 = 25;
/// Top row of the saturation/value plane (strip plus a gap).
pub const WHEEL_TOP: u32 = HUE_STRIP_HEIGHT + 20;
/// Left edge of the current-color tile.
pub const TILE_LEFT: u32 = 280;
/// Top edge of the current-color tile.
pub const TILE_TOP: u32 = 140;
/// Tile width.
pub const TILE_WIDTH: u32 = 60;
/// Tile height.
pub const TILE_HEIGHT: u32 = 60;

/// Background for unused areas of the scene (light grey).
const BACKGROUND: Hsv = Hsv { h: 0, s: 0, v: 210 };

// ============================================================================
// Rendering
// ============================================================================

/// Render the full picker scene for the current range and saved palette.
pub fn render_scene(current: &ColorRange, saved: &[ColorRange]) -> FilterResult<HsvImage> {
    let mut img = HsvImage::new(SCENE_WIDTH, SCENE_HEIGHT)?;
    img.fill(BACKGROUND.h as u8, BACKGROUND.s as u8, BACKGROUND.v as u8);

    draw_hue_strip(&mut img, current);
    draw_sv_plane(&mut img, current);
    for entry in saved {
        draw_saved_entry(&mut img, entry);
    }
    draw_tile(&mut img, current);

    Ok(img)
}

/// Hue strip across the top, each hue at double width, with a white notch
/// two steps either side of the current hue.
fn draw_hue_strip(img: &mut HsvImage, current: &ColorRange) {
    for y in 0..HUE_STRIP_HEIGHT {
        for h in 0..HUE_RANGE {
            let mut s = 255u8;
            if (h == current.h() - 2 || h == current.h() + 2) && y < HUE_STRIP_HEIGHT / 2 {
                s = 0;
            }
            let x = (h as u32) * 2;
            img.set_pixel_unchecked(x, y, h as u8, s, 255);
            img.set_pixel_unchecked(x + 1, y, h as u8, s, 255);
        }
    }
}

/// Saturation/value plane at the current hue: S on the x axis, V growing
/// upward on the y axis, with a highlight ring around the current (S, V).
fn draw_sv_plane(img: &mut HsvImage, current: &ColorRange) {
    for y in 0..255i32 {
        for x in 0..255i32 {
            let mut s = x;
            let mut v = 255 - y;
            let near_s = (s - current.s()).abs() == 2 || (s - current.s()).abs() == 3;
            let near_v = (v - current.v()).abs() == 2 || (v - current.v()).abs() == 3;
            if near_s && near_v {
                s = 0;
                v = 0;
            }
            img.set_pixel_unchecked(
                x as u32,
                y as u32 + WHEEL_TOP,
                current.h() as u8,
                s as u8,
                v as u8,
            );
        }
    }
}

/// Outline one saved palette entry: its hue extent on the strip and its
/// S/V extent on the plane.
fn draw_saved_entry(img: &mut HsvImage, entry: &ColorRange) {
    // Hue extent on the strip (strip runs at double width)
    draw_rect_outline(
        img,
        entry.h() * 2 - entry.range_h(),
        1,
        entry.h() * 2 + entry.range_h(),
        HUE_STRIP_HEIGHT as i32 - 1,
        Hsv::new(0, 0, 0),
    );

    // S/V extent on the plane, half a tolerance either side
    let top = WHEEL_TOP as i32;
    draw_rect_outline(
        img,
        entry.s() - entry.range_s() / 2,
        top + 255 - entry.v() - entry.range_v() / 2,
        entry.s() + entry.range_s() / 2,
        top + 255 - entry.v() + entry.range_v() / 2,
        Hsv::new(entry.h(), 255, 255),
    );
}

/// Solid tile of the current color.
fn draw_tile(img: &mut HsvImage, current: &ColorRange) {
    for y in 0..TILE_HEIGHT {
        for x in 0..TILE_WIDTH {
            img.set_pixel_unchecked(
                x + TILE_LEFT,
                y + TILE_TOP,
                current.h() as u8,
                current.s() as u8,
                current.v() as u8,
            );
        }
    }
}

/// One-pixel rectangle outline, clipped to the image.
fn draw_rect_outline(img: &mut HsvImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Hsv) {
    let w = img.width() as i32;
    let h = img.height() as i32;
    let put = |img: &mut HsvImage, x: i32, y: i32| {
        if x >= 0 && x < w && y >= 0 && y < h {
            img.set_pixel_unchecked(x as u32, y as u32, color.h as u8, color.s as u8, color.v as u8);
        }
    };
    for x in x0..=x1 {
        put(img, x, y0);
        put(img, x, y1);
    }
    for y in y0..=y1 {
        put(img, x0, y);
        put(img, x1, y);
    }
}
