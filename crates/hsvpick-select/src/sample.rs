//! Pixel sampling with neighborhood averaging
//!
//! A click never samples a single pixel: the (2r+1) x (2r+1) RGB
//! neighborhood around the position is averaged first and only the mean
//! color is converted to HSV. This smooths over speckle and interlace
//! noise in the source frame.

use hsvpick_core::{Hsv, RgbImage, rgb_to_hsv};

/// Neighborhood radius: 2 gives a 5x5 averaging window.
pub const SAMPLE_RADIUS: i32 = 2;

/// Sample the averaged color around a click position, as HSV.
///
/// A position on the image edge is clamped inward by one pixel rather than
/// rejected; the averaging window itself is clipped to the image, so the
/// mean is taken over however many of the (2r+1)^2 neighbors exist.
pub fn sample_region(img: &RgbImage, x: i32, y: i32) -> Hsv {
    let w = img.width() as i32;
    let h = img.height() as i32;

    let cx = x.max(1).min((w - 2).max(0));
    let cy = y.max(1).min((h - 2).max(0));

    let mut sum_r = 0u32;
    let mut sum_g = 0u32;
    let mut sum_b = 0u32;
    let mut count = 0u32;
    for dy in -SAMPLE_RADIUS..=SAMPLE_RADIUS {
        for dx in -SAMPLE_RADIUS..=SAMPLE_RADIUS {
            let px = cx + dx;
            let py = cy + dy;
            if px < 0 || px >= w || py < 0 || py >= h {
                continue;
            }
            let (r, g, b) = img.get_pixel_unchecked(px as u32, py as u32);
            sum_r += r as u32;
            sum_g += g as u32;
            sum_b += b as u32;
            count += 1;
        }
    }

    let r = (sum_r / count) as u8;
    let g = (sum_g / count) as u8;
    let b = (sum_b / count) as u8;
    rgb_to_hsv(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(r: u8, g: u8, b: u8, w: u32, h: u32) -> RgbImage {
        let mut img = RgbImage::new(w, h).unwrap();
        img.fill(r, g, b);
        img
    }

    #[test]
    fn test_uniform_image_samples_its_color() {
        let img = uniform(0, 255, 0, 20, 20);
        let hsv = sample_region(&img, 10, 10);
        assert_eq!(hsv, rgb_to_hsv(0, 255, 0));
    }

    #[test]
    fn test_edge_click_clamped_not_rejected() {
        let img = uniform(255, 0, 0, 20, 20);
        for (x, y) in [(0, 0), (-3, 5), (19, 19), (25, 10)] {
            let hsv = sample_region(&img, x, y);
            assert_eq!(hsv, rgb_to_hsv(255, 0, 0), "at ({x},{y})");
        }
    }

    #[test]
    fn test_neighborhood_is_averaged() {
        // Left half black, right half white; sampling at the boundary
        // mixes the two.
        let mut img = RgbImage::new(20, 20).unwrap();
        for y in 0..20 {
            for x in 10..20 {
                img.set_pixel_unchecked(x, y, 255, 255, 255);
            }
        }
        let hsv = sample_region(&img, 10, 10);
        // 5x5 window at x=10 covers columns 8..=12: 10 black, 15 white
        // pixels per color plane -> mean 153
        assert_eq!(hsv.s, 0);
        assert_eq!(hsv.v, 153);
    }

    #[test]
    fn test_tiny_image_does_not_panic() {
        let img = uniform(1, 2, 3, 1, 1);
        let hsv = sample_region(&img, 0, 0);
        assert_eq!(hsv, rgb_to_hsv(1, 2, 3));
    }
}
