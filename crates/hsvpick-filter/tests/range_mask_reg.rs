//! Range mask regression tests
//!
//! Exercises the thresholder through the same path the preview window
//! uses: an RGB frame converted to HSV, masked by a range picked through a
//! session, then composed back for display.

use hsvpick_core::{ColorRange, HUE_RANGE, Hsv, HsvImage, RgbImage};
use hsvpick_filter::{overlay_mask, range_mask};
use hsvpick_select::{Session, sample_region};

/// Create a uniform RGB image.
fn make_uniform_rgb(r: u8, g: u8, b: u8, w: u32, h: u32) -> RgbImage {
    let mut img = RgbImage::new(w, h).unwrap();
    img.fill(r, g, b);
    img
}

/// Create a 3-color image: red (left), green (middle), blue (right).
fn make_tricolor(w: u32, h: u32) -> RgbImage {
    let mut img = RgbImage::new(w, h).unwrap();
    let third = w / 3;
    for y in 0..h {
        for x in 0..w {
            let (r, g, b) = if x < third {
                (255, 0, 0)
            } else if x < 2 * third {
                (0, 255, 0)
            } else {
                (0, 0, 255)
            };
            img.set_pixel_unchecked(x, y, r, g, b);
        }
    }
    img
}

#[test]
fn test_red_range_wraps_and_matches_red() {
    // Pure red sits at hue 0; a tolerance of 10 wraps the window to
    // [170, 10].
    let pix = make_uniform_rgb(255, 0, 0, 20, 20);
    let range = ColorRange::new(0, 200, 200, 10, 100, 100);
    let mask = range_mask(&pix.to_hsv(), &range).unwrap();
    assert_eq!(mask.count_on(), 400);
}

#[test]
fn test_red_range_rejects_green_and_blue() {
    let hsv = make_tricolor(30, 10).to_hsv();
    let range = ColorRange::new(0, 200, 200, 10, 100, 100);
    let mask = range_mask(&hsv, &range).unwrap();
    // Only the left (red) third matches
    assert_eq!(mask.count_on(), 100);
    assert!(mask.is_on(0, 0));
    assert!(!mask.is_on(15, 0));
    assert!(!mask.is_on(29, 0));
}

#[test]
fn test_near_wrap_hues_split_correctly() {
    // Slightly orange red (hue just above 0) and slightly magenta red
    // (hue just below 180) both belong to a red selection.
    let mut img = HsvImage::new(2, 1).unwrap();
    img.set_pixel_unchecked(0, 0, 3, 255, 255);
    img.set_pixel_unchecked(1, 0, 176, 255, 255);
    let range = ColorRange::new(0, 255, 255, 5, 50, 50);
    let mask = range_mask(&img, &range).unwrap();
    assert!(mask.is_on(0, 0));
    assert!(mask.is_on(1, 0));
}

#[test]
fn test_session_driven_selection_masks_patch() {
    // A green patch on magenta; tighten onto the patch and threshold.
    let mut frame = make_uniform_rgb(200, 0, 200, 32, 32);
    for y in 8..24 {
        for x in 8..24 {
            frame.set_pixel_unchecked(x, y, 0, 200, 0);
        }
    }

    let mut session = Session::new();
    session.include_sample(sample_region(&frame, 16, 16));

    let mask = range_mask(&frame.to_hsv(), session.current()).unwrap();
    assert_eq!(mask.count_on(), 256); // exactly the 16x16 patch
    assert!(mask.is_on(16, 16));
    assert!(!mask.is_on(2, 2));
}

#[test]
fn test_overlay_whitens_only_masked_pixels() {
    let frame = make_tricolor(30, 10);
    let range = ColorRange::new(0, 200, 200, 10, 100, 100);
    let mask = range_mask(&frame.to_hsv(), &range).unwrap();
    let preview = overlay_mask(&frame, &mask).unwrap();

    assert_eq!(preview.get_pixel_unchecked(0, 0), (255, 255, 255));
    // Unmatched pixels keep their color
    assert_eq!(preview.get_pixel_unchecked(15, 0), (0, 255, 0));
}

#[test]
fn test_full_hue_sweep_against_containment() {
    // Every hue once, thresholded by a wrapped and an unwrapped range;
    // the mask must agree with circular containment everywhere.
    let mut img = HsvImage::new(HUE_RANGE as u32, 1).unwrap();
    for h in 0..HUE_RANGE as u32 {
        img.set_pixel_unchecked(h, 0, h as u8, 200, 200);
    }
    for range in [
        ColorRange::new(90, 200, 200, 25, 30, 30),
        ColorRange::new(2, 200, 200, 8, 30, 30),
    ] {
        let mask = range_mask(&img, &range).unwrap();
        for h in 0..HUE_RANGE {
            assert_eq!(
                mask.is_on(h as u32, 0),
                range.contains(Hsv::new(h, 200, 200)),
                "hue {h}"
            );
        }
    }
}
