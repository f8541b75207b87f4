//! hsvpick Core - Basic data structures for HSV color-range selection
//!
//! This crate provides the fundamental types used throughout the hsvpick
//! library:
//!
//! - [`RgbImage`] / [`HsvImage`] / [`Mask`] - owned 2D pixel buffers
//! - [`Hsv`] and the RGB conversions ([`color`])
//! - [`ColorRange`] - a selected center color plus per-axis tolerances
//! - circular hue-interval arithmetic ([`hue`])
//!
//! Hue follows the OpenCV 8-bit convention: 180 values on a circular axis,
//! where 179 is adjacent to 0.

pub mod buffer;
pub mod color;
pub mod error;
pub mod hue;
pub mod range;

pub use buffer::{HsvImage, Mask, RgbImage};
pub use color::{HUE_RANGE, Hsv, hsv_to_rgb, rgb_to_hsv};
pub use error::{Error, Result};
pub use hue::{HUE_MAX_TOLERANCE, HueEdge, hue_bounds, hue_contains, hue_span, nearer_hue_edge};
pub use range::ColorRange;
