//! hsvpick - Interactive HSV color-range selection
//!
//! A library for picking a color plus tolerance range in the cylindrical
//! HSV color space (OpenCV convention: hue 0..179) and previewing which
//! pixels of an image fall inside the range.
//!
//! # Overview
//!
//! - Core types: [`ColorRange`], [`Hsv`], the pixel buffers
//! - Selection state machine: [`select::Session`] with adaptive range
//!   fitting, sample averaging, and undo
//! - Thresholding and preview: [`filter::range_mask`],
//!   [`filter::overlay_mask`], [`filter::render_scene`]
//! - Image input: [`io::read_image`], [`io::StillImage`]
//!
//! # Example
//!
//! ```
//! use hsvpick::select::{Session, sample_region};
//! use hsvpick::filter::range_mask;
//! use hsvpick::RgbImage;
//!
//! let mut frame = RgbImage::new(32, 32).unwrap();
//! frame.fill(0, 200, 0);
//!
//! let mut session = Session::new();
//! session.include_sample(sample_region(&frame, 16, 16));
//!
//! let mask = range_mask(&frame.to_hsv(), session.current()).unwrap();
//! assert_eq!(mask.count_on(), 32 * 32);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use hsvpick_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use hsvpick_filter as filter;
pub use hsvpick_io as io;
pub use hsvpick_select as select;
