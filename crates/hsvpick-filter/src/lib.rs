//! hsvpick Filter - Range thresholding and preview rendering
//!
//! This crate turns session state into pixels:
//!
//! - **Range masks** ([`range_mask`]): which pixels of an HSV frame fall
//!   inside the current color range, with correct handling of hue windows
//!   that wrap past 0
//! - **Overlay** ([`overlay`]): the live-preview composition of frame and
//!   mask
//! - **Wheel** ([`wheel`]): the picker scene (hue strip, S/V plane, saved
//!   palette outlines, current-color tile)
//!
//! Display belongs to the host GUI layer; everything here produces owned
//! buffers.

pub mod error;
pub mod overlay;
pub mod range_mask;
pub mod wheel;

pub use error::{FilterError, FilterResult};
pub use overlay::overlay_mask;
pub use range_mask::{in_range, range_mask};
pub use wheel::{
    HUE_STRIP_HEIGHT, SCENE_HEIGHT, SCENE_WIDTH, TILE_HEIGHT, TILE_LEFT, TILE_TOP, TILE_WIDTH,
    WHEEL_TOP, render_scene,
};
