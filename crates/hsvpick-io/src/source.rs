//! Frame sources
//!
//! The picker works on whatever frame the host hands it; [`FrameSource`]
//! is that contract: a decoded 3-channel frame on demand plus its
//! dimensions. A still image is the one implementation shipped here - it
//! answers every request with the same frame. Video capture would slot in
//! behind the same trait but is out of scope.

use crate::reader::read_image;
use crate::IoResult;
use hsvpick_core::RgbImage;
use std::path::Path;

/// Supplies decoded color frames on demand.
pub trait FrameSource {
    /// The current frame.
    fn frame(&self) -> &RgbImage;

    /// Frame dimensions as (width, height).
    fn dimensions(&self) -> (u32, u32) {
        let frame = self.frame();
        (frame.width(), frame.height())
    }

    /// Try to advance by `n` frames; returns how many frames were actually
    /// advanced. A source at its end returns 0 and keeps the current
    /// frame.
    fn advance(&mut self, n: u32) -> IoResult<u32>;
}

/// A single decoded image posing as a frame source.
#[derive(Debug, Clone)]
pub struct StillImage {
    frame: RgbImage,
}

impl StillImage {
    /// Wrap an already decoded image.
    pub fn new(frame: RgbImage) -> Self {
        Self { frame }
    }

    /// Load a still image from a file.
    ///
    /// # Errors
    ///
    /// Unreadable or absent media is fatal: the error propagates so the
    /// caller can exit.
    pub fn open<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        Ok(Self::new(read_image(path)?))
    }
}

impl FrameSource for StillImage {
    fn frame(&self) -> &RgbImage {
        &self.frame
    }

    fn advance(&mut self, _n: u32) -> IoResult<u32> {
        // A still image has exactly one frame.
        Ok(0)
    }
}
