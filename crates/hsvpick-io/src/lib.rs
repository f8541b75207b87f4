//! hsvpick IO - Image input
//!
//! Decodes the media the picker operates on:
//!
//! - **Format detection** ([`format`]): magic-byte sniffing for PNG and
//!   JPEG
//! - **Readers** ([`reader`]): decoding to the core RGB buffer
//! - **Frame sources** ([`source`]): the on-demand frame contract and the
//!   still-image implementation
//!
//! Absent or unreadable media is a fatal startup error for the tool, so
//! every failure here propagates as an [`IoError`].

pub mod error;
pub mod format;
pub mod jpeg;
pub mod png;
pub mod reader;
pub mod source;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};
pub use reader::read_image;
pub use source::{FrameSource, StillImage};
