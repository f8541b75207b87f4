//! hsvpick Select - Interactive color-range selection
//!
//! This crate holds the state machine behind the picker's mouse and console
//! interactions:
//!
//! - **Range fitting** ([`fit`]): grow the range minimally to include a
//!   sample, or collapse it to a fresh tight selection
//! - **Averaging** ([`average`]): blend repeated samples into the center
//! - **Sampling** ([`sample`]): neighborhood-averaged pixel reads
//! - **History** ([`history`]): undo log of range snapshots
//! - **Session** ([`session`]): the single owned object every handler
//!   mutates
//! - **Commands** ([`command`]): console numeric entry
//!
//! Nothing here renders or decodes anything; the host GUI loop feeds
//! sampled colors in and re-renders from the session state afterwards.

pub mod average;
pub mod command;
pub mod error;
pub mod fit;
pub mod history;
pub mod sample;
pub mod session;

pub use average::fold_sample;
pub use command::{
    Command, Field, parse_color_command, parse_field_command, parse_range_command, parse_scalar,
    parse_triple,
};
pub use error::{SelectError, SelectResult};
pub use fit::{include_sample, reset_to_sample};
pub use history::HistoryStack;
pub use sample::{SAMPLE_RADIUS, sample_region};
pub use session::{SampleMode, Session};
