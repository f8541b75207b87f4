//! Selection session state
//!
//! [`Session`] owns everything a picking session mutates: the current
//! [`ColorRange`], the undo history, the saved palette, and the sample
//! accumulation mode. Every user interaction is a method taking
//! `&mut self`; the host event loop invokes them one at a time, so there
//! is no shared or global state anywhere.

use crate::average::fold_sample;
use crate::fit::{include_sample, reset_to_sample};
use crate::history::HistoryStack;
use hsvpick_core::{ColorRange, Hsv};

/// Which accumulation the repeated-sampling interactions are currently
/// performing.
///
/// Tight inclusion (growing the range to just cover each new sample) and
/// averaging (blending samples into the center) are mutually exclusive;
/// starting one leaves the other. The sample count lives inside the
/// variant, so there is no separate counter to keep in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleMode {
    /// No accumulation in progress.
    #[default]
    Idle,
    /// Samples are being included into the range as tightly as possible.
    TightInclusion { samples: u32 },
    /// Samples are being averaged into the range's center.
    Averaging { samples: u32 },
}

impl SampleMode {
    /// Number of samples accumulated in the current mode.
    pub fn samples(&self) -> u32 {
        match self {
            SampleMode::Idle => 0,
            SampleMode::TightInclusion { samples } | SampleMode::Averaging { samples } => *samples,
        }
    }

    /// The mode after one undo step.
    ///
    /// Tight inclusion floors at one sample so the next inclusion keeps
    /// growing instead of collapsing to a fresh range; averaging floors at
    /// zero and falls back to idle. A deliberate simplification, not a
    /// precise inverse.
    fn after_undo(self) -> SampleMode {
        match self {
            SampleMode::Idle => SampleMode::Idle,
            SampleMode::TightInclusion { samples } => SampleMode::TightInclusion {
                samples: samples.saturating_sub(1).max(1),
            },
            SampleMode::Averaging { samples } => {
                if samples > 1 {
                    SampleMode::Averaging {
                        samples: samples - 1,
                    }
                } else {
                    SampleMode::Idle
                }
            }
        }
    }
}

/// All mutable state of one picking session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: ColorRange,
    history: HistoryStack,
    saved: Vec<ColorRange>,
    mode: SampleMode,
}

impl Session {
    /// Create a session with the default color range.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current color range.
    pub fn current(&self) -> &ColorRange {
        &self.current
    }

    /// The current accumulation mode.
    pub fn mode(&self) -> SampleMode {
        self.mode
    }

    /// The saved palette, in insertion order.
    pub fn saved(&self) -> &[ColorRange] {
        &self.saved
    }

    /// Number of undo steps available.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Set the center to a sampled color, leaving the tolerances alone.
    ///
    /// Ends any accumulation in progress.
    pub fn pick_color(&mut self, sample: Hsv) {
        self.history.push(self.current);
        self.current.set_h(sample.h);
        self.current.set_s(sample.s);
        self.current.set_v(sample.v);
        self.mode = SampleMode::Idle;
        self.log_state("picked color");
    }

    /// Blend a sample into the running average of the center.
    ///
    /// Leaves tight-inclusion mode if it was active.
    pub fn average_sample(&mut self, sample: Hsv) {
        self.history.push(self.current);
        let folded = match self.mode {
            SampleMode::Averaging { samples } => samples,
            _ => 0,
        };
        fold_sample(&mut self.current, sample, folded);
        self.mode = SampleMode::Averaging {
            samples: folded + 1,
        };
        log::info!("{} colors averaged", folded + 1);
        self.log_state("averaged sample");
    }

    /// Include a sample in the range as tightly as possible.
    ///
    /// The first inclusion after any other interaction collapses the range
    /// to width 1 at the sample; later ones grow it minimally. Leaves
    /// averaging mode if it was active.
    pub fn include_sample(&mut self, sample: Hsv) {
        self.history.push(self.current);
        let included = match self.mode {
            SampleMode::TightInclusion { samples } => {
                include_sample(&mut self.current, sample);
                samples + 1
            }
            _ => {
                reset_to_sample(&mut self.current, sample);
                1
            }
        };
        self.mode = SampleMode::TightInclusion { samples: included };
        log::info!("{included} colors included");
        self.log_state("included sample");
    }

    /// Undo the most recent mutation.
    ///
    /// Returns `false` (after a user-visible notice) when the history is
    /// empty; nothing changes in that case.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                self.mode = self.mode.after_undo();
                self.log_state("undid last change");
                true
            }
            None => {
                log::warn!("nothing to undo");
                false
            }
        }
    }

    /// Pin the current range to the saved palette.
    pub fn save_color(&mut self) {
        self.saved.push(self.current);
        log::info!("saved color {} to palette", self.saved.len());
    }

    /// Clear the saved palette.
    pub fn clear_saved(&mut self) {
        self.saved.clear();
        log::info!("cleared saved palette");
    }

    /// Overwrite the center color directly (trackbar or console path).
    ///
    /// Values are clamped silently; accumulation ends.
    pub fn set_center(&mut self, h: i32, s: i32, v: i32) {
        self.history.push(self.current);
        self.current.set_h(h);
        self.current.set_s(s);
        self.current.set_v(v);
        self.mode = SampleMode::Idle;
        self.log_state("set color");
    }

    /// Overwrite the tolerances directly (trackbar or console path).
    ///
    /// Values are clamped silently; accumulation ends.
    pub fn set_tolerance(&mut self, range_h: i32, range_s: i32, range_v: i32) {
        self.history.push(self.current);
        self.current.set_range_h(range_h);
        self.current.set_range_s(range_s);
        self.current.set_range_v(range_v);
        self.mode = SampleMode::Idle;
        self.log_state("set range");
    }

    pub(crate) fn push_history(&mut self) {
        self.history.push(self.current);
    }

    pub(crate) fn current_mut(&mut self) -> &mut ColorRange {
        &mut self.current
    }

    pub(crate) fn end_accumulation(&mut self) {
        self.mode = SampleMode::Idle;
    }

    fn log_state(&self, what: &str) {
        let c = &self.current;
        log::debug!(
            "{what}: HSV {} {} {} range {} {} {}",
            c.h(),
            c.s(),
            c.v(),
            c.range_h(),
            c.range_s(),
            c.range_v()
        );
    }
}
