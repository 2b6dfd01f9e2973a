//! Frame-count timers.
//!
//! Time in a sketch advances in discrete frames. A [`FrameTimer`] turns a
//! frame count into normalized progress for an [`Easing`] curve; an
//! [`Interval`] fires every N frames (spawn bursts, palette swaps).

use crate::easing::Easing;
use serde::{Deserialize, Serialize};

/// Counts frames up to a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameTimer {
    elapsed: u32,
    duration: u32,
}

impl FrameTimer {
    /// A zero duration is treated as one frame.
    pub fn new(duration: u32) -> Self {
        Self {
            elapsed: 0,
            duration: duration.max(1),
        }
    }

    /// Advances one frame (saturating at the duration). Returns true once finished.
    pub fn tick(&mut self) -> bool {
        if self.elapsed < self.duration {
            self.elapsed += 1;
        }
        self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Fraction of the duration elapsed, in [0, 1].
    pub fn progress(&self) -> f64 {
        self.elapsed as f64 / self.duration as f64
    }

    /// Progress remapped through `easing`.
    pub fn eased(&self, easing: Easing) -> f64 {
        easing.apply(self.progress())
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn reset(&mut self) {
        self.elapsed = 0;
    }
}

/// Fires once every `period` frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    period: u32,
    counter: u32,
}

impl Interval {
    /// A zero period is treated as one (fires every frame).
    pub fn new(period: u32) -> Self {
        Self {
            period: period.max(1),
            counter: 0,
        }
    }

    /// Advances one frame. True on frames `period`, `2 * period`, ...
    pub fn tick(&mut self) -> bool {
        self.counter += 1;
        if self.counter >= self.period {
            self.counter = 0;
            true
        } else {
            false
        }
    }

    pub fn period(&self) -> u32 {
        self.period
    }
}
