//! Per-day countdown
//!
//! Time is passed in by the caller (seconds from any monotonic origin) so the
//! clock is deterministic under test.

use serde::{Deserialize, Serialize};

/// Progress bar color band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressBand {
    /// More than 60% left
    Safe,
    /// More than 30% left
    Warning,
    Critical,
}

/// Pausable countdown timer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundClock {
    total: f64,
    remaining: f64,
    /// Wall-clock time the countdown is measured from
    anchor: f64,
    paused: bool,
}

impl RoundClock {
    pub fn new(total_secs: f64, now: f64) -> Self {
        let total = total_secs.max(f64::EPSILON);
        Self {
            total,
            remaining: total,
            anchor: now,
            paused: false,
        }
    }

    /// Full duration again, counting from `now`
    pub fn reset(&mut self, now: f64) {
        self.remaining = self.total;
        self.anchor = now;
        self.paused = false;
    }

    /// Advance to `now`. While `paused` the remaining time is frozen; on
    /// resume the anchor moves so the paused interval is not counted.
    pub fn update(&mut self, now: f64, paused: bool) {
        if paused {
            self.paused = true;
            return;
        }
        if self.paused {
            self.anchor = now - (self.total - self.remaining);
            self.paused = false;
        }
        let elapsed = now - self.anchor;
        self.remaining = (self.total - elapsed).clamp(0.0, self.total);
    }

    pub fn time_up(&self) -> bool {
        self.remaining <= 0.0
    }

    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Remaining fraction in [0, 1]
    pub fn fraction(&self) -> f64 {
        self.remaining / self.total
    }

    pub fn band(&self) -> ProgressBand {
        let fraction = self.fraction();
        if fraction > 0.6 {
            ProgressBand::Safe
        } else if fraction > 0.3 {
            ProgressBand::Warning
        } else {
            ProgressBand::Critical
        }
    }
}
