//! Loading sequencer.
//!
//! A cosmetic splash: a progress bar easing toward 100%, rotating status
//! messages, and a fixed deadline after which the page is revealed. The three
//! parts run on independent timers and are not ordered relative to each
//! other.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::timer::{Deadline, Rotator, TimedMachine};

/// Largest random step per progress tick
pub const MAX_STEP: f64 = 5.0;

/// Fraction of the remaining distance a tick may cover
pub const EASE_FACTOR: f64 = 0.1;

/// Timing of the loading screen, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingTiming {
    /// Progress bar tick
    pub tick_ms: u64,
    /// Status message rotation
    pub message_ms: u64,
    /// Time until the page is revealed
    pub done_ms: u64,
}

impl Default for LoadingTiming {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            message_ms: 1000,
            done_ms: 4000,
        }
    }
}

impl LoadingTiming {
    /// Deadline that flips the "done" flag.
    pub fn done_deadline(&self) -> Deadline {
        Deadline::started(Duration::from_millis(self.done_ms))
    }

    /// Rotator over `count` status messages.
    pub fn message_rotator(&self, count: usize) -> Rotator {
        Rotator::new(count, Duration::from_millis(self.message_ms))
    }
}

/// Next percent given the current one and a draw in `[0, 1)`.
///
/// The step is `min(remaining * 0.1, draw * 5)`, so progress slows as it
/// nears 100 and never passes it.
pub fn next_percent(current: f64, draw: f64) -> f64 {
    let current = current.clamp(0.0, 100.0);
    let remaining = 100.0 - current;
    let step = (remaining * EASE_FACTOR).min(draw.clamp(0.0, 1.0) * MAX_STEP);
    (current + step).min(100.0)
}

/// Eased fake progress bar.
#[derive(Clone, Debug)]
pub struct ProgressMeter<R> {
    percent: f64,
    tick: Duration,
    rng: R,
}

impl<R: Rng> ProgressMeter<R> {
    pub fn new(rng: R, tick: Duration) -> Self {
        Self {
            percent: 0.0,
            tick,
            rng,
        }
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Whole percent shown next to the bar.
    pub fn display_percent(&self) -> u8 {
        self.percent.floor() as u8
    }

    pub fn is_complete(&self) -> bool {
        self.percent >= 100.0
    }

    /// Advance one tick.
    pub fn tick(&mut self) {
        let draw: f64 = self.rng.random();
        self.percent = next_percent(self.percent, draw);
    }
}

impl<R: Rng> TimedMachine for ProgressMeter<R> {
    fn next_delay(&self) -> Option<Duration> {
        (!self.is_complete()).then_some(self.tick)
    }

    fn fire(&mut self) {
        self.tick();
    }
}
