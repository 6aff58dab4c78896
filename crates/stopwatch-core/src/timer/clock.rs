//! Monotonic time sources.
//!
//! Timestamps are fractional milliseconds from an arbitrary epoch, the same
//! shape a browser's `performance.now()` hands out. Only differences between
//! two readings carry meaning.

use std::time::Instant;

/// Read-only, non-decreasing timestamp source.
pub trait Clock {
    /// Current timestamp in milliseconds.
    fn now_ms(&self) -> f64;
}

/// Clock backed by [`Instant`]; its epoch is the moment of construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Hand-driven clock for tests and scripted replays.
///
/// Never moves on its own. `set` refuses to go backwards so the clock stays
/// monotonic however the caller drives it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ManualClock {
    now_ms: f64,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now_ms: start_ms.max(0.0),
        }
    }

    /// Move forward by `delta_ms`. Negative deltas are ignored.
    pub fn advance(&mut self, delta_ms: f64) {
        if delta_ms > 0.0 {
            self.now_ms += delta_ms;
        }
    }

    /// Jump to `at_ms` if it is not in the past.
    pub fn set(&mut self, at_ms: f64) {
        if at_ms > self.now_ms {
            self.now_ms = at_ms;
        }
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }
}
