use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Mode;

/// Every effective state change produces an Event.
///
/// `at` is wall-clock time for logs and output; timekeeping itself only
/// reads the monotonic clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    StopwatchStarted {
        at: DateTime<Utc>,
    },
    StopwatchPaused {
        /// Banked time including the run that just ended.
        accumulated_ms: f64,
        at: DateTime<Utc>,
    },
    StopwatchResumed {
        accumulated_ms: f64,
        at: DateTime<Utc>,
    },
    StopwatchCleared {
        /// Elapsed time thrown away by the clear.
        discarded_ms: f64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        mode: Mode,
        elapsed_ms: f64,
        clock: String,
        clear_enabled: bool,
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn at(&self) -> DateTime<Utc> {
        match self {
            Event::StopwatchStarted { at }
            | Event::StopwatchPaused { at, .. }
            | Event::StopwatchResumed { at, .. }
            | Event::StopwatchCleared { at, .. }
            | Event::StateSnapshot { at, .. } => *at,
        }
    }
}
