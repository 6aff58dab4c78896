//! Frame schedulers for the render loop.
//!
//! A scheduler holds at most one pending registration. The controller asks
//! for the next frame with [`FrameScheduler::schedule_next`]; the host finds
//! out which registration came due through [`FrameScheduler::poll_due`] and
//! hands that handle back to the controller's `tick`.

use std::time::{Duration, Instant};

/// Ownership token for one scheduled frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickHandle(u64);

impl TickHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Repeating-callback primitive, one frame at a time.
pub trait FrameScheduler {
    /// Register interest in the next frame.
    fn schedule_next(&mut self) -> TickHandle;

    /// Drop a registration. After this returns, `poll_due` never yields
    /// `handle`.
    fn cancel(&mut self, handle: TickHandle);

    /// Take the registration whose frame has come due, if any.
    fn poll_due(&mut self) -> Option<TickHandle>;
}

/// Deterministic scheduler: every poll fires the pending registration.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Option<TickHandle>,
    scheduled: u64,
    cancelled: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<TickHandle> {
        self.pending
    }

    /// Total registrations handed out.
    pub fn scheduled_count(&self) -> u64 {
        self.scheduled
    }

    /// Registrations dropped before they fired.
    pub fn cancelled_count(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule_next(&mut self) -> TickHandle {
        self.next_id += 1;
        self.scheduled += 1;
        let handle = TickHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancelled += 1;
        }
    }

    fn poll_due(&mut self) -> Option<TickHandle> {
        self.pending.take()
    }
}

/// Wall-clock frame pacing for hosts without a display refresh signal.
///
/// A registration comes due once `interval` has passed since it was made.
#[derive(Debug)]
pub struct FramePacer {
    interval: Duration,
    next_id: u64,
    pending: Option<(TickHandle, Instant)>,
}

impl FramePacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_id: 0,
            pending: None,
        }
    }

    pub fn from_millis(interval_ms: u64) -> Self {
        Self::new(Duration::from_millis(interval_ms.max(1)))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// When the pending registration comes due, if there is one.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|(_, due)| due)
    }
}

impl FrameScheduler for FramePacer {
    fn schedule_next(&mut self) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle(self.next_id);
        self.pending = Some((handle, Instant::now() + self.interval));
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        if matches!(self.pending, Some((pending, _)) if pending == handle) {
            self.pending = None;
        }
    }

    fn poll_due(&mut self) -> Option<TickHandle> {
        match self.pending {
            Some((handle, due)) if Instant::now() >= due => {
                self.pending = None;
                Some(handle)
            }
            _ => None,
        }
    }
}
