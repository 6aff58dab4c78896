//! Stopwatch controller.
//!
//! The controller is a state machine over an injected monotonic clock. It
//! has no internal thread: while running it keeps exactly one frame
//! registered with its [`FrameScheduler`], and the host hands due frames
//! back through [`Stopwatch::tick`] (or [`Stopwatch::pump`]).
//!
//! ## State Transitions
//!
//! ```text
//! Idle --start--> Running --pause--> Paused --resume--> Running
//!   ^                |                  |
//!   +------clear-----+-------clear------+
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut sw = Stopwatch::new(MonotonicClock::new(), FramePacer::from_millis(16), surface);
//! sw.toggle();
//! // In the host loop:
//! sw.pump(); // Renders a frame when one is due
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::clock::Clock;
use super::format::{format_title, DisplayFields, TimeParts, ZERO_CLOCK};
use super::scheduler::{FrameScheduler, TickHandle};
use crate::events::Event;
use crate::input::{Action, InputEvent, InputOutcome, KeyBindings};
use crate::surface::{Appearance, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Idle,
    Running,
    Paused,
}

/// Presentation settings the controller needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwatchOptions {
    /// Text placed before the clock in the title. Blank means clock only.
    pub title_prefix: String,
    pub keys: KeyBindings,
}

impl Default for StopwatchOptions {
    fn default() -> Self {
        Self {
            title_prefix: "Stopwatch".into(),
            keys: KeyBindings::default(),
        }
    }
}

/// One rendered frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub elapsed_ms: f64,
    pub parts: TimeParts,
    pub display: DisplayFields,
    pub title: String,
    pub clear_enabled: bool,
}

/// Stopwatch state plus the collaborators it drives.
#[derive(Debug)]
pub struct Stopwatch<C, S, U> {
    clock: C,
    scheduler: S,
    surface: U,
    options: StopwatchOptions,
    mode: Mode,
    /// Sum of completed run intervals, in milliseconds.
    accumulated_ms: f64,
    /// Clock reading when the current run began. Only meaningful while running.
    run_start_ms: f64,
    /// Live frame registration. Present iff running.
    tick_handle: Option<TickHandle>,
}

impl<C, S, U> Stopwatch<C, S, U>
where
    C: Clock,
    S: FrameScheduler,
    U: Surface,
{
    pub fn new(clock: C, scheduler: S, surface: U) -> Self {
        Self::with_options(clock, scheduler, surface, StopwatchOptions::default())
    }

    /// Create an idle stopwatch and paint the initial zero state.
    pub fn with_options(clock: C, scheduler: S, surface: U, options: StopwatchOptions) -> Self {
        let mut sw = Self {
            clock,
            scheduler,
            surface,
            options,
            mode: Mode::Idle,
            accumulated_ms: 0.0,
            run_start_ms: 0.0,
            tick_handle: None,
        };
        sw.render_idle();
        sw.push_appearance();
        sw
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn accumulated_ms(&self) -> f64 {
        self.accumulated_ms
    }

    pub fn run_start_ms(&self) -> f64 {
        self.run_start_ms
    }

    /// Accumulated time plus the in-progress run, never negative.
    pub fn elapsed_ms(&self) -> f64 {
        match self.mode {
            Mode::Running => {
                let current = (self.clock.now_ms() - self.run_start_ms).max(0.0);
                self.accumulated_ms + current
            }
            Mode::Idle | Mode::Paused => self.accumulated_ms,
        }
    }

    pub fn is_clear_enabled(&self) -> bool {
        self.elapsed_ms() != 0.0
    }

    pub fn tick_handle(&self) -> Option<TickHandle> {
        self.tick_handle
    }

    pub fn options(&self) -> &StopwatchOptions {
        &self.options
    }

    pub fn appearance(&self) -> Appearance {
        Appearance::for_mode(self.mode, self.options.keys.toggle)
    }

    /// The frame a tick would render right now. Does not touch the surface.
    pub fn frame(&self) -> Frame {
        let elapsed_ms = self.elapsed_ms();
        let parts = TimeParts::from_millis(elapsed_ms);
        Frame {
            elapsed_ms,
            parts,
            display: parts.display_fields(),
            title: format_title(&self.options.title_prefix, &parts.to_string()),
            clear_enabled: elapsed_ms != 0.0,
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        let elapsed_ms = self.elapsed_ms();
        Event::StateSnapshot {
            mode: self.mode,
            elapsed_ms,
            clock: TimeParts::from_millis(elapsed_ms).to_string(),
            clear_enabled: elapsed_ms != 0.0,
            at: Utc::now(),
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn surface(&self) -> &U {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut U {
        &mut self.surface
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin a fresh run from zero. No-op unless idle.
    pub fn start(&mut self) -> Option<Event> {
        if self.mode != Mode::Idle {
            return None;
        }
        self.accumulated_ms = 0.0;
        self.run_start_ms = self.clock.now_ms();
        self.mode = Mode::Running;
        self.push_appearance();
        self.begin_loop();
        debug!(run_start_ms = self.run_start_ms, "stopwatch started");
        Some(Event::StopwatchStarted { at: Utc::now() })
    }

    /// Bank the current run. No-op unless running.
    ///
    /// Display and title keep the last rendered frame.
    pub fn pause(&mut self) -> Option<Event> {
        if self.mode != Mode::Running {
            return None;
        }
        let now = self.clock.now_ms();
        self.accumulated_ms += (now - self.run_start_ms).max(0.0);
        self.mode = Mode::Paused;
        self.cancel_loop();
        self.push_appearance();
        self.surface.set_clear_enabled(self.is_clear_enabled());
        debug!(accumulated_ms = self.accumulated_ms, "stopwatch paused");
        Some(Event::StopwatchPaused {
            accumulated_ms: self.accumulated_ms,
            at: Utc::now(),
        })
    }

    /// Continue after a pause, keeping banked time. No-op unless paused.
    pub fn resume(&mut self) -> Option<Event> {
        if self.mode != Mode::Paused {
            return None;
        }
        self.run_start_ms = self.clock.now_ms();
        self.mode = Mode::Running;
        self.push_appearance();
        self.begin_loop();
        debug!(accumulated_ms = self.accumulated_ms, "stopwatch resumed");
        Some(Event::StopwatchResumed {
            accumulated_ms: self.accumulated_ms,
            at: Utc::now(),
        })
    }

    /// Return to idle at zero from any mode and repaint once.
    pub fn clear(&mut self) -> Option<Event> {
        let discarded_ms = self.elapsed_ms();
        self.accumulated_ms = 0.0;
        self.run_start_ms = 0.0;
        self.mode = Mode::Idle;
        self.cancel_loop();
        self.render_idle();
        self.push_appearance();
        debug!(discarded_ms, "stopwatch cleared");
        Some(Event::StopwatchCleared {
            discarded_ms,
            at: Utc::now(),
        })
    }

    /// Start when idle, pause when running, resume when paused.
    pub fn toggle(&mut self) -> Option<Event> {
        match self.mode {
            Mode::Idle => self.start(),
            Mode::Running => self.pause(),
            Mode::Paused => self.resume(),
        }
    }

    /// Route a click or key press to the matching command.
    pub fn handle_input(&mut self, input: InputEvent) -> InputOutcome {
        match input {
            InputEvent::ToggleClicked => InputOutcome {
                event: self.toggle(),
                prevent_default: false,
            },
            InputEvent::ClearClicked => InputOutcome {
                event: self.clear(),
                prevent_default: false,
            },
            InputEvent::KeyDown(key) => match self.options.keys.action_for(key) {
                Some(Action::Toggle) => InputOutcome {
                    event: self.toggle(),
                    prevent_default: true,
                },
                Some(Action::Clear) => InputOutcome {
                    event: self.clear(),
                    prevent_default: true,
                },
                None => InputOutcome::default(),
            },
        }
    }

    // ── Render loop ──────────────────────────────────────────────────

    /// Render the frame registered as `handle` and register the next one.
    ///
    /// Returns `None` for a handle that is not the live registration.
    pub fn tick(&mut self, handle: TickHandle) -> Option<Frame> {
        if self.mode != Mode::Running || self.tick_handle != Some(handle) {
            trace!(handle = handle.id(), "ignoring stale tick");
            return None;
        }
        self.tick_handle = None;
        let frame = self.frame();
        self.render(&frame);
        self.tick_handle = Some(self.scheduler.schedule_next());
        trace!(elapsed_ms = frame.elapsed_ms, "tick");
        Some(frame)
    }

    /// Poll the scheduler and tick if a frame is due.
    pub fn pump(&mut self) -> Option<Frame> {
        let handle = self.scheduler.poll_due()?;
        self.tick(handle)
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn begin_loop(&mut self) {
        if self.tick_handle.is_none() {
            self.tick_handle = Some(self.scheduler.schedule_next());
        }
    }

    fn cancel_loop(&mut self) {
        if let Some(handle) = self.tick_handle.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn render(&mut self, frame: &Frame) {
        self.surface.set_display(&frame.display);
        self.surface.set_title(&frame.title);
        self.surface.set_clear_enabled(frame.clear_enabled);
    }

    fn render_idle(&mut self) {
        self.surface.set_display(&DisplayFields::zero());
        let title = format_title(&self.options.title_prefix, ZERO_CLOCK);
        self.surface.set_title(&title);
        self.surface.set_clear_enabled(self.is_clear_enabled());
    }

    fn push_appearance(&mut self) {
        let appearance = self.appearance();
        self.surface.set_appearance(&appearance);
    }
}
