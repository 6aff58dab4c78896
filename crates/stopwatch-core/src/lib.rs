//! # Stopwatch Core Library
//!
//! This library provides the timekeeping logic for the Stopwatch widget. The
//! host (a browser page, a terminal, a test) supplies a clock, a frame
//! scheduler and a set of output sinks; the library owns every state
//! transition and decides what gets rendered.
//!
//! ## Architecture
//!
//! - **Controller**: An idle/running/paused state machine over an injected
//!   monotonic clock, keeping one frame registered while it runs
//! - **Surface**: Narrow sink traits for the display fields, the title, the
//!   clear affordance and the toggle appearance
//! - **Input**: Key bindings resolving key presses to toggle/clear
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`Stopwatch`]: Core controller
//! - [`FrameScheduler`]: Render loop registration primitive
//! - [`Surface`]: Everything the controller writes to
//! - [`Config`]: Application configuration management

pub mod error;
pub mod events;
pub mod input;
pub mod storage;
pub mod surface;
pub mod timer;

pub use error::{ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use input::{Action, InputEvent, InputOutcome, KeyBindings, KeyCode};
pub use storage::Config;
pub use surface::{Appearance, RecordingSurface, Surface, ToggleVariant};
pub use timer::{
    format_clock, Clock, FramePacer, FrameScheduler, Frame, ManualClock, ManualScheduler, Mode,
    MonotonicClock, Stopwatch, StopwatchOptions, TickHandle, TimeParts,
};
