mod clock;
mod engine;
mod format;
mod scheduler;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use engine::{Frame, Mode, Stopwatch, StopwatchOptions};
pub use format::{format_clock, format_title, DisplayFields, TimeParts, ZERO_CLOCK};
pub use scheduler::{FramePacer, FrameScheduler, ManualScheduler, TickHandle};
