//! Output sinks the controller renders into.
//!
//! Each sink is a narrow trait so hosts can route fields to wherever they
//! live (DOM nodes, a terminal line, a test recorder). [`Surface`] bundles
//! all four and is implemented for anything that implements them.

mod appearance;
mod recording;

pub use appearance::{Appearance, ToggleVariant};
pub use recording::RecordingSurface;

use crate::timer::DisplayFields;

/// Receives the four display fields.
pub trait DisplaySink {
    fn set_display(&mut self, fields: &DisplayFields);
}

/// Receives the host window/tab title.
pub trait TitleSink {
    fn set_title(&mut self, title: &str);
}

/// Receives whether the clear affordance is enabled.
pub trait ControlSink {
    fn set_clear_enabled(&mut self, enabled: bool);
}

/// Receives the toggle affordance projection for the current mode.
pub trait AppearanceSink {
    fn set_appearance(&mut self, appearance: &Appearance);
}

/// Everything the controller writes to.
pub trait Surface: DisplaySink + TitleSink + ControlSink + AppearanceSink {}

impl<T> Surface for T where T: DisplaySink + TitleSink + ControlSink + AppearanceSink {}
