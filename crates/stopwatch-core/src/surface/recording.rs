use super::{Appearance, AppearanceSink, ControlSink, DisplaySink, TitleSink};
use crate::timer::DisplayFields;

/// Surface that keeps the latest value of every sink plus a write count.
///
/// Used by tests and by the CLI's scripted replay.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub display: Option<DisplayFields>,
    pub title: Option<String>,
    pub clear_enabled: Option<bool>,
    pub appearance: Option<Appearance>,
    pub display_writes: usize,
    pub title_writes: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display fields joined back into `HH:MM:SS.mmm`.
    pub fn display_text(&self) -> Option<String> {
        self.display.as_ref().map(ToString::to_string)
    }

    pub fn clear_enabled(&self) -> bool {
        self.clear_enabled.unwrap_or(false)
    }
}

impl DisplaySink for RecordingSurface {
    fn set_display(&mut self, fields: &DisplayFields) {
        self.display = Some(fields.clone());
        self.display_writes += 1;
    }
}

impl TitleSink for RecordingSurface {
    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
        self.title_writes += 1;
    }
}

impl ControlSink for RecordingSurface {
    fn set_clear_enabled(&mut self, enabled: bool) {
        self.clear_enabled = Some(enabled);
    }
}

impl AppearanceSink for RecordingSurface {
    fn set_appearance(&mut self, appearance: &Appearance) {
        self.appearance = Some(appearance.clone());
    }
}
