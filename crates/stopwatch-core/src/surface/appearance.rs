use serde::{Deserialize, Serialize};

use crate::input::KeyCode;
use crate::timer::Mode;

/// Visual treatment of the toggle affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleVariant {
    /// Start and Pause share this look.
    Primary,
    /// Continue is set apart from the other two.
    Continue,
}

/// What the toggle affordance and status text should show for a mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    pub mode: Mode,
    pub label: String,
    pub pressed: bool,
    pub variant: ToggleVariant,
    /// Short visible status hint.
    pub hint: String,
    /// Screen-reader announcement.
    pub announcement: String,
}

impl Appearance {
    /// Projection for `mode`, naming `toggle_key` in the announcement.
    pub fn for_mode(mode: Mode, toggle_key: KeyCode) -> Self {
        let (label, pressed, variant, hint, verb) = match mode {
            Mode::Idle => ("Start", false, ToggleVariant::Primary, "Ready", "start"),
            Mode::Running => ("Pause", true, ToggleVariant::Primary, "Running", "pause"),
            Mode::Paused => ("Continue", false, ToggleVariant::Continue, "Paused", "continue"),
        };
        Self {
            mode,
            label: label.to_string(),
            pressed,
            variant,
            hint: hint.to_string(),
            announcement: format!("{hint}. Press {} to {verb}.", toggle_key.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_projection() {
        let a = Appearance::for_mode(Mode::Idle, KeyCode::Space);
        assert_eq!(a.label, "Start");
        assert!(!a.pressed);
        assert_eq!(a.variant, ToggleVariant::Primary);
        assert_eq!(a.announcement, "Ready. Press Space to start.");
    }

    #[test]
    fn running_projection() {
        let a = Appearance::for_mode(Mode::Running, KeyCode::Space);
        assert_eq!(a.label, "Pause");
        assert!(a.pressed);
        assert_eq!(a.hint, "Running");
        assert_eq!(a.announcement, "Running. Press Space to pause.");
    }

    #[test]
    fn paused_projection_is_distinct() {
        let a = Appearance::for_mode(Mode::Paused, KeyCode::Space);
        assert_eq!(a.label, "Continue");
        assert!(!a.pressed);
        assert_eq!(a.variant, ToggleVariant::Continue);
        assert_eq!(a.announcement, "Paused. Press Space to continue.");
    }

    #[test]
    fn announcement_follows_binding() {
        let a = Appearance::for_mode(Mode::Idle, KeyCode::Letter('S'));
        assert_eq!(a.announcement, "Ready. Press S to start.");
    }
}
