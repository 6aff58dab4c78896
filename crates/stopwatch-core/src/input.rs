//! Keyboard bindings and input dispatch.
//!
//! Key codes use the DOM `KeyboardEvent.code` names (`Space`, `Escape`,
//! `KeyS`, `Digit1`, ...), both in configuration files and on the wire.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::events::Event;

/// A physical key the bindings can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum KeyCode {
    Space,
    Escape,
    Enter,
    Tab,
    Backspace,
    /// `KeyA`..`KeyZ`, stored uppercase.
    Letter(char),
    /// `Digit0`..`Digit9`.
    Digit(u8),
}

impl KeyCode {
    /// Human-facing key name.
    pub fn label(&self) -> String {
        match self {
            KeyCode::Letter(c) => c.to_string(),
            KeyCode::Digit(d) => d.to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Space => f.write_str("Space"),
            KeyCode::Escape => f.write_str("Escape"),
            KeyCode::Enter => f.write_str("Enter"),
            KeyCode::Tab => f.write_str("Tab"),
            KeyCode::Backspace => f.write_str("Backspace"),
            KeyCode::Letter(c) => write!(f, "Key{c}"),
            KeyCode::Digit(d) => write!(f, "Digit{d}"),
        }
    }
}

impl FromStr for KeyCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = match s {
            "Space" => KeyCode::Space,
            "Escape" => KeyCode::Escape,
            "Enter" => KeyCode::Enter,
            "Tab" => KeyCode::Tab,
            "Backspace" => KeyCode::Backspace,
            _ => {
                let single = |rest: &str| {
                    let mut chars = rest.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => Some(c),
                        _ => None,
                    }
                };
                if let Some(c) = s.strip_prefix("Key").and_then(single) {
                    if !c.is_ascii_uppercase() {
                        return Err(ValidationError::UnknownKey(s.to_string()));
                    }
                    KeyCode::Letter(c)
                } else if let Some(c) = s.strip_prefix("Digit").and_then(single) {
                    let digit = c
                        .to_digit(10)
                        .ok_or_else(|| ValidationError::UnknownKey(s.to_string()))?;
                    KeyCode::Digit(digit as u8)
                } else {
                    return Err(ValidationError::UnknownKey(s.to_string()));
                }
            }
        };
        Ok(code)
    }
}

impl TryFrom<String> for KeyCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<KeyCode> for String {
    fn from(code: KeyCode) -> Self {
        code.to_string()
    }
}

/// Controller action a binding resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Toggle,
    Clear,
}

/// Primary (toggle) and secondary (clear) keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    #[serde(default = "default_toggle_key")]
    pub toggle: KeyCode,
    #[serde(default = "default_clear_key")]
    pub clear: KeyCode,
}

fn default_toggle_key() -> KeyCode {
    KeyCode::Space
}
fn default_clear_key() -> KeyCode {
    KeyCode::Escape
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            toggle: default_toggle_key(),
            clear: default_clear_key(),
        }
    }
}

impl KeyBindings {
    /// Build bindings, rejecting a key bound to both actions.
    pub fn new(toggle: KeyCode, clear: KeyCode) -> Result<Self, ValidationError> {
        let bindings = Self { toggle, clear };
        bindings.validate()?;
        Ok(bindings)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.toggle == self.clear {
            return Err(ValidationError::InvalidValue {
                field: "keys".into(),
                message: format!("{} is bound to both toggle and clear", self.toggle),
            });
        }
        Ok(())
    }

    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        if key == self.toggle {
            Some(Action::Toggle)
        } else if key == self.clear {
            Some(Action::Clear)
        } else {
            None
        }
    }
}

/// Discrete input delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The toggle affordance was activated.
    ToggleClicked,
    /// The clear affordance was activated.
    ClearClicked,
    /// A key went down.
    KeyDown(KeyCode),
}

/// Result of handling one [`InputEvent`].
#[derive(Debug, Clone, Default)]
pub struct InputOutcome {
    /// Transition the input caused, if any.
    pub event: Option<Event>,
    /// The host must suppress the key's default behaviour.
    pub prevent_default: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dom_codes() {
        assert_eq!("Space".parse::<KeyCode>().unwrap(), KeyCode::Space);
        assert_eq!("Escape".parse::<KeyCode>().unwrap(), KeyCode::Escape);
        assert_eq!("KeyS".parse::<KeyCode>().unwrap(), KeyCode::Letter('S'));
        assert_eq!("Digit7".parse::<KeyCode>().unwrap(), KeyCode::Digit(7));
    }

    #[test]
    fn rejects_unknown_codes() {
        for bad in ["", "space", "Keys", "KeyAB", "Key1", "DigitX", "F13"] {
            assert!(bad.parse::<KeyCode>().is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn display_matches_parse() {
        for code in [
            KeyCode::Space,
            KeyCode::Backspace,
            KeyCode::Letter('Q'),
            KeyCode::Digit(0),
        ] {
            assert_eq!(code.to_string().parse::<KeyCode>().unwrap(), code);
        }
    }

    #[test]
    fn default_bindings() {
        let keys = KeyBindings::default();
        assert_eq!(keys.action_for(KeyCode::Space), Some(Action::Toggle));
        assert_eq!(keys.action_for(KeyCode::Escape), Some(Action::Clear));
        assert_eq!(keys.action_for(KeyCode::Enter), None);
    }

    #[test]
    fn same_key_for_both_actions_is_rejected() {
        assert!(KeyBindings::new(KeyCode::Space, KeyCode::Space).is_err());
        assert!(KeyBindings::new(KeyCode::Enter, KeyCode::Backspace).is_ok());
    }

    #[test]
    fn bindings_deserialize_from_toml() {
        let keys: KeyBindings = toml::from_str("toggle = \"KeyP\"").unwrap();
        assert_eq!(keys.toggle, KeyCode::Letter('P'));
        assert_eq!(keys.clear, KeyCode::Escape);

        let err = toml::from_str::<KeyBindings>("toggle = \"Hyper\"");
        assert!(err.is_err());
    }
}
