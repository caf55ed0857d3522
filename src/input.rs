// Keyboard shortcuts for the desktop shell
// Alt+Tab cycles windows, Ctrl+M minimizes the focused one, Escape closes the start menu.

use serde::{Deserialize, Serialize};

/// A key press as reported by the frontend (DOM `KeyboardEvent` fields)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPress {
    pub key: String,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub shift: bool,
}

impl KeyPress {
    pub fn plain(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ..Self::default()
        }
    }

    pub fn with_alt(key: &str) -> Self {
        Self {
            key: key.to_string(),
            alt: true,
            ..Self::default()
        }
    }

    pub fn with_ctrl(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ctrl: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShellAction {
    CloseStartMenu,
    CycleFocus,
    MinimizeFocused,
}

/// Map a key press to a desktop action, if it is one of the shell shortcuts
pub fn resolve_shell_key(press: &KeyPress) -> Option<ShellAction> {
    let key = press.key.to_lowercase();
    if press.key == "Escape" {
        Some(ShellAction::CloseStartMenu)
    } else if press.alt && key == "tab" {
        Some(ShellAction::CycleFocus)
    } else if press.ctrl && key == "m" {
        Some(ShellAction::MinimizeFocused)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_resolution() {
        assert_eq!(
            resolve_shell_key(&KeyPress::plain("Escape")),
            Some(ShellAction::CloseStartMenu)
        );
        assert_eq!(
            resolve_shell_key(&KeyPress::with_alt("Tab")),
            Some(ShellAction::CycleFocus)
        );
        assert_eq!(
            resolve_shell_key(&KeyPress::with_ctrl("M")),
            Some(ShellAction::MinimizeFocused)
        );
    }

    #[test]
    fn test_unmodified_keys_are_ignored() {
        assert_eq!(resolve_shell_key(&KeyPress::plain("Tab")), None);
        assert_eq!(resolve_shell_key(&KeyPress::plain("m")), None);
        assert_eq!(resolve_shell_key(&KeyPress::with_alt("m")), None);
    }

    #[test]
    fn test_key_press_from_frontend_json() {
        let press: KeyPress = serde_json::from_str(r#"{"key":"Tab","alt":true}"#).unwrap();
        assert_eq!(press, KeyPress::with_alt("Tab"));
    }
}
