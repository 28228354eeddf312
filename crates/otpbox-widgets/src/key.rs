//! Key bindings for the OTP fields' navigation keys.

use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key binding that maps one or more key combinations to a described action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// The set of key combinations that trigger this binding.
    pub keys: Vec<KeyCombination>,
    /// A human-readable description of the action this binding performs.
    pub description: String,
    /// Whether this binding is currently active. Disabled bindings never match.
    pub enabled: bool,
}

/// A single key press with optional modifier keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombination {
    /// The base key code.
    pub code: KeyCode,
    /// Modifier keys that must be held alongside the base key.
    pub modifiers: KeyModifiers,
}

impl Binding {
    /// Create a new binding for a single key combination.
    pub fn new(key: KeyCombination, description: impl Into<String>) -> Self {
        Self::with_keys(vec![key], description)
    }

    /// Create a new binding for several key combinations.
    pub fn with_keys(keys: Vec<KeyCombination>, description: impl Into<String>) -> Self {
        Self {
            keys,
            description: description.into(),
            enabled: true,
        }
    }

    /// Return whether the event matches any of this binding's combinations.
    /// Extra modifiers on the event are tolerated.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.enabled
            && self
                .keys
                .iter()
                .any(|k| k.code == event.code && event.modifiers.contains(k.modifiers))
    }

    /// Set whether this binding is enabled.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Key names joined with `/`, e.g. `"←/h"`.
    pub fn key_label(&self) -> String {
        self.keys
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl KeyCombination {
    /// Create a key combination with no modifier keys.
    pub fn new(code: KeyCode) -> Self {
        Self::with_modifiers(code, KeyModifiers::NONE)
    }

    /// Create a key combination with the Ctrl modifier.
    pub fn ctrl(code: KeyCode) -> Self {
        Self::with_modifiers(code, KeyModifiers::CONTROL)
    }

    /// Create a key combination with an explicit set of modifier keys.
    pub fn with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }
}

impl fmt::Display for KeyCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            f.write_str("ctrl+")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            f.write_str("alt+")?;
        }
        match self.code {
            KeyCode::Left => f.write_str("←"),
            KeyCode::Right => f.write_str("→"),
            KeyCode::Backspace => f.write_str("⌫"),
            KeyCode::Char(c) => write!(f, "{c}"),
            other => write!(f, "{other}"),
        }
    }
}

/// Trait for types that define key bindings, so a host can render help text.
pub trait KeyMap {
    /// The most important bindings, for a one-line help bar.
    fn short_help(&self) -> Vec<&Binding>;
}

/// Navigation and deletion keys understood by
/// [`OtpFields`](crate::otp_fields::OtpFields).
///
/// Every key not matched here is treated as an entry keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpKeyMap {
    /// Move focus to the previous field.
    pub prev: Binding,
    /// Move focus to the next field.
    pub next: Binding,
    /// Delete the focused field's value and step back.
    pub delete: Binding,
}

impl Default for OtpKeyMap {
    fn default() -> Self {
        Self {
            prev: Binding::new(KeyCombination::new(KeyCode::Left), "previous"),
            next: Binding::new(KeyCombination::new(KeyCode::Right), "next"),
            delete: Binding::new(KeyCombination::new(KeyCode::Backspace), "delete"),
        }
    }
}

impl KeyMap for OtpKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.prev, &self.next, &self.delete]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn binding_matches_code() {
        let b = Binding::new(KeyCombination::new(KeyCode::Left), "previous");
        assert!(b.matches(&key(KeyCode::Left, KeyModifiers::NONE)));
        assert!(!b.matches(&key(KeyCode::Right, KeyModifiers::NONE)));
    }

    #[test]
    fn binding_tolerates_extra_modifiers() {
        let b = Binding::new(KeyCombination::new(KeyCode::Left), "previous");
        assert!(b.matches(&key(KeyCode::Left, KeyModifiers::SHIFT)));
    }

    #[test]
    fn binding_requires_its_modifiers() {
        let b = Binding::new(KeyCombination::ctrl(KeyCode::Char('h')), "delete");
        assert!(!b.matches(&key(KeyCode::Char('h'), KeyModifiers::NONE)));
        assert!(b.matches(&key(KeyCode::Char('h'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn disabled_binding_never_matches() {
        let b = Binding::new(KeyCombination::new(KeyCode::Left), "previous").enabled(false);
        assert!(!b.matches(&key(KeyCode::Left, KeyModifiers::NONE)));
    }

    #[test]
    fn key_labels() {
        let b = Binding::with_keys(
            vec![
                KeyCombination::new(KeyCode::Backspace),
                KeyCombination::ctrl(KeyCode::Char('h')),
            ],
            "delete",
        );
        assert_eq!(b.key_label(), "⌫/ctrl+h");
    }

    #[test]
    fn default_key_map_short_help() {
        let km = OtpKeyMap::default();
        let labels: Vec<_> = km.short_help().iter().map(|b| b.key_label()).collect();
        assert_eq!(labels, vec!["←", "→", "⌫"]);
    }
}
