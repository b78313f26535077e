//! Key bindings for carousel navigation.
//!
//! Bindings are built from option functions so a binding can be declared in one
//! expression:
//!
//! ```rust
//! use bubbletea_carousel::key;
//!
//! let next = key::new_binding(vec![
//!     key::with_keys_str(&["right", "l"]),
//!     key::with_help("→/l", "next"),
//! ]);
//! assert_eq!(next.help().key, "→/l");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key.
    pub code: KeyCode,
    /// Modifiers that must be held.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

/// Help text shown for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short rendering of the keys, e.g. `"←/h"`.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A set of key presses that trigger one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

/// Option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Builds a binding from options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Sets the keys from typed key presses.
pub fn with_keys(keys: Vec<KeyPress>) -> BindingOpt {
    Box::new(move |b| b.keys = keys)
}

/// Sets the keys from names such as `"left"`, `"pgdown"`, `"h"` or `"ctrl+n"`.
///
/// Names that are not recognised are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let parsed: Vec<KeyPress> = keys.iter().filter_map(|k| parse_key(k)).collect();
    Box::new(move |b| b.keys = parsed)
}

/// Sets the help text.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b| b.help = help)
}

/// Starts the binding disabled.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b| b.disabled = true)
}

impl Binding {
    /// Returns true if the binding is enabled and `msg` is one of its keys.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled()
            && self
                .keys
                .iter()
                .any(|k| k.code == msg.key && k.mods == msg.modifiers)
    }

    /// Returns true if the binding is enabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// The keys that trigger this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// The help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }
}

/// Components that expose their bindings for help rendering.
pub trait KeyMap {
    /// Bindings for a compact single-line help view.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings grouped into columns for an expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

fn parse_key(name: &str) -> Option<KeyPress> {
    let (mods, base) = match name.rsplit_once('+') {
        Some((prefix, base)) if !base.is_empty() => {
            let mut mods = KeyModifiers::NONE;
            for m in prefix.split('+') {
                mods |= match m {
                    "ctrl" => KeyModifiers::CONTROL,
                    "alt" => KeyModifiers::ALT,
                    "shift" => KeyModifiers::SHIFT,
                    _ => return None,
                };
            }
            (mods, base)
        }
        _ => (KeyModifiers::NONE, name),
    };

    let code = match base {
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "pgup" => KeyCode::PageUp,
        "pgdown" => KeyCode::PageDown,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "enter" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "esc" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "space" => KeyCode::Char(' '),
        s => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(KeyPress { code, mods })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(parse_key("pgup"), Some(KeyPress::from(KeyCode::PageUp)));
        assert_eq!(parse_key("h"), Some(KeyPress::from(KeyCode::Char('h'))));
        assert_eq!(
            parse_key("ctrl+n"),
            Some(KeyPress::from((KeyCode::Char('n'), KeyModifiers::CONTROL)))
        );
        assert_eq!(parse_key("hyper+x"), None);
        assert_eq!(parse_key("left-ish"), None);
    }

    #[test]
    fn test_binding_matches_exact_modifiers() {
        let b = new_binding(vec![with_keys_str(&["right", "ctrl+f"])]);
        assert!(b.matches(&key(KeyCode::Right, KeyModifiers::NONE)));
        assert!(b.matches(&key(KeyCode::Char('f'), KeyModifiers::CONTROL)));
        assert!(!b.matches(&key(KeyCode::Char('f'), KeyModifiers::NONE)));
        assert!(!b.matches(&key(KeyCode::Left, KeyModifiers::NONE)));
    }

    #[test]
    fn test_typed_keys_match_like_named_keys() {
        let typed = new_binding(vec![with_keys(vec![
            KeyPress::from(KeyCode::PageDown),
            KeyPress::from((KeyCode::Char('n'), KeyModifiers::CONTROL)),
        ])]);
        let named = new_binding(vec![with_keys_str(&["pgdown", "ctrl+n"])]);
        assert_eq!(typed.keys(), named.keys());
        assert!(typed.matches(&key(KeyCode::PageDown, KeyModifiers::NONE)));
        assert!(typed.matches(&key(KeyCode::Char('n'), KeyModifiers::CONTROL)));
        assert!(!typed.matches(&key(KeyCode::Char('n'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = new_binding(vec![with_keys_str(&["left"]), with_disabled()]);
        assert!(!b.enabled());
        assert!(!b.matches(&key(KeyCode::Left, KeyModifiers::NONE)));

        b.set_enabled(true);
        assert!(b.matches(&key(KeyCode::Left, KeyModifiers::NONE)));
    }

    #[test]
    fn test_binding_without_keys_is_disabled() {
        let b = new_binding(vec![with_help("?", "nothing")]);
        assert!(!b.enabled());
        assert_eq!(b.help().desc, "nothing");
    }
}
