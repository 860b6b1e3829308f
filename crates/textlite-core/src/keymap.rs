//! Keyboard accelerators. Matching is exact: Ctrl+Shift+S is not Ctrl+S.

use std::collections::HashMap;
use std::fmt;

use crate::command::Command;

/// Keyboard modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool, // Cmd on macOS, Win on Windows
}

impl Modifiers {
    /// No modifiers pressed.
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    /// Ctrl modifier.
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        alt: false,
        shift: false,
        meta: false,
    };

    /// Returns true if no modifiers are pressed.
    pub fn is_empty(&self) -> bool {
        !self.ctrl && !self.alt && !self.shift && !self.meta
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.alt {
            parts.push("Alt");
        }
        if self.shift {
            parts.push("Shift");
        }
        if self.meta {
            #[cfg(target_os = "macos")]
            parts.push("Cmd");
            #[cfg(not(target_os = "macos"))]
            parts.push("Win");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// A key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A character key, stored lowercase
    Char(char),
    Escape,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c.to_uppercase()),
            Key::Escape => write!(f, "Esc"),
        }
    }
}

/// A key press event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    /// Creates a key press. Character keys are case-folded.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        let key = match key {
            Key::Char(c) => Key::Char(c.to_ascii_lowercase()),
            other => other,
        };
        Self { key, modifiers }
    }

    /// Ctrl plus a character.
    pub fn ctrl(c: char) -> Self {
        Self::new(Key::Char(c), Modifiers::CTRL)
    }
}

impl fmt::Display for KeyPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.modifiers, self.key)
        }
    }
}

/// Accelerator table.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<KeyPress, Command>,
}

impl Keymap {
    /// Creates the keymap with the standard accelerators.
    pub fn new() -> Self {
        let bindings = [
            ('n', Command::NewFile),
            ('o', Command::OpenFile),
            ('s', Command::Save),
            ('a', Command::SelectAll),
            ('z', Command::Undo),
            ('y', Command::Redo),
            ('x', Command::Cut),
            ('c', Command::Copy),
            ('v', Command::Paste),
            ('d', Command::ToggleDarkMode),
        ]
        .into_iter()
        .map(|(c, command)| (KeyPress::ctrl(c), command))
        .collect();

        Self { bindings }
    }

    /// Resolves a key press to its command.
    pub fn lookup(&self, key: &KeyPress) -> Option<Command> {
        self.bindings.get(key).copied()
    }

    /// The accelerator bound to a command, for menu labels.
    pub fn accelerator(&self, command: Command) -> Option<KeyPress> {
        self.bindings
            .iter()
            .find(|&(_, &bound)| bound == command)
            .map(|(&key, _)| key)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}
