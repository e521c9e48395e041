//! Key and button codes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An 8-bit key or button identifier.
///
/// Intentionally minimal: no modifiers and no press/release phase. One
/// `KeyCode` is delivered per activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(pub u8);

impl KeyCode {
    pub const BACKSPACE: KeyCode = KeyCode(8);
    pub const TAB: KeyCode = KeyCode(9);
    pub const ENTER: KeyCode = KeyCode(13);
    pub const ESCAPE: KeyCode = KeyCode(27);

    pub fn value(self) -> u8 {
        self.0
    }

    /// The printable ASCII character for this code, if it has one
    pub fn as_char(self) -> Option<char> {
        let c = char::from(self.0);
        (c.is_ascii_graphic() || c == ' ').then_some(c)
    }
}

impl From<u8> for KeyCode {
    fn from(value: u8) -> Self {
        KeyCode(value)
    }
}

impl From<KeyCode> for u8 {
    fn from(code: KeyCode) -> Self {
        code.0
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_char() {
            Some(c) => write!(f, "'{}' ({})", c, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}
