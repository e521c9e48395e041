//! Click (press/release) events.

use serde::{Deserialize, Serialize};

/// Phase of a click transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickKind {
    /// Pointer went down / display touched
    Pressed,
    /// Pointer went up / touch lifted
    Released,
}

/// A single press or release transition at a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickEvent {
    pub kind: ClickKind,
    pub x: i16,
    pub y: i16,
}

impl ClickEvent {
    pub fn new(kind: ClickKind, x: i16, y: i16) -> Self {
        Self { kind, x, y }
    }

    pub fn pressed(x: i16, y: i16) -> Self {
        Self::new(ClickKind::Pressed, x, y)
    }

    pub fn released(x: i16, y: i16) -> Self {
        Self::new(ClickKind::Released, x, y)
    }

    pub fn is_press(&self) -> bool {
        self.kind == ClickKind::Pressed
    }
}
