//! Recognized gestures.

use serde::{Deserialize, Serialize};

/// Kind of a recognized gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureKind {
    SwipeHorizontal,
    SwipeVertical,
}

/// A discrete gesture, delivered once per recognition rather than per sample.
///
/// The sign of `velocity` gives the direction along the swipe axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureEvent {
    pub kind: GestureKind,
    pub velocity: i16,
    pub x: i16,
    pub y: i16,
}

impl GestureEvent {
    pub fn new(kind: GestureKind, velocity: i16, x: i16, y: i16) -> Self {
        Self {
            kind,
            velocity,
            x,
            y,
        }
    }

    pub fn swipe_horizontal(velocity: i16, x: i16, y: i16) -> Self {
        Self::new(GestureKind::SwipeHorizontal, velocity, x, y)
    }

    pub fn swipe_vertical(velocity: i16, x: i16, y: i16) -> Self {
        Self::new(GestureKind::SwipeVertical, velocity, x, y)
    }
}
