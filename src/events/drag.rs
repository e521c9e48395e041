//! Drag samples.

use serde::{Deserialize, Serialize};

/// One sample of continuous pointer movement, from `old` to `new`.
///
/// Samples of one gesture reach the listener in temporal order, so a
/// listener can follow the pointer by summing deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEvent {
    pub old_x: i16,
    pub old_y: i16,
    pub new_x: i16,
    pub new_y: i16,
}

impl DragEvent {
    pub fn new(old_x: i16, old_y: i16, new_x: i16, new_y: i16) -> Self {
        Self {
            old_x,
            old_y,
            new_x,
            new_y,
        }
    }

    /// Horizontal movement of this sample
    pub fn delta_x(&self) -> i32 {
        i32::from(self.new_x) - i32::from(self.old_x)
    }

    /// Vertical movement of this sample
    pub fn delta_y(&self) -> i32 {
        i32::from(self.new_y) - i32::from(self.old_y)
    }
}
