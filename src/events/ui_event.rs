//! Sum type over everything a listener can receive.
//!
//! Dispatch queues, event scripts and the terminal bridge pass these around;
//! `UiEventListener::handle_event` routes each variant to its operation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ClickEvent, DragEvent, GestureEvent, KeyCode};

/// An already-classified event, one variant per listener operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    /// Press or release at a point
    Click(ClickEvent),
    /// One drag sample
    Drag(DragEvent),
    /// A recognized gesture
    Gesture(GestureEvent),
    /// Key or button activation
    Key { code: KeyCode },
    /// System tick
    Tick,
    /// A screen change has been requested but not committed
    PendingScreenTransition,
}

/// Discriminant of `UiEvent`, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Drag,
    Gesture,
    Key,
    Tick,
    PendingScreenTransition,
}

impl EventKind {
    pub const ALL: [EventKind; 6] = [
        EventKind::Click,
        EventKind::Drag,
        EventKind::Gesture,
        EventKind::Key,
        EventKind::Tick,
        EventKind::PendingScreenTransition,
    ];
}

impl UiEvent {
    pub fn key(code: impl Into<KeyCode>) -> Self {
        UiEvent::Key { code: code.into() }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            UiEvent::Click(_) => EventKind::Click,
            UiEvent::Drag(_) => EventKind::Drag,
            UiEvent::Gesture(_) => EventKind::Gesture,
            UiEvent::Key { .. } => EventKind::Key,
            UiEvent::Tick => EventKind::Tick,
            UiEvent::PendingScreenTransition => EventKind::PendingScreenTransition,
        }
    }
}

impl From<ClickEvent> for UiEvent {
    fn from(event: ClickEvent) -> Self {
        UiEvent::Click(event)
    }
}

impl From<DragEvent> for UiEvent {
    fn from(event: DragEvent) -> Self {
        UiEvent::Drag(event)
    }
}

impl From<GestureEvent> for UiEvent {
    fn from(event: GestureEvent) -> Self {
        UiEvent::Gesture(event)
    }
}

impl From<KeyCode> for UiEvent {
    fn from(code: KeyCode) -> Self {
        UiEvent::Key { code }
    }
}

impl fmt::Display for UiEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiEvent::Click(c) => write!(f, "click {:?} at ({}, {})", c.kind, c.x, c.y),
            UiEvent::Drag(d) => write!(
                f,
                "drag ({}, {}) -> ({}, {})",
                d.old_x, d.old_y, d.new_x, d.new_y
            ),
            UiEvent::Gesture(g) => write!(
                f,
                "gesture {:?} velocity {} at ({}, {})",
                g.kind, g.velocity, g.x, g.y
            ),
            UiEvent::Key { code } => write!(f, "key {}", code),
            UiEvent::Tick => write!(f, "tick"),
            UiEvent::PendingScreenTransition => write!(f, "pending screen transition"),
        }
    }
}
