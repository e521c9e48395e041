//! Terminal input bridge.
//!
//! Maps crossterm events one-to-one onto `UiEvent`s so a terminal can stand in
//! for a touch panel and button matrix. No recognition happens here: a scroll
//! wheel notch already is a discrete gesture, and every left-button drag
//! report already is a drag sample.

use crossterm::event::{
    Event, KeyCode as TermKey, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use crate::events::{ClickEvent, DragEvent, GestureEvent, KeyCode, UiEvent};

/// Translates terminal events, remembering where the pointer went down.
#[derive(Debug, Clone)]
pub struct TerminalInput {
    /// Last known position of the held left button
    pointer: Option<(i16, i16)>,
    /// Velocity reported for swipes from the scroll wheel
    swipe_velocity: i16,
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new(8)
    }
}

impl TerminalInput {
    pub fn new(swipe_velocity: i16) -> Self {
        Self {
            pointer: None,
            swipe_velocity,
        }
    }

    /// Translate one terminal event; `None` for events with no counterpart.
    pub fn translate(&mut self, event: &Event) -> Option<UiEvent> {
        match event {
            Event::Key(key) => translate_key(key),
            Event::Mouse(mouse) => self.translate_mouse(mouse),
            _ => None,
        }
    }

    /// Whether the left button is currently held
    pub fn is_pressed(&self) -> bool {
        self.pointer.is_some()
    }

    fn translate_mouse(&mut self, mouse: &MouseEvent) -> Option<UiEvent> {
        let x = clamp_coord(mouse.column);
        let y = clamp_coord(mouse.row);
        let velocity = self.swipe_velocity;

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pointer = Some((x, y));
                Some(UiEvent::Click(ClickEvent::pressed(x, y)))
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let (old_x, old_y) = self.pointer.unwrap_or((x, y));
                self.pointer = Some((x, y));
                Some(UiEvent::Drag(DragEvent::new(old_x, old_y, x, y)))
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.pointer = None;
                Some(UiEvent::Click(ClickEvent::released(x, y)))
            }
            MouseEventKind::ScrollUp => Some(UiEvent::Gesture(GestureEvent::swipe_vertical(
                velocity, x, y,
            ))),
            MouseEventKind::ScrollDown => Some(UiEvent::Gesture(GestureEvent::swipe_vertical(
                velocity.saturating_neg(),
                x,
                y,
            ))),
            MouseEventKind::ScrollLeft => Some(UiEvent::Gesture(
                GestureEvent::swipe_horizontal(velocity, x, y),
            )),
            MouseEventKind::ScrollRight => Some(UiEvent::Gesture(
                GestureEvent::swipe_horizontal(velocity.saturating_neg(), x, y),
            )),
            _ => None,
        }
    }
}

fn translate_key(key: &KeyEvent) -> Option<UiEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let code = match key.code {
        TermKey::Char(c) if c.is_ascii() => KeyCode(c as u8),
        TermKey::Enter => KeyCode::ENTER,
        TermKey::Tab => KeyCode::TAB,
        TermKey::Backspace => KeyCode::BACKSPACE,
        TermKey::Esc => KeyCode::ESCAPE,
        _ => return None,
    };
    Some(UiEvent::key(code))
}

fn clamp_coord(value: u16) -> i16 {
    i16::try_from(value).unwrap_or(i16::MAX)
}
