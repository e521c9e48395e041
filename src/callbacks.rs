//! Closure-based listener.
//!
//! `CallbackListener` holds one optional closure per operation. An empty slot
//! behaves exactly like the trait default, so callers wire up only the events
//! they need without declaring a type.

use crate::events::{ClickEvent, DragEvent, EventKind, GestureEvent, KeyCode};
use crate::listener::UiEventListener;

/// A listener assembled from optional callback slots.
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use uiloop::{CallbackListener, UiEventListener};
///
/// let ticks = Rc::new(Cell::new(0));
/// let counter = ticks.clone();
/// let mut listener = CallbackListener::new().on_tick(move || counter.set(counter.get() + 1));
///
/// listener.handle_tick_event();
/// listener.handle_pending_screen_transition(); // unset slot, nothing happens
/// assert_eq!(ticks.get(), 1);
/// ```
#[derive(Default)]
pub struct CallbackListener {
    click: Option<Box<dyn FnMut(&ClickEvent)>>,
    drag: Option<Box<dyn FnMut(&DragEvent)>>,
    gesture: Option<Box<dyn FnMut(&GestureEvent)>>,
    key: Option<Box<dyn FnMut(KeyCode)>>,
    tick: Option<Box<dyn FnMut()>>,
    pending_transition: Option<Box<dyn FnMut()>>,
}

impl CallbackListener {
    /// Create a listener with every slot empty
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_click(mut self, f: impl FnMut(&ClickEvent) + 'static) -> Self {
        self.click = Some(Box::new(f));
        self
    }

    pub fn on_drag(mut self, f: impl FnMut(&DragEvent) + 'static) -> Self {
        self.drag = Some(Box::new(f));
        self
    }

    pub fn on_gesture(mut self, f: impl FnMut(&GestureEvent) + 'static) -> Self {
        self.gesture = Some(Box::new(f));
        self
    }

    pub fn on_key(mut self, f: impl FnMut(KeyCode) + 'static) -> Self {
        self.key = Some(Box::new(f));
        self
    }

    pub fn on_tick(mut self, f: impl FnMut() + 'static) -> Self {
        self.tick = Some(Box::new(f));
        self
    }

    pub fn on_pending_screen_transition(mut self, f: impl FnMut() + 'static) -> Self {
        self.pending_transition = Some(Box::new(f));
        self
    }

    /// Whether a callback is set for the given event kind
    pub fn is_bound(&self, kind: EventKind) -> bool {
        match kind {
            EventKind::Click => self.click.is_some(),
            EventKind::Drag => self.drag.is_some(),
            EventKind::Gesture => self.gesture.is_some(),
            EventKind::Key => self.key.is_some(),
            EventKind::Tick => self.tick.is_some(),
            EventKind::PendingScreenTransition => self.pending_transition.is_some(),
        }
    }
}

impl std::fmt::Debug for CallbackListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bound: Vec<EventKind> = EventKind::ALL
            .into_iter()
            .filter(|kind| self.is_bound(*kind))
            .collect();
        f.debug_struct("CallbackListener")
            .field("bound", &bound)
            .finish()
    }
}

impl UiEventListener for CallbackListener {
    fn handle_click_event(&mut self, event: &ClickEvent) {
        if let Some(f) = self.click.as_mut() {
            f(event);
        }
    }

    fn handle_drag_event(&mut self, event: &DragEvent) {
        if let Some(f) = self.drag.as_mut() {
            f(event);
        }
    }

    fn handle_gesture_event(&mut self, event: &GestureEvent) {
        if let Some(f) = self.gesture.as_mut() {
            f(event);
        }
    }

    fn handle_key_event(&mut self, code: KeyCode) {
        if let Some(f) = self.key.as_mut() {
            f(code);
        }
    }

    fn handle_tick_event(&mut self) {
        if let Some(f) = self.tick.as_mut() {
            f();
        }
    }

    fn handle_pending_screen_transition(&mut self) {
        if let Some(f) = self.pending_transition.as_mut() {
            f();
        }
    }
}
