//! Listener trait definition
//!
//! The single extension point through which classified user-interface and
//! timing events reach application code.

use crate::events::{ClickEvent, DragEvent, GestureEvent, KeyCode, UiEvent};

/// Handler interface for user-interface events.
///
/// Every operation has an empty default body, so an implementation overrides
/// only the events it cares about and the rest stay inert. Apart from the
/// system tick, events not caused by the user's interaction with the device
/// are not part of this interface.
///
/// All operations run synchronously on the UI thread. The dispatcher waits
/// for each one to return before delivering the next event.
///
/// # Example
///
/// ```
/// use uiloop::{KeyCode, UiEventListener};
///
/// #[derive(Default)]
/// struct Buttons {
///     pressed: Vec<u8>,
/// }
///
/// impl UiEventListener for Buttons {
///     fn handle_key_event(&mut self, code: KeyCode) {
///         self.pressed.push(code.value());
///     }
/// }
///
/// let mut buttons = Buttons::default();
/// buttons.handle_key_event(KeyCode(3));
/// buttons.handle_tick_event(); // default, does nothing
/// assert_eq!(buttons.pressed, vec![3]);
/// ```
pub trait UiEventListener {
    /// Invoked when a mouse click or display touch transition has been detected.
    fn handle_click_event(&mut self, _event: &ClickEvent) {}

    /// Invoked once per drag sample.
    fn handle_drag_event(&mut self, _event: &DragEvent) {}

    /// Invoked once per recognized gesture.
    fn handle_gesture_event(&mut self, _event: &GestureEvent) {}

    /// Invoked when a key (or button) activation has been detected.
    fn handle_key_event(&mut self, _code: KeyCode) {}

    /// Invoked once per system tick.
    ///
    /// Frame timing depends on this returning promptly.
    fn handle_tick_event(&mut self) {}

    /// Invoked when a screen change is pending, before it is carried out.
    fn handle_pending_screen_transition(&mut self) {}

    /// Route an event to the matching operation.
    fn handle_event(&mut self, event: &UiEvent) {
        match event {
            UiEvent::Click(click) => self.handle_click_event(click),
            UiEvent::Drag(drag) => self.handle_drag_event(drag),
            UiEvent::Gesture(gesture) => self.handle_gesture_event(gesture),
            UiEvent::Key { code } => self.handle_key_event(*code),
            UiEvent::Tick => self.handle_tick_event(),
            UiEvent::PendingScreenTransition => self.handle_pending_screen_transition(),
        }
    }
}

impl<L: UiEventListener + ?Sized> UiEventListener for Box<L> {
    fn handle_click_event(&mut self, event: &ClickEvent) {
        (**self).handle_click_event(event)
    }

    fn handle_drag_event(&mut self, event: &DragEvent) {
        (**self).handle_drag_event(event)
    }

    fn handle_gesture_event(&mut self, event: &GestureEvent) {
        (**self).handle_gesture_event(event)
    }

    fn handle_key_event(&mut self, code: KeyCode) {
        (**self).handle_key_event(code)
    }

    fn handle_tick_event(&mut self) {
        (**self).handle_tick_event()
    }

    fn handle_pending_screen_transition(&mut self) {
        (**self).handle_pending_screen_transition()
    }

    fn handle_event(&mut self, event: &UiEvent) {
        (**self).handle_event(event)
    }
}

impl<L: UiEventListener + ?Sized> UiEventListener for &mut L {
    fn handle_click_event(&mut self, event: &ClickEvent) {
        (**self).handle_click_event(event)
    }

    fn handle_drag_event(&mut self, event: &DragEvent) {
        (**self).handle_drag_event(event)
    }

    fn handle_gesture_event(&mut self, event: &GestureEvent) {
        (**self).handle_gesture_event(event)
    }

    fn handle_key_event(&mut self, code: KeyCode) {
        (**self).handle_key_event(code)
    }

    fn handle_tick_event(&mut self) {
        (**self).handle_tick_event()
    }

    fn handle_pending_screen_transition(&mut self) {
        (**self).handle_pending_screen_transition()
    }

    fn handle_event(&mut self, event: &UiEvent) {
        (**self).handle_event(event)
    }
}
