//! Demo screens.
//!
//! Both screens write into a shared `DemoState` that the renderer reads
//! between ticks. Each overrides a different subset of handlers.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use uiloop::{ClickEvent, DragEvent, GestureEvent, KeyCode, TransitionHandle, UiEventListener};

/// Longest drag trail kept on the sketch screen
const MAX_TRAIL: usize = 2048;

pub type SharedState = Rc<RefCell<DemoState>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenId {
    #[default]
    Counters,
    Sketch,
}

impl ScreenId {
    pub fn title(self) -> &'static str {
        match self {
            ScreenId::Counters => "Counters",
            ScreenId::Sketch => "Sketch",
        }
    }
}

/// Everything the renderer shows.
#[derive(Debug, Default)]
pub struct DemoState {
    pub screen: ScreenId,
    pub ticks: u64,
    pub clicks: u32,
    pub last_click: Option<ClickEvent>,
    pub drags: u32,
    pub drag_total: (i32, i32),
    pub gestures: u32,
    pub last_gesture: Option<GestureEvent>,
    pub last_key: Option<KeyCode>,
    pub transitions: u32,
    pub trail: VecDeque<(i16, i16)>,
}

impl fmt::Display for DemoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "screen {}: {} ticks, {} clicks, {} drags, {} gestures, {} transitions",
            self.screen.title(),
            self.ticks,
            self.clicks,
            self.drags,
            self.gestures,
            self.transitions
        )
    }
}

/// Counts every kind of event.
pub struct CounterScreen {
    state: SharedState,
    transitions: TransitionHandle,
    leaving_to: Option<ScreenId>,
}

impl CounterScreen {
    pub fn boxed(state: &SharedState, transitions: &TransitionHandle) -> Box<dyn UiEventListener> {
        Box::new(Self {
            state: state.clone(),
            transitions: transitions.clone(),
            leaving_to: None,
        })
    }
}

impl UiEventListener for CounterScreen {
    fn handle_click_event(&mut self, event: &ClickEvent) {
        let mut state = self.state.borrow_mut();
        state.clicks += 1;
        state.last_click = Some(*event);
    }

    fn handle_drag_event(&mut self, event: &DragEvent) {
        let mut state = self.state.borrow_mut();
        state.drags += 1;
        state.drag_total.0 += event.delta_x();
        state.drag_total.1 += event.delta_y();
    }

    fn handle_gesture_event(&mut self, event: &GestureEvent) {
        let mut state = self.state.borrow_mut();
        state.gestures += 1;
        state.last_gesture = Some(*event);
    }

    fn handle_key_event(&mut self, code: KeyCode) {
        self.state.borrow_mut().last_key = Some(code);
        if code.as_char() == Some('n') {
            self.leaving_to = Some(ScreenId::Sketch);
            self.transitions
                .request(SketchScreen::boxed(&self.state, &self.transitions));
        }
    }

    fn handle_tick_event(&mut self) {
        self.state.borrow_mut().ticks += 1;
    }

    fn handle_pending_screen_transition(&mut self) {
        let mut state = self.state.borrow_mut();
        state.transitions += 1;
        if let Some(next) = self.leaving_to.take() {
            state.screen = next;
        }
    }
}

/// Draws the drag trail. Ticks, gestures and clicks are left to the defaults.
pub struct SketchScreen {
    state: SharedState,
    transitions: TransitionHandle,
    leaving_to: Option<ScreenId>,
}

impl SketchScreen {
    pub fn boxed(state: &SharedState, transitions: &TransitionHandle) -> Box<dyn UiEventListener> {
        Box::new(Self {
            state: state.clone(),
            transitions: transitions.clone(),
            leaving_to: None,
        })
    }
}

impl UiEventListener for SketchScreen {
    fn handle_drag_event(&mut self, event: &DragEvent) {
        let mut state = self.state.borrow_mut();
        if state.trail.len() >= MAX_TRAIL {
            state.trail.pop_front();
        }
        state.trail.push_back((event.new_x, event.new_y));
    }

    fn handle_key_event(&mut self, code: KeyCode) {
        self.state.borrow_mut().last_key = Some(code);
        match code.as_char() {
            Some('n') => {
                self.leaving_to = Some(ScreenId::Counters);
                self.transitions
                    .request(CounterScreen::boxed(&self.state, &self.transitions));
            }
            Some('c') => self.state.borrow_mut().trail.clear(),
            _ => {}
        }
    }

    fn handle_pending_screen_transition(&mut self) {
        let mut state = self.state.borrow_mut();
        state.transitions += 1;
        if let Some(next) = self.leaving_to.take() {
            state.screen = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uiloop::{Dispatcher, UiEvent};

    fn setup() -> (SharedState, Dispatcher) {
        let state = SharedState::default();
        let mut dispatcher = Dispatcher::default();
        let transitions = dispatcher.transitions();
        dispatcher.register(CounterScreen::boxed(&state, &transitions));
        (state, dispatcher)
    }

    #[test]
    fn test_counter_screen_counts() {
        let (state, mut dispatcher) = setup();

        dispatcher.dispatch(UiEvent::Click(ClickEvent::pressed(1, 1))).unwrap();
        dispatcher.dispatch(UiEvent::Drag(DragEvent::new(1, 1, 4, 0))).unwrap();
        dispatcher.tick().unwrap();

        let state = state.borrow();
        assert_eq!(state.clicks, 1);
        assert_eq!(state.drags, 1);
        assert_eq!(state.drag_total, (3, -1));
        assert_eq!(state.ticks, 1);
    }

    #[test]
    fn test_screens_alternate_on_n() {
        let (state, mut dispatcher) = setup();

        dispatcher.dispatch(UiEvent::key(b'n')).unwrap();
        assert_eq!(state.borrow().screen, ScreenId::Counters);
        dispatcher.tick().unwrap();
        assert_eq!(state.borrow().screen, ScreenId::Sketch);

        // Sketch leaves ticks at the default.
        dispatcher.tick().unwrap();
        dispatcher.dispatch(UiEvent::Drag(DragEvent::new(0, 0, 2, 3))).unwrap();
        assert_eq!(state.borrow().ticks, 1);
        assert_eq!(state.borrow().trail, vec![(2, 3)]);

        dispatcher.dispatch(UiEvent::key(b'n')).unwrap();
        dispatcher.tick().unwrap();
        assert_eq!(state.borrow().screen, ScreenId::Counters);
        assert_eq!(state.borrow().transitions, 2);
    }

    #[test]
    fn test_trail_keeps_newest_points() {
        let state = SharedState::default();
        let mut sketch = SketchScreen::boxed(&state, &TransitionHandle::default());

        for x in 0..(MAX_TRAIL as i16 + 3) {
            sketch.handle_drag_event(&DragEvent::new(0, 0, x, 1));
        }

        let state = state.borrow();
        assert_eq!(state.trail.len(), MAX_TRAIL);
        assert_eq!(state.trail.front(), Some(&(3, 1)));
        assert_eq!(state.trail.back(), Some(&(MAX_TRAIL as i16 + 2, 1)));
    }
}
