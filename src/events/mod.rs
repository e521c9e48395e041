//! Event values delivered to listeners.
//!
//! All of these are produced upstream (touch decoding, gesture recognition,
//! key scanning, tick generation) and handed to listeners by reference or
//! by value. Listeners never own or mutate them.

mod click;
mod drag;
mod gesture;
mod key;
mod ui_event;

pub use click::{ClickEvent, ClickKind};
pub use drag::DragEvent;
pub use gesture::{GestureEvent, GestureKind};
pub use key::KeyCode;
pub use ui_event::{EventKind, UiEvent};
