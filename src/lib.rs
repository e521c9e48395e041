//! Listener contract for delivering user-interface and timing events.
//!
//! Upstream components (touch decoding, gesture recognition, key scanning,
//! tick generation) produce classified events; a [`Dispatcher`] hands each one
//! to the single active [`UiEventListener`]. Listeners override only the
//! handlers they need.

pub mod callbacks;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod events;
pub mod input;
pub mod listener;
pub mod log;
pub mod script;
pub mod tick;

pub use callbacks::CallbackListener;
pub use config::Config;
pub use dispatcher::{Dispatcher, TransitionHandle};
pub use error::{ConfigError, DispatchError, ScriptError, UiLoopError};
pub use events::{
    ClickEvent, ClickKind, DragEvent, EventKind, GestureEvent, GestureKind, KeyCode, UiEvent,
};
pub use input::TerminalInput;
pub use listener::UiEventListener;
pub use script::EventScript;
pub use tick::{TickMonitor, TickTiming};
