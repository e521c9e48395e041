//! Recorded event sequences.
//!
//! A script is a TOML file with one `[[events]]` table per event, tagged by
//! `type`. Replaying it pushes the events through a dispatcher exactly as a
//! live producer would.
//!
//! ```toml
//! [[events]]
//! type = "click"
//! kind = "pressed"
//! x = 40
//! y = 12
//!
//! [[events]]
//! type = "drag"
//! old_x = 40
//! old_y = 12
//! new_x = 44
//! new_y = 12
//!
//! [[events]]
//! type = "tick"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dispatcher::Dispatcher;
use crate::error::{self, DispatchResult, ScriptError};
use crate::events::UiEvent;

/// An ordered list of events to replay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventScript {
    #[serde(default)]
    pub events: Vec<UiEvent>,
}

impl EventScript {
    pub fn new(events: Vec<UiEvent>) -> Self {
        Self { events }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Dispatch every event in order, returning how many were delivered.
    ///
    /// Ticks go through `Dispatcher::tick`, so transitions requested by the
    /// script's listeners are committed just as they would be live.
    pub fn play(&self, dispatcher: &mut Dispatcher) -> DispatchResult<usize> {
        for event in &self.events {
            match event {
                UiEvent::Tick => dispatcher.tick()?,
                other => dispatcher.dispatch(*other)?,
            }
        }
        Ok(self.events.len())
    }
}

/// Load the script at `path` and play it through `dispatcher`.
pub fn play_file(path: &Path, dispatcher: &mut Dispatcher) -> error::Result<usize> {
    let script = EventScript::load(path)?;
    Ok(script.play(dispatcher)?)
}
