//! Error types for uiloop
//!
//! Listener operations themselves never fail. These errors belong to the
//! machinery around them:
//! - `DispatchError` for event delivery
//! - `ConfigError` for the configuration file
//! - `ScriptError` for event scripts
//! - `UiLoopError` for operations spanning several of these

use thiserror::Error;

/// Top-level error type for uiloop
#[derive(Debug, Error)]
pub enum UiLoopError {
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("Script error: {0}")]
    Script(#[from] ScriptError),
}

/// Errors raised while delivering events to the active listener
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("No listener registered")]
    NoListener,

    #[error("Event queue full ({capacity} events)")]
    QueueFull { capacity: usize },
}

/// Errors related to loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors related to loading event scripts
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read event script: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse event script: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for UiLoopError
pub type Result<T> = std::result::Result<T, UiLoopError>;

/// Result type alias for DispatchError
pub type DispatchResult<T> = std::result::Result<T, DispatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_error_messages() {
        assert_eq!(DispatchError::NoListener.to_string(), "No listener registered");
        assert_eq!(
            DispatchError::QueueFull { capacity: 4 }.to_string(),
            "Event queue full (4 events)"
        );
    }

    #[test]
    fn test_wraps_into_top_level() {
        let err: UiLoopError = DispatchError::NoListener.into();
        assert!(matches!(err, UiLoopError::Dispatch(DispatchError::NoListener)));
        assert_eq!(err.to_string(), "Dispatch error: No listener registered");
    }
}
