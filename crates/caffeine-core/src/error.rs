//! Core error types for caffeine-core.
//!
//! Stepper inputs are clamped rather than rejected, so the error surface is
//! small: configuration I/O, out-of-range deletes, and unparseable actions.
//! Session errors stay local to the prompt loop, which reports them and
//! carries on, so only configuration and I/O failures reach `CoreError`.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for caffeine-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Home directory could not be resolved or created
    #[error("Failed to prepare data directory {path}: {message}")]
    DataDir { path: PathBuf, message: String },

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Errors raised by session actions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    /// Delete targeted a row that does not exist; `index` is 0-based, the
    /// message shows the 1-based row from the dose table
    #[error("Row {} out of range for dose list (rows: {len})", .index + 1)]
    OutOfBounds { index: usize, len: usize },

    /// Action text could not be understood
    #[error("Unknown action: '{0}'")]
    UnknownAction(String),

    /// Action argument was missing or malformed
    #[error("Invalid argument for '{action}': {message}")]
    InvalidArgument { action: String, message: String },

    /// Stepper delta not offered by the input surface
    #[error("'{action}' only accepts steps of {allowed}, got {delta}")]
    DisallowedStep {
        action: String,
        delta: String,
        allowed: String,
    },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
