//! Error types for Pling

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Pling operations
pub type Result<T> = std::result::Result<T, PlingError>;

/// Main error type for Pling
#[derive(Error, Debug)]
pub enum PlingError {
    /// Configuration-related errors (credential, home directory)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Command-set store errors
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Task execution errors
    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Startup configuration errors, all fatal before any task runs
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No api key specified and {0} not found")]
    MissingApiKey(PathBuf),

    #[error("Could not determine the program's home directory")]
    NoHomeDir,
}

/// Saved command-set store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Could not locate saved command set \"{0}\"")]
    NotFound(String),

    #[error("Saved command set \"{name}\" is not valid JSON: {error}")]
    Corrupt { name: String, error: String },

    #[error("Failed to access saved command sets: {0}")]
    Io(#[from] io::Error),
}

/// Task execution errors
///
/// A task that runs and exits nonzero is data (a return code), not an error.
/// Only a process that could not be launched at all surfaces here, and it
/// propagates only under strict mode.
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Task {index} failed to start: {command}")]
    SpawnFailed {
        index: usize,
        command: String,
        #[source]
        source: io::Error,
    },
}

/// Notification send errors, logged but never fatal
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Push request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Specialized result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Specialized result type for execution operations
pub type ExecutionResult<T> = std::result::Result<T, ExecutionError>;

/// Specialized result type for notification operations
pub type NotifyResult<T> = std::result::Result<T, NotifyError>;
