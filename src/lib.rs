//! Pling - run shell tasks, then send a push notification
//!
//! Pling executes a comma-separated sequence of shell tasks and pushes a
//! title/body note about the outcome, either once at the end or once per
//! task. Named command sets can be saved and recalled with ad-hoc overrides.

// Public modules
pub mod cli;
pub mod error;
pub mod notify;
pub mod options;
pub mod runner;
pub mod store;

// Re-export commonly used types
pub use error::{PlingError, Result};

/// Current version of Pling
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
