//! Task execution engine
//!
//! This module handles the sequential execution of tasks, per-task outcome
//! tracking, and the notification policy.

pub mod command;
pub mod task;

// Re-export main types
pub use command::*;
pub use task::*;
