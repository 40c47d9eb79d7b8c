//! CLI interface and argument parsing
//!
//! This module wires option parsing, save/recall, and the task loop together.

pub mod app;

// Re-export main types
pub use app::*;
