//! Command execution
//!
//! This module handles launching a single task process and waiting on it.

use crate::error::{ExecutionError, ExecutionResult};
use std::process::{Command as StdCommand, Stdio};

/// Separator used to join tasks into one compound shell command
#[cfg(windows)]
pub const SHELL_JOIN: &str = "&";
#[cfg(not(windows))]
pub const SHELL_JOIN: &str = ";";

#[cfg(windows)]
fn shell_interpreter() -> (&'static str, &'static str) {
    ("cmd", "/C")
}

#[cfg(not(windows))]
fn shell_interpreter() -> (&'static str, &'static str) {
    ("sh", "-c")
}

/// Run one task to completion, inheriting stdio.
///
/// In shell mode the whole string goes through the platform shell; otherwise
/// it is whitespace-split into program and arguments and run directly.
/// Returns the exit code; a signal-terminated process reports -1.
pub fn run_task(index: usize, command: &str, shell: bool) -> ExecutionResult<i32> {
    let mut cmd = if shell {
        let (program, flag) = shell_interpreter();
        let mut cmd = StdCommand::new(program);
        cmd.arg(flag).arg(command);
        cmd
    } else {
        let mut parts = command.split_whitespace();
        let mut cmd = StdCommand::new(parts.next().unwrap_or_default());
        cmd.args(parts);
        cmd
    };

    cmd.stdin(Stdio::inherit());
    cmd.stdout(Stdio::inherit());
    cmd.stderr(Stdio::inherit());

    let status = cmd.status().map_err(|source| ExecutionError::SpawnFailed {
        index,
        command: command.to_string(),
        source,
    })?;

    Ok(status.code().unwrap_or(-1))
}
