//! The sequential task loop
//!
//! Tasks run strictly in order, one at a time. Outcomes are tracked per task,
//! and notifications fire per the each/break/quiet policy of the effective
//! options.

use crate::error::ExecutionResult;
use crate::notify::{compose, log_send_failure, Push};
use crate::options::Options;
use crate::runner::command::{run_task, SHELL_JOIN};
use colored::Colorize;

/// How one task ended.
///
/// A process that launched and exited is `Ran`, whatever its code. A process
/// that could not be launched at all (e.g. command not found) is
/// `FailedToStart`; the two are never collapsed into one number because
/// strict mode only cares about the latter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    /// The process completed with this exit code
    Ran(i32),
    /// The process could not be launched
    FailedToStart,
}

impl TaskOutcome {
    /// The return code this outcome contributes to break decisions and
    /// notification text. A start failure reports 1, the "nothing has
    /// succeeded" sentinel.
    pub fn return_code(self) -> i32 {
        match self {
            TaskOutcome::Ran(code) => code,
            TaskOutcome::FailedToStart => 1,
        }
    }

    /// Whether this outcome counts as success
    pub fn is_success(self) -> bool {
        self.return_code() == 0
    }
}

/// The record of one attempted task
#[derive(Debug, Clone)]
pub struct TaskResult {
    /// The task's original text
    pub command: String,
    /// 1-based position in the sequence
    pub index: usize,
    /// How it ended
    pub outcome: TaskOutcome,
}

/// Aggregate outcome of one run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// One result per attempted task, in order
    pub results: Vec<TaskResult>,
    /// Whether break-on-failure stopped the loop early
    pub broke: bool,
    /// Return code of the last attempted task (1 when nothing ran)
    pub last_code: i32,
}

/// Split raw CLI task tokens into individual task strings.
///
/// Tokens are joined into one string, split on commas, trimmed, and empty
/// pieces discarded: `["a,", "b", ",,c"]` yields `["a", "b", "c"]`.
pub fn split_tasks(arguments: &[String]) -> Vec<String> {
    arguments
        .join(" ")
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Execute the effective options against a notification sink.
///
/// Returns `Err` only for a start failure under strict mode; everything else,
/// including nonzero exits and failed sends, is data in the summary.
pub fn run(opts: &Options, push: &dyn Push) -> ExecutionResult<RunSummary> {
    let pieces = split_tasks(&opts.arguments);

    // Shell mode collapses the whole sequence into one compound command with
    // a single combined result.
    let tasks = if opts.shell && !pieces.is_empty() {
        vec![pieces.join(SHELL_JOIN)]
    } else {
        pieces
    };

    let mut results = Vec::new();
    let mut broke = false;
    let mut last_code = 1;
    let mut task_number = 1;

    for command in &tasks {
        eprintln!("{} {}", "[RUN]".blue(), command);

        let outcome = match run_task(task_number, command, opts.shell) {
            Ok(code) => TaskOutcome::Ran(code),
            Err(err) => {
                eprintln!(
                    "{}",
                    format!("Task {} failed.\n\t{}", task_number, command).red()
                );
                if opts.strict {
                    return Err(err);
                }
                TaskOutcome::FailedToStart
            }
        };
        last_code = outcome.return_code();
        results.push(TaskResult {
            command: command.clone(),
            index: task_number,
            outcome,
        });

        if opts.each && !opts.silent {
            let (title, body) = compose(
                &opts.title,
                &opts.message,
                last_code,
                task_number,
                opts.code,
                true,
            );
            send(push, &title, &body, opts.warn);
        }

        if opts.brk && last_code != 0 {
            broke = true;
            break;
        }
        task_number += 1;
    }

    // On break, task_number still names the task that broke the run; after a
    // full pass it has moved past the end and only the break branch below
    // puts it in a title.
    if !opts.each && !opts.silent {
        let (title, body) = if opts.brk && broke {
            compose(&opts.title, &opts.message, last_code, task_number, true, true)
        } else if opts.code {
            compose(
                &opts.title,
                &opts.message,
                last_code,
                task_number,
                true,
                false,
            )
        } else {
            (opts.title.clone(), opts.message.clone())
        };
        send(push, &title, &body, opts.warn);
    }

    Ok(RunSummary {
        results,
        broke,
        last_code,
    })
}

/// Deliver one notification, swallowing send failures
fn send(push: &dyn Push, title: &str, body: &str, verbose: bool) {
    if let Err(err) = push.push(title, body) {
        log_send_failure(&err, verbose);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_trims_and_drops_empty() {
        let tasks = split_tasks(&strings(&["a,", " b ", ",,c"]));
        assert_eq!(tasks, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_single_task() {
        let tasks = split_tasks(&strings(&["make", "test"]));
        assert_eq!(tasks, vec!["make test"]);
    }

    #[test]
    fn test_split_preserves_order() {
        let tasks = split_tasks(&strings(&["third,first,second"]));
        assert_eq!(tasks, vec!["third", "first", "second"]);
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split_tasks(&[]).is_empty());
        assert!(split_tasks(&strings(&[",", " , "])).is_empty());
    }

    #[test]
    fn test_outcome_return_codes() {
        assert_eq!(TaskOutcome::Ran(0).return_code(), 0);
        assert_eq!(TaskOutcome::Ran(7).return_code(), 7);
        assert_eq!(TaskOutcome::FailedToStart.return_code(), 1);
        assert!(TaskOutcome::Ran(0).is_success());
        assert!(!TaskOutcome::FailedToStart.is_success());
    }
}
