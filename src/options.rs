//! CLI options and the recall/override merge rule
//!
//! A single `Options` struct is both the clap surface and the on-disk record
//! for saved command sets, so save/recall round-trips through serde without a
//! separate projection type.

use clap::Parser;
use serde::{Deserialize, Serialize};

/// Default notification body when `-m` is not given
pub const DEFAULT_MESSAGE: &str = "Pling task complete.";

/// Default notification title when `-t` is not given
pub const DEFAULT_TITLE: &str = "Pling";

/// The full set of recognized options for one invocation
///
/// Saved command sets deserialize with `#[serde(default)]`, so records written
/// by older versions with missing keys fall back to the documented defaults.
#[derive(Parser, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[command(
    name = "pling",
    version,
    about = "Do something, then send a notification."
)]
#[serde(default)]
pub struct Options {
    /// Things to do. Separate multiple tasks with commas.
    #[arg(value_name = "TASKS")]
    pub arguments: Vec<String>,

    /// Message to send.
    #[arg(short, long, default_value = DEFAULT_MESSAGE)]
    pub message: String,

    /// Title of the message.
    #[arg(short, long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Store this set of commands with this name.
    #[arg(long, value_name = "NAME")]
    pub save: Option<String>,

    /// Recall a set of commands with this name.
    #[arg(long, value_name = "NAME")]
    pub recall: Option<String>,

    /// List all saved command sets.
    #[arg(long)]
    pub list: bool,

    /// Stop when one task returns something other than 0.
    #[arg(short = 'b', long = "break")]
    pub brk: bool,

    /// Send a notification for each task.
    #[arg(short, long)]
    pub each: bool,

    /// Send return codes with notifications.
    #[arg(short = 'r', long = "return")]
    pub code: bool,

    /// Run the tasks in a shell, joined into one compound command. Dangerous.
    #[arg(short, long)]
    pub shell: bool,

    /// Do not fail gracefully. Abort the run if a task cannot start.
    #[arg(short = 'f', long)]
    pub strict: bool,

    /// Show full detail for push send failures, including certificate errors.
    #[arg(short, long)]
    pub warn: bool,

    /// Send no notifications.
    #[arg(short = 'q', long = "quiet")]
    pub silent: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            arguments: Vec::new(),
            message: DEFAULT_MESSAGE.to_string(),
            title: DEFAULT_TITLE.to_string(),
            save: None,
            recall: None,
            list: false,
            brk: false,
            each: false,
            code: false,
            shell: false,
            strict: false,
            warn: false,
            silent: false,
        }
    }
}

/// Merge a recalled command set with the options of the current invocation.
///
/// The saved record is the base. A current value wins only when the user
/// explicitly supplied it: `message` and `title` when they differ from their
/// defaults, the task list when non-empty, names when present, flags when set.
///
/// Flags that default to `false` cannot be distinguished from "explicitly set
/// false", so a flag saved as `true` stays on until the set is re-saved. This
/// asymmetry is deliberate and matches the historical behavior.
pub fn merge(saved: Options, current: &Options) -> Options {
    let mut effective = saved;

    if current.message != DEFAULT_MESSAGE {
        effective.message = current.message.clone();
    }
    if current.title != DEFAULT_TITLE {
        effective.title = current.title.clone();
    }
    if !current.arguments.is_empty() {
        effective.arguments = current.arguments.clone();
    }
    if current.save.is_some() {
        effective.save = current.save.clone();
    }
    if current.recall.is_some() {
        effective.recall = current.recall.clone();
    }

    effective.list |= current.list;
    effective.brk |= current.brk;
    effective.each |= current.each;
    effective.code |= current.code;
    effective.shell |= current.shell;
    effective.strict |= current.strict;
    effective.warn |= current.warn;
    effective.silent |= current.silent;

    effective
}
