//! Main CLI application

use crate::error::Result;
use crate::notify::Notifier;
use crate::options::{merge, Options};
use crate::runner;
use crate::store;
use clap::Parser;

/// Run the CLI application with the process arguments
pub fn run() -> Result<()> {
    run_with(Options::parse())
}

/// Run one invocation from already-parsed options
pub fn run_with(current: Options) -> Result<()> {
    let home = store::home_dir()?;

    // Listing touches only the store; it needs no credential and sends
    // nothing.
    if current.list {
        for name in store::list(&home)? {
            println!("{}", name);
        }
        return Ok(());
    }

    // The credential is resolved once at startup, before any task runs.
    let notifier = Notifier::from_home(&home)?;

    // Recall wins over save when both are given.
    let effective = if let Some(name) = current.recall.clone() {
        let saved = store::recall(&home, &name)?;
        merge(saved, &current)
    } else if let Some(name) = current.save.clone() {
        store::save(&home, &name, &current)?;
        current
    } else {
        current
    };

    // The last task's return code is available in the summary but is not
    // surfaced as the process exit code.
    runner::run(&effective, &notifier)?;
    Ok(())
}
