//! dupesweep - Interactive Duplicate File Finder
//!
//! Scans one or more directory trees, groups files with identical content
//! using SHA-256, and optionally deletes user-selected duplicates group by
//! group.

pub mod actions;
pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod interactive;
pub mod logging;
pub mod scanner;

use std::io;

use anyhow::Result;

use cli::Cli;
use config::Config;
use error::ExitCode;
use interactive::{Console, Session};

/// Run one interactive session on the process's standard streams.
///
/// # Errors
///
/// Fails only when stdin, stdout, or stderr stops working; every scan and
/// deletion problem is reported inside the session instead.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    let config = Config::from_cli(&cli);
    log::debug!("Running with {:?}", config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let console = Console::new(stdin.lock(), stdout.lock(), stderr.lock());

    let mut session = Session::new(console, &config);
    let outcome = session.run()?;

    log::info!(
        "Session finished: {} duplicate group(s), {}",
        outcome.groups.len(),
        outcome.deletions.summary()
    );

    Ok(ExitCode::Success)
}
