//! Interactive scan-and-delete session.
//!
//! A [`Session`] walks the user through a fixed sequence of steps with no
//! way back:
//!
//! 1. Ask for a comma-separated list of directories
//! 2. Ask whether deletion mode should be enabled
//! 3. Scan all directories for duplicates
//! 4. Report the groups, or, in deletion mode, ask per group which files to
//!    delete and delete them
//!
//! All terminal traffic goes through a [`Console`], so the whole session can
//! be driven from a script in tests.
//!
//! # Example
//!
//! ```
//! use dupesweep::config::Config;
//! use dupesweep::interactive::{Console, Session};
//!
//! let console = Console::new(&b"\nno\n"[..], Vec::new(), Vec::new());
//! let mut session = Session::new(console, &Config::default());
//! let outcome = session.run().unwrap();
//! assert!(!outcome.deletion_enabled);
//! ```

pub mod console;
pub mod input;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

pub use console::Console;
pub use input::{parse_deletion_answer, parse_directories, parse_selection};

use crate::actions::{
    delete_batch, BatchDeleteResult, DeleteConfig, DeleteError, DeleteProgressCallback,
    DeleteResult,
};
use crate::config::Config;
use crate::duplicates::{DuplicateFinder, DuplicateGroup, ScanSummary};

/// Prompt for the list of directories.
pub const DIRECTORIES_PROMPT: &str = "Enter directories to scan, separated by commas: ";
/// Prompt for enabling deletion mode.
pub const DELETION_PROMPT: &str = "Do you want to enable file deletion after the scan? (yes/no): ";
/// Prompt for the files to delete from one group.
pub const SELECTION_PROMPT: &str =
    "Enter the numbers of the files to delete, separated by commas (or leave blank to keep all): ";
/// Printed when the scan finds nothing.
pub const NO_DUPLICATES: &str = "No duplicate files found.";

/// What happened during one session.
#[derive(Debug)]
pub struct SessionOutcome {
    /// Directories as typed, after trimming
    pub directories: Vec<String>,
    /// Whether the user enabled deletion mode
    pub deletion_enabled: bool,
    /// Duplicate groups found, in discovery order
    pub groups: Vec<DuplicateGroup>,
    /// Scan statistics and per-item errors
    pub summary: ScanSummary,
    /// Every deletion attempted, across all groups
    pub deletions: BatchDeleteResult,
}

/// Interactive duplicate review session.
#[derive(Debug)]
pub struct Session<R, W, E> {
    console: Console<R, W, E>,
    finder: DuplicateFinder,
    delete_config: DeleteConfig,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    /// Create a session over `console` using the given configuration.
    pub fn new(console: Console<R, W, E>, config: &Config) -> Self {
        Self {
            console,
            finder: DuplicateFinder::new(config.finder_config()),
            delete_config: config.delete_config(),
        }
    }

    /// Run every step of the session once.
    ///
    /// Unreadable directories or files and failed deletions are reported on
    /// the error stream and do not fail the session.
    ///
    /// # Errors
    ///
    /// Fails only if the console streams themselves fail.
    pub fn run(&mut self) -> Result<SessionOutcome> {
        let directories = self.ask_directories()?;
        let deletion_enabled = self.ask_deletion_mode()?;

        let paths: Vec<PathBuf> = directories.iter().map(PathBuf::from).collect();
        let (groups, summary) = self.finder.find_duplicates_in_paths(&paths);
        self.report_scan_errors(&summary)?;

        let mut deletions = BatchDeleteResult::default();
        if groups.is_empty() {
            self.console.say(NO_DUPLICATES)?;
        } else if !deletion_enabled {
            self.list_groups(&groups)?;
        } else {
            for group in &groups {
                deletions.merge(self.review_group(group)?);
            }
        }

        self.console.flush().context("Failed to flush output")?;

        Ok(SessionOutcome {
            directories,
            deletion_enabled,
            groups,
            summary,
            deletions,
        })
    }

    /// Take the console back, e.g. to inspect captured output.
    pub fn into_console(self) -> Console<R, W, E> {
        self.console
    }

    fn ask_directories(&mut self) -> Result<Vec<String>> {
        let answer = self.console.prompt(DIRECTORIES_PROMPT)?;
        let directories = parse_directories(&answer);
        self.console
            .say(format!("Scanning directories: {directories:?}"))?;
        Ok(directories)
    }

    fn ask_deletion_mode(&mut self) -> Result<bool> {
        let answer = self.console.prompt(DELETION_PROMPT)?;
        let enabled = parse_deletion_answer(&answer);
        log::debug!("Deletion mode {}", if enabled { "enabled" } else { "disabled" });
        Ok(enabled)
    }

    fn report_scan_errors(&mut self, summary: &ScanSummary) -> Result<()> {
        for error in &summary.scan_errors {
            self.console.warn(error)?;
        }
        Ok(())
    }

    fn list_groups(&mut self, groups: &[DuplicateGroup]) -> Result<()> {
        self.console.say("")?;
        self.console.say("Duplicate files found:")?;
        for group in groups {
            self.console.say("")?;
            self.console.say("Duplicate group:")?;
            for file in &group.files {
                self.console.say(format!(" - {}", file.path.display()))?;
            }
        }
        Ok(())
    }

    fn review_group(&mut self, group: &DuplicateGroup) -> Result<BatchDeleteResult> {
        self.console.say("")?;
        self.console.say("Duplicate group:")?;
        for (number, file) in group.files.iter().enumerate() {
            self.console
                .say(format!("{}: {}", number + 1, file.path.display()))?;
        }

        let answer = self.console.prompt(SELECTION_PROMPT)?;
        let selected: Vec<PathBuf> = parse_selection(&answer, group.len())
            .into_iter()
            .map(|position| group.files[position].path.clone())
            .collect();

        if selected.is_empty() {
            log::debug!("Keeping all {} files of group {}", group.len(), group.hash_hex());
        }

        let mut reporter = DeletionReporter {
            console: &mut self.console,
            write_error: None,
        };
        let result = delete_batch(&selected, &self.delete_config, &mut reporter);

        match reporter.write_error {
            Some(e) => Err(e),
            None => Ok(result),
        }
    }
}

/// Prints each deletion outcome as it happens.
struct DeletionReporter<'a, R, W, E> {
    console: &'a mut Console<R, W, E>,
    /// First failure to write a report line
    write_error: Option<anyhow::Error>,
}

impl<R: BufRead, W: Write, E: Write> DeletionReporter<'_, R, W, E> {
    fn keep_first_error(&mut self, written: Result<()>) {
        if let Err(e) = written {
            self.write_error.get_or_insert(e);
        }
    }
}

impl<R: BufRead, W: Write, E: Write> DeleteProgressCallback for DeletionReporter<'_, R, W, E> {
    fn on_delete_success(&mut self, result: &DeleteResult) {
        let line = if result.permanent {
            format!("Deleted file: {}", result.path.display())
        } else {
            format!("Moved to trash: {}", result.path.display())
        };
        let written = self.console.say(line);
        self.keep_first_error(written);
    }

    fn on_delete_failure(&mut self, error: &DeleteError) {
        let written = self.console.warn(error);
        self.keep_first_error(written);
    }
}
