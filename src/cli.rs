//! Command-line interface definitions for dupesweep.
//!
//! The program is interactive: directories, deletion mode, and the files to
//! delete are always asked for on the terminal. The flags defined here only
//! tune logging and how selected files are removed.
//!
//! # Example
//!
//! ```bash
//! # Interactive session with default settings
//! dupesweep
//!
//! # Move selected duplicates to the trash instead of removing them
//! dupesweep --trash
//!
//! # Verbose mode for debugging
//! dupesweep -vv
//! ```

use clap::Parser;

/// Interactive duplicate file finder.
///
/// Scans one or more directories, groups files with identical content
/// (SHA-256), and optionally lets you delete duplicates group by group.
#[derive(Debug, Parser)]
#[command(name = "dupesweep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity level (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Move selected files to the system trash instead of deleting them permanently
    #[arg(long)]
    pub trash: bool,

    /// Follow symbolic links while scanning
    ///
    /// Symlinked directories are descended into and symlinked files are hashed.
    #[arg(long)]
    pub follow_symlinks: bool,
}
