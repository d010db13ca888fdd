//! Diagnostic logging through `log` and `env_logger`.
//!
//! The log is for developers: prompts, results, and per-file errors are
//! written by the interactive session, never logged above debug level. The
//! level comes from `RUST_LOG` when it is set, otherwise from the flags:
//!
//! | flags        | level |
//! |--------------|-------|
//! | `-q`         | error |
//! | none         | warn  |
//! | `-v`         | info  |
//! | `-vv`        | debug |
//! | `-vvv`       | trace |
//!
//! Debug builds stamp each record with the time (and the module path from
//! `-vv` up); release builds print only level and message.
//!
//! ```rust,no_run
//! dupesweep::logging::init_logging(1, false);
//! log::info!("scan summary goes here");
//! ```

use std::io::Write;

use env_logger::fmt::Formatter;
use env_logger::{Builder, Env};
use log::{LevelFilter, Record};

/// Install the global logger. Call once, before anything logs.
///
/// # Panics
///
/// Panics if a global logger is already installed.
pub fn init_logging(verbose: u8, quiet: bool) {
    let level = level_for_flags(verbose, quiet);

    Builder::from_env(Env::default().default_filter_or(level.to_string()))
        .format(move |buf, record| write_record(buf, record, verbose))
        .init();

    log::debug!(
        "Logging ready (flags ask for {}, RUST_LOG={:?})",
        level,
        std::env::var("RUST_LOG").ok()
    );
}

fn level_for_flags(verbose: u8, quiet: bool) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Info,
        (false, 2) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    }
}

fn write_record(buf: &mut Formatter, record: &Record<'_>, verbose: u8) -> std::io::Result<()> {
    let style = buf.default_level_style(record.level());
    let level = format!("{style}{:<5}{style:#}", record.level());

    if cfg!(debug_assertions) {
        let stamp = buf.timestamp_seconds();
        if verbose >= 2 {
            let module = record.module_path().unwrap_or("?");
            return writeln!(buf, "{stamp} {level} [{module}] {}", record.args());
        }
        return writeln!(buf, "{stamp} {level} {}", record.args());
    }

    writeln!(buf, "{level} {}", record.args())
}
