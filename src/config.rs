//! Runtime configuration.
//!
//! Nothing is read from or written to disk: the configuration is built from
//! the parsed command line and lives for one run. It hands each component
//! the settings it needs.

use crate::actions::DeleteConfig;
use crate::cli::Cli;
use crate::duplicates::FinderConfig;
use crate::scanner::WalkerConfig;

/// Settings for one interactive run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Move deleted files to the system trash instead of removing them.
    pub use_trash: bool,
    /// Follow symbolic links while scanning.
    pub follow_symlinks: bool,
}

impl Config {
    /// Build the configuration from command-line arguments.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            use_trash: cli.trash,
            follow_symlinks: cli.follow_symlinks,
        }
    }

    /// Walker settings.
    #[must_use]
    pub fn walker_config(&self) -> WalkerConfig {
        WalkerConfig::new(self.follow_symlinks)
    }

    /// Duplicate finder settings.
    #[must_use]
    pub fn finder_config(&self) -> FinderConfig {
        FinderConfig::default().with_walker_config(self.walker_config())
    }

    /// Deletion settings.
    #[must_use]
    pub fn delete_config(&self) -> DeleteConfig {
        if self.use_trash {
            DeleteConfig::trash()
        } else {
            DeleteConfig::permanent()
        }
    }
}
