//! Duplicate finder: walks directories, hashes files, and groups them.
//!
//! # Overview
//!
//! [`DuplicateFinder`] runs the whole detection pipeline for an ordered list
//! of directories:
//!
//! 1. **Walk** each directory in the order given, depth-first
//! 2. **Hash** every discovered file with SHA-256, one at a time
//! 3. **Group** files by hash in a [`DigestIndex`]
//!
//! Directories that cannot be listed and files that cannot be read are
//! recorded in [`ScanSummary::scan_errors`] and otherwise skipped; they
//! never stop the scan.
//!
//! # Example
//!
//! ```no_run
//! use dupesweep::duplicates::DuplicateFinder;
//! use std::path::PathBuf;
//!
//! let finder = DuplicateFinder::with_defaults();
//! let (groups, summary) = finder.find_duplicates_in_paths(&[
//!     PathBuf::from("/photos"),
//!     PathBuf::from("/backup/photos"),
//! ]);
//!
//! println!("Found {} duplicate groups", groups.len());
//! println!("Reclaimable space: {}", summary.reclaimable_display());
//! ```

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use bytesize::ByteSize;

use super::groups::{DigestIndex, DuplicateGroup};
use crate::scanner::{Hasher, ScanError, Walker, WalkerConfig, DEFAULT_BUFFER_SIZE};

/// Configuration for the duplicate finder.
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// Walker configuration for directory traversal.
    pub walker_config: WalkerConfig,
    /// Read buffer size for hashing, in bytes.
    pub buffer_size: usize,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            walker_config: WalkerConfig::default(),
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl FinderConfig {
    /// Set the walker configuration.
    #[must_use]
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }

    /// Set the hashing read buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }
}

/// Summary statistics from a duplicate scan.
#[derive(Debug, Default)]
pub struct ScanSummary {
    /// Number of directories requested
    pub directories: usize,
    /// Total number of files discovered
    pub total_files: usize,
    /// Number of files successfully hashed
    pub hashed_files: usize,
    /// Total size of all hashed files in bytes
    pub total_size: u64,
    /// Number of confirmed duplicate groups
    pub duplicate_groups: usize,
    /// Total number of duplicate files (excluding one original per group)
    pub duplicate_files: usize,
    /// Total space that can be reclaimed by removing duplicates
    pub reclaimable_space: u64,
    /// Duration of the entire scan
    pub scan_duration: Duration,
    /// Errors encountered during the scan, in the order they occurred
    pub scan_errors: Vec<ScanError>,
}

impl ScanSummary {
    /// Whether any directory or file could not be read.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.scan_errors.is_empty()
    }

    /// Number of discovered files that could not be hashed.
    #[must_use]
    pub fn failed_files(&self) -> usize {
        self.total_files - self.hashed_files
    }

    /// Format reclaimable space as human-readable string.
    #[must_use]
    pub fn reclaimable_display(&self) -> String {
        ByteSize::b(self.reclaimable_space).to_string()
    }

    /// Format total size as human-readable string.
    #[must_use]
    pub fn total_size_display(&self) -> String {
        ByteSize::b(self.total_size).to_string()
    }
}

/// Duplicate finder that orchestrates walking, hashing, and grouping.
#[derive(Debug, Clone)]
pub struct DuplicateFinder {
    config: FinderConfig,
    hasher: Hasher,
}

impl DuplicateFinder {
    /// Create a new duplicate finder with the given configuration.
    #[must_use]
    pub fn new(config: FinderConfig) -> Self {
        let hasher = Hasher::new().with_buffer_size(config.buffer_size);
        Self { config, hasher }
    }

    /// Create a new duplicate finder with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(FinderConfig::default())
    }

    /// Configuration this finder was built with.
    #[must_use]
    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Find all duplicate files under a single directory.
    #[must_use]
    pub fn find_duplicates(&self, path: &Path) -> (Vec<DuplicateGroup>, ScanSummary) {
        self.find_duplicates_in_paths(&[path.to_path_buf()])
    }

    /// Find duplicate files across several directories.
    ///
    /// Directories are scanned in the order given and are not deduplicated:
    /// passing the same tree twice lists its files twice. Group membership
    /// follows first-seen order across the whole scan, and groups come out
    /// in the order their hash was first seen.
    #[must_use]
    pub fn find_duplicates_in_paths(
        &self,
        paths: &[PathBuf],
    ) -> (Vec<DuplicateGroup>, ScanSummary) {
        let start_time = Instant::now();
        let mut summary = ScanSummary {
            directories: paths.len(),
            ..ScanSummary::default()
        };
        let mut index = DigestIndex::new();

        if paths.is_empty() {
            log::warn!("No paths provided for scanning");
        }

        for path in paths {
            log::debug!("Scanning {}", path.display());
            let walker = Walker::new(path, self.config.walker_config.clone());

            for result in walker.walk() {
                let file = match result {
                    Ok(file) => file,
                    Err(e) => {
                        summary.scan_errors.push(e);
                        continue;
                    }
                };

                summary.total_files += 1;
                match self.hasher.full_hash(&file.path) {
                    Ok(hash) => {
                        summary.hashed_files += 1;
                        summary.total_size += file.size;
                        index.insert(hash, file);
                    }
                    Err(e) => {
                        log::debug!("Skipping unreadable file: {}", e);
                        summary.scan_errors.push(e.into());
                    }
                }
            }
        }

        let (groups, stats) = index.into_groups();

        summary.duplicate_groups = stats.duplicate_groups;
        summary.duplicate_files = groups.iter().map(DuplicateGroup::duplicate_count).sum();
        summary.reclaimable_space = groups.iter().map(DuplicateGroup::wasted_space).sum();
        summary.scan_duration = start_time.elapsed();

        log::info!(
            "Scanned {} file(s) ({}) in {} director(ies): {} duplicate group(s), {} reclaimable, {} error(s) in {:.2?}",
            summary.total_files,
            summary.total_size_display(),
            summary.directories,
            summary.duplicate_groups,
            summary.reclaimable_display(),
            summary.scan_errors.len(),
            summary.scan_duration
        );

        (groups, summary)
    }
}
