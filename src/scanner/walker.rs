//! Directory walker implementation using walkdir.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct for traversing a directory
//! tree and collecting every regular file beneath it.
//!
//! Traversal is sequential and depth-first. The entries of each directory
//! are visited in byte order of their names, and a subdirectory is
//! descended into as soon as it is reached, before its later siblings. The
//! output order therefore does not depend on the filesystem.
//!
//! # Errors
//!
//! A directory that cannot be listed yields one [`ScanError`] and contributes
//! no files; the rest of the tree is still walked. Entries that are neither
//! regular files nor directories (sockets, devices, symlinks when not
//! following links) are skipped without an error.
//!
//! # Example
//!
//! ```no_run
//! use dupesweep::scanner::{Walker, WalkerConfig};
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("/home/user/Downloads"), WalkerConfig::default());
//! let (files, errors) = walker.collect_files();
//! println!("{} files, {} unreadable directories", files.len(), errors.len());
//! ```

use std::io;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::{FileEntry, ScanError, WalkerConfig};

/// Directory walker for sequential file discovery.
#[derive(Debug)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
    /// Walker configuration
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given path.
    #[must_use]
    pub fn new(path: &Path, config: WalkerConfig) -> Self {
        Self {
            root: path.to_path_buf(),
            config,
        }
    }

    /// Root directory this walker starts from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the directory tree, yielding file entries.
    ///
    /// Returns an iterator over [`FileEntry`] results. Errors are yielded
    /// as [`ScanError`] values rather than stopping iteration.
    pub fn walk(&self) -> impl Iterator<Item = Result<FileEntry, ScanError>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry_result| match entry_result {
                Ok(entry) => self.process_entry(entry),
                Err(e) => self.handle_walk_error(e).map(Err),
            })
    }

    /// Walk the whole tree, splitting discovered files from errors.
    ///
    /// Both vectors keep discovery order.
    #[must_use]
    pub fn collect_files(&self) -> (Vec<FileEntry>, Vec<ScanError>) {
        let mut files = Vec::new();
        let mut errors = Vec::new();

        for result in self.walk() {
            match result {
                Ok(file) => files.push(file),
                Err(e) => errors.push(e),
            }
        }

        log::debug!(
            "Walked {}: {} file(s), {} error(s)",
            self.root.display(),
            files.len(),
            errors.len()
        );

        (files, errors)
    }

    fn process_entry(&self, entry: DirEntry) -> Option<Result<FileEntry, ScanError>> {
        let file_type = entry.file_type();

        // The root itself must be a listable directory
        if entry.depth() == 0 {
            if file_type.is_dir() {
                return None;
            }
            log::debug!("Root is not a directory: {}", entry.path().display());
            return Some(Err(ScanError::NotADirectory(entry.into_path())));
        }

        if file_type.is_dir() {
            log::trace!("Descending into {}", entry.path().display());
            return None;
        }

        if !file_type.is_file() {
            log::trace!("Skipping non-regular entry: {}", entry.path().display());
            return None;
        }

        let size = match entry.metadata() {
            Ok(metadata) => metadata.len(),
            Err(e) => {
                log::debug!("No metadata for {}: {}", entry.path().display(), e);
                0
            }
        };

        Some(Ok(FileEntry::new(entry.into_path(), size)))
    }

    /// Convert a walkdir error into a [`ScanError`].
    ///
    /// Returns `None` for dangling symlinks below the root, which are
    /// skipped like any other non-regular entry.
    fn handle_walk_error(&self, error: walkdir::Error) -> Option<ScanError> {
        let path = error
            .path()
            .map_or_else(|| self.root.clone(), Path::to_path_buf);

        if let Some(ancestor) = error.loop_ancestor() {
            log::debug!(
                "Symlink loop: {} -> {}",
                path.display(),
                ancestor.display()
            );
            return Some(ScanError::SymlinkLoop {
                ancestor: ancestor.to_path_buf(),
                path,
            });
        }

        if error.depth() > 0 && path.is_symlink() && !path.exists() {
            log::trace!("Skipping dangling symlink: {}", path.display());
            return None;
        }

        let scan_error = match error.into_io_error() {
            Some(source) => match source.kind() {
                io::ErrorKind::NotFound => ScanError::NotFound(path),
                io::ErrorKind::PermissionDenied => ScanError::PermissionDenied(path),
                _ => ScanError::Io { path, source },
            },
            None => ScanError::Io {
                path,
                source: io::Error::other("directory walk failed"),
            },
        };

        log::debug!("Walker error: {}", scan_error);
        Some(scan_error)
    }
}
