//! File deletion: permanent removal or move to the system trash.
//!
//! # Overview
//!
//! This module provides:
//! - Permanent deletion (default)
//! - Move to system trash (opt-in, recoverable)
//! - Batch operations where every path is attempted independently
//!
//! A failure on one path never stops the rest of a batch; each outcome is
//! reported through [`DeleteProgressCallback`] and collected in
//! [`BatchDeleteResult`].
//!
//! # Example
//!
//! ```no_run
//! use dupesweep::actions::delete::{delete_batch, DeleteConfig, NoProgress};
//! use std::path::PathBuf;
//!
//! let paths = vec![PathBuf::from("/dup1.txt"), PathBuf::from("/dup2.txt")];
//! let result = delete_batch(&paths, &DeleteConfig::default(), &mut NoProgress);
//! println!("{}", result.summary());
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error type for deletion operations.
#[derive(Debug, Error)]
pub enum DeleteError {
    /// File was not found (may have been deleted or moved).
    #[error("Failed to delete file {0}: no such file or directory")]
    NotFound(PathBuf),

    /// Permission denied when attempting to delete.
    #[error("Failed to delete file {0}: permission denied")]
    PermissionDenied(PathBuf),

    /// Trash operation failed.
    #[error("Failed to delete file {path}: trash operation failed: {message}")]
    TrashFailed { path: PathBuf, message: String },

    /// Any other I/O error (is a directory, busy, read-only filesystem, ...).
    #[error("Failed to delete file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DeleteError {
    /// Classify an I/O error raised while deleting `path`.
    #[must_use]
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    /// Get the path associated with this error.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound(p)
            | Self::PermissionDenied(p)
            | Self::TrashFailed { path: p, .. }
            | Self::Io { path: p, .. } => p,
        }
    }
}

/// Result of a successful deletion operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResult {
    /// Path that was deleted.
    pub path: PathBuf,
    /// Size of the deleted file in bytes.
    pub size: u64,
    /// Whether deletion was permanent (true) or to trash (false).
    pub permanent: bool,
}

impl DeleteResult {
    /// Create a new delete result.
    #[must_use]
    pub fn new(path: PathBuf, size: u64, permanent: bool) -> Self {
        Self {
            path,
            size,
            permanent,
        }
    }
}

/// Results of a batch deletion operation.
#[derive(Debug, Default)]
pub struct BatchDeleteResult {
    /// Successfully deleted files, in attempt order.
    pub successes: Vec<DeleteResult>,
    /// Failed deletions, in attempt order.
    pub failures: Vec<DeleteError>,
    /// Total bytes freed.
    pub bytes_freed: u64,
}

impl BatchDeleteResult {
    /// Number of successful deletions.
    #[must_use]
    pub fn success_count(&self) -> usize {
        self.successes.len()
    }

    /// Number of failed deletions.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Total number of attempted deletions.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.successes.len() + self.failures.len()
    }

    /// Check if all deletions succeeded.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    /// Fold another batch into this one.
    pub fn merge(&mut self, other: BatchDeleteResult) {
        self.bytes_freed += other.bytes_freed;
        self.successes.extend(other.successes);
        self.failures.extend(other.failures);
    }

    /// Human-readable summary of the operation.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.all_succeeded() {
            format!(
                "Deleted {} file(s), freed {} bytes",
                self.success_count(),
                self.bytes_freed
            )
        } else {
            format!(
                "Deleted {} file(s), {} failed, freed {} bytes",
                self.success_count(),
                self.failure_count(),
                self.bytes_freed
            )
        }
    }
}

/// Configuration for deletion operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfig {
    /// Remove files permanently instead of moving them to the trash.
    pub permanent: bool,
}

impl Default for DeleteConfig {
    fn default() -> Self {
        Self::permanent()
    }
}

impl DeleteConfig {
    /// Create config for trash deletion.
    #[must_use]
    pub fn trash() -> Self {
        Self { permanent: false }
    }

    /// Create config for permanent deletion.
    #[must_use]
    pub fn permanent() -> Self {
        Self { permanent: true }
    }
}

/// Callback trait for deletion progress reporting.
pub trait DeleteProgressCallback {
    /// Called before each file deletion.
    fn on_before_delete(&mut self, _path: &Path, _index: usize, _total: usize) {}

    /// Called after successful deletion.
    fn on_delete_success(&mut self, result: &DeleteResult);

    /// Called after failed deletion.
    fn on_delete_failure(&mut self, error: &DeleteError);
}

/// Progress callback that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl DeleteProgressCallback for NoProgress {
    fn on_delete_success(&mut self, _result: &DeleteResult) {}

    fn on_delete_failure(&mut self, _error: &DeleteError) {}
}

/// Size of the file at `path`, or the classified error if it cannot be
/// inspected.
fn file_size(path: &Path) -> Result<u64, DeleteError> {
    fs::symlink_metadata(path)
        .map(|metadata| metadata.len())
        .map_err(|e| DeleteError::from_io(path, e))
}

/// Delete a single file to the system trash.
///
/// # Errors
///
/// - `NotFound` if the file doesn't exist
/// - `PermissionDenied` if the file cannot be inspected
/// - `TrashFailed` if the trash operation fails
pub fn delete_to_trash(path: &Path) -> Result<DeleteResult, DeleteError> {
    let size = file_size(path)?;

    trash::delete(path).map_err(|e| {
        log::debug!("Trash operation failed for {}: {}", path.display(), e);
        DeleteError::TrashFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;

    log::debug!("Moved to trash: {} ({} bytes)", path.display(), size);

    Ok(DeleteResult::new(path.to_path_buf(), size, false))
}

/// Permanently delete a single file.
///
/// **WARNING**: This operation cannot be undone.
///
/// # Errors
///
/// - `NotFound` if the file doesn't exist
/// - `PermissionDenied` if deletion is not allowed
/// - `Io` for any other failure, such as the path being a directory
pub fn permanent_delete(path: &Path) -> Result<DeleteResult, DeleteError> {
    let size = file_size(path)?;

    fs::remove_file(path).map_err(|e| {
        log::debug!("Permanent delete failed for {}: {}", path.display(), e);
        DeleteError::from_io(path, e)
    })?;

    log::debug!("Permanently deleted: {} ({} bytes)", path.display(), size);

    Ok(DeleteResult::new(path.to_path_buf(), size, true))
}

/// Delete a single file using the configured method.
///
/// # Errors
///
/// See [`permanent_delete`] and [`delete_to_trash`].
pub fn delete_file(path: &Path, config: &DeleteConfig) -> Result<DeleteResult, DeleteError> {
    if config.permanent {
        permanent_delete(path)
    } else {
        delete_to_trash(path)
    }
}

/// Delete multiple files in batch.
///
/// Every path is attempted in order, whatever happened to the ones before it.
pub fn delete_batch<C: DeleteProgressCallback + ?Sized>(
    paths: &[PathBuf],
    config: &DeleteConfig,
    callback: &mut C,
) -> BatchDeleteResult {
    let mut result = BatchDeleteResult::default();
    let total = paths.len();

    for (index, path) in paths.iter().enumerate() {
        callback.on_before_delete(path, index, total);

        match delete_file(path, config) {
            Ok(deleted) => {
                result.bytes_freed += deleted.size;
                callback.on_delete_success(&deleted);
                result.successes.push(deleted);
            }
            Err(e) => {
                log::debug!("Deletion failed: {}", e);
                callback.on_delete_failure(&e);
                result.failures.push(e);
            }
        }
    }

    if total > 0 {
        log::info!("{}", result.summary());
    }

    result
}
