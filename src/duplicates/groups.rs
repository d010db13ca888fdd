//! Duplicate grouping by content hash.
//!
//! # Overview
//!
//! Files are grouped by the SHA-256 hash of their full content. The
//! [`DigestIndex`] accumulates `(hash, file)` pairs as a scan discovers them
//! and remembers the order in which each hash was first seen. Once the scan
//! is over, [`DigestIndex::into_groups`] keeps only the hashes shared by two
//! or more files.
//!
//! Ordering guarantees:
//! - groups come out in hash first-seen order
//! - files within a group keep their discovery order
//!
//! # Example
//!
//! ```
//! use dupesweep::duplicates::group_by_hash;
//! use dupesweep::scanner::FileEntry;
//! use std::path::PathBuf;
//!
//! let files = vec![
//!     ([1u8; 32], FileEntry::new(PathBuf::from("/a.txt"), 3)),
//!     ([2u8; 32], FileEntry::new(PathBuf::from("/b.txt"), 3)),
//!     ([1u8; 32], FileEntry::new(PathBuf::from("/c.txt"), 3)),
//! ];
//!
//! let (groups, stats) = group_by_hash(files);
//!
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].paths(), vec![PathBuf::from("/a.txt"), PathBuf::from("/c.txt")]);
//! assert_eq!(stats.eliminated_unique, 1);
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::scanner::{hash_to_hex, FileEntry, Hash};

/// Confirmed duplicate group of files.
///
/// Always holds at least two files when produced by [`DigestIndex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    /// SHA-256 hash of the file content
    pub hash: Hash,
    /// File size in bytes (shared by all files in the group)
    pub size: u64,
    /// Files with this content, in discovery order
    pub files: Vec<FileEntry>,
}

impl DuplicateGroup {
    /// Create a new duplicate group.
    ///
    /// The group size is taken from the first file.
    #[must_use]
    pub fn new(hash: Hash, files: Vec<FileEntry>) -> Self {
        let size = files.first().map_or(0, |f| f.size);
        Self { hash, size, files }
    }

    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total size of all files in this group.
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }

    /// Total wasted space (all copies minus one).
    #[must_use]
    pub fn wasted_space(&self) -> u64 {
        self.size * self.duplicate_count() as u64
    }

    /// Number of duplicate copies (total - 1 original).
    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        self.files.len().saturating_sub(1)
    }

    /// Hash as hexadecimal string.
    #[must_use]
    pub fn hash_hex(&self) -> String {
        hash_to_hex(&self.hash)
    }

    /// Get just the paths of files in this group.
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.iter().map(|f| f.path.clone()).collect()
    }

    /// Check whether `path` is a member of this group.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.files.iter().any(|f| f.path == path)
    }
}

/// Statistics from hash grouping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupingStats {
    /// Total number of files inserted
    pub total_files: usize,
    /// Number of distinct hashes seen
    pub unique_hashes: usize,
    /// Number of files whose hash no other file shares
    pub eliminated_unique: usize,
    /// Number of groups with 2+ files
    pub duplicate_groups: usize,
    /// Number of files that belong to some group
    pub grouped_files: usize,
}

/// Insertion-ordered index from content hash to the files that share it.
///
/// Lives for the duration of one scan.
#[derive(Debug, Default)]
pub struct DigestIndex {
    /// Position of each hash in `entries`
    slots: HashMap<Hash, usize>,
    /// Hashes in first-seen order with their files
    entries: Vec<(Hash, Vec<FileEntry>)>,
    total_files: usize,
}

impl DigestIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `file` has content hash `hash`.
    pub fn insert(&mut self, hash: Hash, file: FileEntry) {
        self.total_files += 1;
        match self.slots.get(&hash) {
            Some(&slot) => self.entries[slot].1.push(file),
            None => {
                self.slots.insert(hash, self.entries.len());
                self.entries.push((hash, vec![file]));
            }
        }
    }

    /// Number of distinct hashes recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of files recorded.
    #[must_use]
    pub fn total_files(&self) -> usize {
        self.total_files
    }

    /// Consume the index, keeping hashes shared by at least two files.
    #[must_use]
    pub fn into_groups(self) -> (Vec<DuplicateGroup>, GroupingStats) {
        let mut stats = GroupingStats {
            total_files: self.total_files,
            unique_hashes: self.entries.len(),
            ..GroupingStats::default()
        };

        let groups: Vec<DuplicateGroup> = self
            .entries
            .into_iter()
            .filter_map(|(hash, files)| {
                if files.len() < 2 {
                    stats.eliminated_unique += files.len();
                    return None;
                }
                log::debug!("Hash group {}: {} files", hash_to_hex(&hash), files.len());
                stats.duplicate_groups += 1;
                stats.grouped_files += files.len();
                Some(DuplicateGroup::new(hash, files))
            })
            .collect();

        (groups, stats)
    }
}

/// Group already-hashed files in one pass.
///
/// Equivalent to inserting every pair into a fresh [`DigestIndex`] and
/// calling [`DigestIndex::into_groups`].
#[must_use]
pub fn group_by_hash(
    files: impl IntoIterator<Item = (Hash, FileEntry)>,
) -> (Vec<DuplicateGroup>, GroupingStats) {
    let mut index = DigestIndex::new();
    for (hash, file) in files {
        index.insert(hash, file);
    }
    index.into_groups()
}
