//! Duplicate detection module.
//!
//! This module provides functionality for:
//! - Content-hash grouping in discovery order ([`groups`])
//! - The walk → hash → group pipeline over several directories ([`finder`])

pub mod finder;
pub mod groups;

pub use finder::{DuplicateFinder, FinderConfig, ScanSummary};
pub use groups::{group_by_hash, DigestIndex, DuplicateGroup, GroupingStats};
