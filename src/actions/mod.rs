//! File actions module.
//!
//! # Deletion
//!
//! The delete module removes user-selected duplicates:
//! - Permanent deletion (default)
//! - Move to system trash (opt-in, recoverable)
//! - Batch operations that attempt every path independently
//!
//! ```no_run
//! use dupesweep::actions::delete::permanent_delete;
//! use std::path::Path;
//!
//! match permanent_delete(Path::new("/path/to/duplicate.txt")) {
//!     Ok(result) => println!("Deleted file: {}", result.path.display()),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

pub mod delete;

// Re-export commonly used types
pub use delete::{
    delete_batch, delete_file, delete_to_trash, permanent_delete, BatchDeleteResult,
    DeleteConfig, DeleteError, DeleteProgressCallback, DeleteResult, NoProgress,
};
