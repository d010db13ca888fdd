use dupesweep::actions::{
    delete_batch, delete_file, BatchDeleteResult, DeleteConfig, DeleteError,
    DeleteProgressCallback, DeleteResult, NoProgress,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[derive(Default)]
struct Recorder {
    before: Vec<(PathBuf, usize, usize)>,
    deleted: Vec<PathBuf>,
    failed: Vec<PathBuf>,
}

impl DeleteProgressCallback for Recorder {
    fn on_before_delete(&mut self, path: &Path, index: usize, total: usize) {
        self.before.push((path.to_path_buf(), index, total));
    }

    fn on_delete_success(&mut self, result: &DeleteResult) {
        self.deleted.push(result.path.clone());
    }

    fn on_delete_failure(&mut self, error: &DeleteError) {
        self.failed.push(error.path().to_path_buf());
    }
}

#[test]
fn test_batch_continues_after_failure() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("first");
    let missing = dir.path().join("missing");
    let last = dir.path().join("last");
    fs::write(&first, b"12345").unwrap();
    fs::write(&last, b"123").unwrap();

    let paths = vec![first.clone(), missing.clone(), last.clone()];
    let mut recorder = Recorder::default();
    let result = delete_batch(&paths, &DeleteConfig::permanent(), &mut recorder);

    assert_eq!(result.success_count(), 2);
    assert_eq!(result.failure_count(), 1);
    assert_eq!(result.bytes_freed, 8);
    assert!(!result.all_succeeded());
    assert!(!first.exists() && !last.exists());

    assert_eq!(recorder.deleted, vec![first.clone(), last.clone()]);
    assert_eq!(recorder.failed, vec![missing.clone()]);
    assert_eq!(
        recorder.before,
        vec![(first, 0, 3), (missing.clone(), 1, 3), (last, 2, 3)]
    );
    assert!(matches!(result.failures[0], DeleteError::NotFound(_)));
    assert_eq!(
        result.failures[0].to_string(),
        format!(
            "Failed to delete file {}: no such file or directory",
            missing.display()
        )
    );
}

#[test]
fn test_deleting_a_directory_fails() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).unwrap();

    let err = delete_file(&sub, &DeleteConfig::permanent()).unwrap_err();

    assert_eq!(err.path(), sub.as_path());
    assert!(err.to_string().starts_with("Failed to delete file"));
    assert!(sub.exists());
}

#[test]
fn test_empty_batch() {
    let result = delete_batch(&[], &DeleteConfig::default(), &mut NoProgress);

    assert_eq!(result.total_count(), 0);
    assert!(result.all_succeeded());
}

#[test]
fn test_merge_accumulates() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a");
    let b = dir.path().join("b");
    fs::write(&a, b"aa").unwrap();
    fs::write(&b, b"bbb").unwrap();

    let mut total = BatchDeleteResult::default();
    total.merge(delete_batch(
        &[a],
        &DeleteConfig::permanent(),
        &mut NoProgress,
    ));
    total.merge(delete_batch(
        &[b.clone(), b],
        &DeleteConfig::permanent(),
        &mut NoProgress,
    ));

    assert_eq!(total.success_count(), 2);
    assert_eq!(total.failure_count(), 1);
    assert_eq!(total.bytes_freed, 5);
}
