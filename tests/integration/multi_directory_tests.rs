use dupesweep::duplicates::DuplicateFinder;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_duplicates_across_directories() {
    let a = tempdir().unwrap();
    let b = tempdir().unwrap();

    let x = a.path().join("x.txt");
    let y = b.path().join("y.txt");
    fs::write(&x, b"hello").unwrap();
    fs::write(&y, b"hello").unwrap();
    fs::write(b.path().join("z.txt"), b"world").unwrap();

    let paths = vec![a.path().to_path_buf(), b.path().to_path_buf()];
    let (groups, summary) = DuplicateFinder::with_defaults().find_duplicates_in_paths(&paths);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].paths(), vec![x, y]);
    assert_eq!(summary.directories, 2);
    assert_eq!(summary.total_files, 3);
}

#[test]
fn test_directory_order_decides_member_order() {
    let a = tempdir().unwrap();
    let b = tempdir().unwrap();

    let x = a.path().join("x.txt");
    let y = b.path().join("y.txt");
    fs::write(&x, b"shared").unwrap();
    fs::write(&y, b"shared").unwrap();

    let paths = vec![b.path().to_path_buf(), a.path().to_path_buf()];
    let (groups, _) = DuplicateFinder::with_defaults().find_duplicates_in_paths(&paths);

    assert_eq!(groups[0].paths(), vec![y, x]);
}

#[test]
fn test_missing_directory_does_not_stop_others() {
    let a = tempdir().unwrap();
    fs::write(a.path().join("1"), b"dup").unwrap();
    fs::write(a.path().join("2"), b"dup").unwrap();

    let missing = a.path().join("does-not-exist");
    let paths = vec![missing.clone(), a.path().to_path_buf()];
    let (groups, summary) = DuplicateFinder::with_defaults().find_duplicates_in_paths(&paths);

    assert_eq!(groups.len(), 1);
    assert_eq!(summary.scan_errors.len(), 1);
    assert_eq!(summary.scan_errors[0].path(), missing.as_path());
    assert_eq!(
        summary.scan_errors[0].to_string(),
        format!(
            "Failed to read directory {}: no such file or directory",
            missing.display()
        )
    );
}

#[test]
fn test_same_directory_twice_lists_files_twice() {
    let a = tempdir().unwrap();
    let only = a.path().join("only.txt");
    fs::write(&only, b"solo").unwrap();

    let paths = vec![a.path().to_path_buf(), a.path().to_path_buf()];
    let (groups, summary) = DuplicateFinder::with_defaults().find_duplicates_in_paths(&paths);

    assert_eq!(summary.total_files, 2);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].paths(), vec![only.clone(), only]);
}

#[test]
fn test_no_paths() {
    let paths: Vec<PathBuf> = Vec::new();
    let (groups, summary) = DuplicateFinder::with_defaults().find_duplicates_in_paths(&paths);

    assert!(groups.is_empty());
    assert_eq!(summary.directories, 0);
    assert!(!summary.has_errors());
}
