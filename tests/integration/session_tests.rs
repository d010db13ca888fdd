use dupesweep::config::Config;
use dupesweep::interactive::{
    Console, Session, SessionOutcome, DELETION_PROMPT, DIRECTORIES_PROMPT, NO_DUPLICATES,
    SELECTION_PROMPT,
};
use std::fs;
use std::io::Cursor;
use tempfile::tempdir;

struct Transcript {
    outcome: SessionOutcome,
    output: String,
    error: String,
}

fn run_script(script: String, config: &Config) -> Transcript {
    let console = Console::new(Cursor::new(script.into_bytes()), Vec::new(), Vec::new());
    let mut session = Session::new(console, config);
    let outcome = session.run().unwrap();
    let (_, output, error) = session.into_console().into_parts();

    Transcript {
        outcome,
        output: String::from_utf8(output).unwrap(),
        error: String::from_utf8(error).unwrap(),
    }
}

#[test]
fn test_scan_two_directories_without_deletion() {
    let a = tempdir().unwrap();
    let b = tempdir().unwrap();
    let x = a.path().join("x.txt");
    let y = b.path().join("y.txt");
    let z = b.path().join("z.txt");
    fs::write(&x, b"hello").unwrap();
    fs::write(&y, b"hello").unwrap();
    fs::write(&z, b"world").unwrap();

    let script = format!("{}, {}\nno\n", a.path().display(), b.path().display());
    let t = run_script(script, &Config::default());

    assert_eq!(
        t.outcome.directories,
        vec![
            a.path().display().to_string(),
            b.path().display().to_string()
        ]
    );
    assert!(!t.outcome.deletion_enabled);
    assert_eq!(t.outcome.groups.len(), 1);

    let expected = format!(
        "\nDuplicate files found:\n\nDuplicate group:\n - {}\n - {}\n",
        x.display(),
        y.display()
    );
    assert!(t.output.ends_with(&expected));
    assert!(!t.output.contains(&z.display().to_string()));
    assert!(t.error.is_empty());
}

#[test]
fn test_exact_transcript_when_nothing_found() {
    let a = tempdir().unwrap();
    fs::write(a.path().join("one"), b"1").unwrap();

    let script = format!("{}\nno\n", a.path().display());
    let t = run_script(script, &Config::default());

    let expected = format!(
        "{DIRECTORIES_PROMPT}Scanning directories: [\"{}\"]\n{DELETION_PROMPT}{NO_DUPLICATES}\n",
        a.path().display()
    );
    assert_eq!(t.output, expected);
}

#[test]
fn test_delete_all_but_first() {
    let a = tempdir().unwrap();
    let first = a.path().join("first.bin");
    let second = a.path().join("second.bin");
    let third = a.path().join("third.bin");
    for path in [&first, &second, &third] {
        fs::write(path, b"triplicate").unwrap();
    }

    // Members are numbered in name order: first, second, third.
    let script = format!("{}\nyes\n2,3\n", a.path().display());
    let t = run_script(script, &Config::default());

    assert_eq!(
        t.outcome.groups[0].paths(),
        vec![first.clone(), second.clone(), third.clone()]
    );
    assert!(t.output.contains(&format!("1: {}", first.display())));
    assert!(t.output.contains(&format!("2: {}", second.display())));
    assert!(t.output.contains(&format!("3: {}", third.display())));
    assert!(first.exists());
    assert!(!second.exists());
    assert!(!third.exists());
    assert_eq!(t.outcome.deletions.success_count(), 2);
    assert_eq!(t.outcome.deletions.bytes_freed, 20);
    assert!(t.output.contains(SELECTION_PROMPT));
    assert!(t
        .output
        .contains(&format!("Deleted file: {}", second.display())));
    assert!(t
        .output
        .contains(&format!("Deleted file: {}", third.display())));
}

#[test]
fn test_selection_reads_leading_digits() {
    let a = tempdir().unwrap();
    let first = a.path().join("a.txt");
    let second = a.path().join("b.txt");
    let third = a.path().join("c.txt");
    for path in [&first, &second, &third] {
        fs::write(path, b"same").unwrap();
    }

    let script = format!("{}\nyes\n2abc, 3.5\n", a.path().display());
    let t = run_script(script, &Config::default());

    assert!(first.exists());
    assert!(!second.exists());
    assert!(!third.exists());
    assert_eq!(t.outcome.deletions.success_count(), 2);
}

#[test]
fn test_invalid_selection_entries_are_ignored() {
    let a = tempdir().unwrap();
    fs::write(a.path().join("p"), b"same").unwrap();
    fs::write(a.path().join("q"), b"same").unwrap();

    let script = format!("{}\nyes\n0, 5, abc, 2\n", a.path().display());
    let t = run_script(script, &Config::default());

    let paths = t.outcome.groups[0].paths();
    assert!(paths[0].exists());
    assert!(!paths[1].exists());
    assert_eq!(t.outcome.deletions.total_count(), 1);
}

#[test]
fn test_each_group_gets_its_own_prompt() {
    let a = tempdir().unwrap();
    fs::write(a.path().join("a1"), b"alpha").unwrap();
    fs::write(a.path().join("a2"), b"alpha").unwrap();
    fs::write(a.path().join("b1"), b"beta").unwrap();
    fs::write(a.path().join("b2"), b"beta").unwrap();

    let script = format!("{}\nyes\n1\n\n", a.path().display());
    let t = run_script(script, &Config::default());

    assert_eq!(t.outcome.groups.len(), 2);
    assert_eq!(t.output.matches(SELECTION_PROMPT).count(), 2);
    assert_eq!(t.outcome.deletions.success_count(), 1);

    let first = t.outcome.groups[0].paths();
    let second = t.outcome.groups[1].paths();
    assert!(!first[0].exists());
    assert!(first[1].exists());
    assert!(second.iter().all(|p| p.exists()));
}

#[test]
fn test_truncated_input_keeps_everything() {
    let a = tempdir().unwrap();
    fs::write(a.path().join("m"), b"dup").unwrap();
    fs::write(a.path().join("n"), b"dup").unwrap();

    // Input ends before the selection prompt is answered.
    let script = format!("{}\nyes\n", a.path().display());
    let t = run_script(script, &Config::default());

    assert!(t.outcome.deletion_enabled);
    assert_eq!(t.outcome.deletions.total_count(), 0);
    assert!(t.outcome.groups[0].paths().iter().all(|p| p.exists()));
}

#[test]
fn test_nonexistent_directory_reported_on_error_stream() {
    let a = tempdir().unwrap();
    let missing = a.path().join("nope");

    let script = format!("{}\nno\n", missing.display());
    let t = run_script(script, &Config::default());

    assert_eq!(
        t.error,
        format!(
            "Failed to read directory {}: no such file or directory\n",
            missing.display()
        )
    );
    assert!(t.output.contains(NO_DUPLICATES));
}
