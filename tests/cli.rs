//! Exit status and output of the `lindiff` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn run(args: &[&str], old: &Path, new: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lindiff"))
        .args(args)
        .arg(old)
        .arg(new)
        .output()
        .expect("failed to execute lindiff")
}

#[test]
fn test_identical_files_exit_zero() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.txt", "alpha\nbeta\n");
    let b = write(&dir, "b.txt", "alpha\nbeta\n");
    let out = run(&["diff"], &a, &b);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout), " alpha\n beta\n");
}

#[test]
fn test_different_files_exit_one() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.txt", "alpha\nbeta\ngamma\n");
    let b = write(&dir, "b.txt", "alpha\ngamma\ndelta\n");
    let out = run(&["diff"], &a, &b);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        " alpha\n-beta\n gamma\n+delta\n"
    );
}

#[test]
fn test_empty_files_are_identical() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.txt", "");
    let b = write(&dir, "b.txt", "");
    let out = run(&["diff"], &a, &b);
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_missing_file_exit_two() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.txt", "alpha\n");
    let missing = dir.path().join("missing.txt");
    let out = run(&["diff"], &a, &missing);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Error reading"));
}

#[test]
fn test_stats_reports_distance() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.txt", "kitten");
    let b = write(&dir, "b.txt", "sitting");
    let out = run(&["stats", "--by", "chars"], &a, &b);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Distance:     5"), "{}", stdout);
    assert!(stdout.contains("Hunks:        3"), "{}", stdout);
}
