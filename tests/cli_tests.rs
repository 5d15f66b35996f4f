//! Runs the `roster` binary against temporary input files
//!
//! `HOME` and `XDG_CONFIG_HOME` point into a temp dir so the first-run config
//! file is never written to the real user profile.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_roster(work_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_roster"))
        .args(args)
        .current_dir(work_dir)
        .env("HOME", work_dir)
        .env("XDG_CONFIG_HOME", work_dir.join("config"))
        .output()
        .expect("Failed to run roster binary")
}

#[test]
fn test_default_run_reads_students_txt() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("students.txt"),
        "Undergrad Alice A111 Junior 12 3.50\nGrad Bob B222 PhD 9 3.90 Researching quantum foam\n",
    )
    .unwrap();

    let output = run_roster(dir.path(), &[]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[1], "Original Student List:");
    assert!(lines[4].starts_with("Bob "));
    assert!(lines[5].starts_with("Alice "));
    assert_eq!(lines[7], "Students Sorted by GPA:");
    assert!(lines[10].starts_with("Alice "));
    assert!(lines[11].starts_with("Bob "));
    assert_eq!(lines.len(), 12);
}

#[test]
fn test_missing_input_exits_nonzero() {
    let dir = TempDir::new().unwrap();

    let output = run_roster(dir.path(), &["report", "nowhere.txt"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: cannot open nowhere.txt"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_report_to_output_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("mine.txt"),
        "Undergrad Jane 123456789 Senior 15 3.75\n",
    )
    .unwrap();

    let output = run_roster(
        dir.path(),
        &["report", "mine.txt", "--format", "md", "--output", "out.md"],
    );
    assert!(output.status.success());

    let written = fs::read_to_string(dir.path().join("out.md")).unwrap();
    assert!(written.contains("| Jane | 123456789 | Senior | 15 | $5700.00 | 3.75 |"));
}

#[test]
fn test_unknown_format_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("students.txt"), "").unwrap();

    let output = run_roster(dir.path(), &["report", "--format", "pdf"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("Unknown report format: pdf"));
}

#[test]
fn test_bare_input_file_argument() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("mine.txt"),
        "Undergrad Jane 123456789 Senior 15 3.75\n",
    )
    .unwrap();

    let output = run_roster(dir.path(), &["mine.txt"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Original Student List:"));
    assert!(stdout.contains("Jane "));
}

#[test]
fn test_bare_missing_input_file() {
    let dir = TempDir::new().unwrap();

    let output = run_roster(dir.path(), &["absent.txt"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("Error: cannot open absent.txt"));
}

#[test]
fn test_save_writes_beside_input() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("mine.txt"),
        "Undergrad Jane 123456789 Senior 15 3.75\n",
    )
    .unwrap();

    let output = run_roster(dir.path(), &["report", "mine.txt", "-f", "md", "--save"]);
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)
        .unwrap()
        .contains("✓ Report generated: mine_report.md"));

    let written = fs::read_to_string(dir.path().join("mine_report.md")).unwrap();
    assert!(written.starts_with("# Student Roster"));
}

#[test]
fn test_verbose_descriptions_have_no_blank_lines() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("mine.txt"),
        "Undergrad Jane 123456789 Senior 15 3.75\nGrad Bob B222 PhD 9 3.90 Foam\n",
    )
    .unwrap();

    let output = run_roster(dir.path(), &["-v", "mine.txt"]);
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Student name: Jane\n"));
    assert!(stderr.contains("Year: Senior\nStudent name: Bob\n"));
    assert!(!stderr.contains("\n\n"));
}
