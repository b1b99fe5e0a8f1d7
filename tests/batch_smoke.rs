//! End-to-end batch runs through the compiled binary.

use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Fixture with a source file, a one-character edit, and a manifest
/// covering both a scored pair and an identical pair.
fn make_fixture() -> assert_fs::TempDir {
    let tmp = assert_fs::TempDir::new().expect("tempdir");

    tmp.child("original.py")
        .write_str("calculate = 1\n")
        .expect("write original");
    tmp.child("edited.py")
        .write_str("calculatd = 1\n")
        .expect("write edited");
    tmp.child("pairs.txt")
        .write_str("original.py edited.py\noriginal.py original.py\n")
        .expect("write manifest");

    tmp
}

#[test]
fn two_line_manifest_appends_two_result_lines() {
    let tmp = make_fixture();

    Command::cargo_bin("simc")
        .expect("binary")
        .current_dir(tmp.path())
        .args(["--quiet", "batch", "pairs.txt", "--output", "results.txt"])
        .assert()
        .success();

    let results = std::fs::read_to_string(tmp.path().join("results.txt")).expect("results");
    let lines: Vec<&str> = results.lines().collect();
    assert_eq!(lines.len(), 2);

    // Each line is either the literal 1 or a 3-decimal float
    let shape = predicate::str::is_match(r"^(1|\d+\.\d{3})$").expect("regex");
    for line in &lines {
        assert!(shape.eval(line), "unexpected result line: {line}");
    }

    assert_eq!(lines[0], "0.900");
    assert_eq!(lines[1], "1");
}

#[test]
fn malformed_manifest_line_is_skipped_not_fatal() {
    let tmp = make_fixture();
    tmp.child("pairs.txt")
        .write_str("just_one_path.py\noriginal.py edited.py\n")
        .expect("rewrite manifest");

    Command::cargo_bin("simc")
        .expect("binary")
        .current_dir(tmp.path())
        .args(["--quiet", "batch", "pairs.txt", "--output", "results.txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("no files found to compare"));

    // The bad line is reported and the rest of the batch still runs
    let results = std::fs::read_to_string(tmp.path().join("results.txt")).expect("results");
    assert_eq!(results.lines().count(), 1);
}

#[test]
fn repeated_batches_append_rather_than_truncate() {
    let tmp = make_fixture();

    for _ in 0..2 {
        Command::cargo_bin("simc")
            .expect("binary")
            .current_dir(tmp.path())
            .args(["--quiet", "batch", "pairs.txt", "--output", "results.txt"])
            .assert()
            .success();
    }

    let results = std::fs::read_to_string(tmp.path().join("results.txt")).expect("results");
    assert_eq!(results.lines().count(), 4);
}
