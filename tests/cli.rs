use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn setup_project(root: &std::path::Path) {
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::write(root.join("a.txt"), "hi").unwrap();
    fs::write(root.join("secret.key"), "do not leak").unwrap();
    fs::write(root.join("sub/b.md"), "# hi").unwrap();
}

#[test]
fn test_missing_argument_fails() {
    let mut cmd = Command::cargo_bin("dumpmd").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("<INPUT_PATH>"));
}

#[test]
fn test_missing_input_path_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");

    let mut cmd = Command::cargo_bin("dumpmd").unwrap();
    cmd.arg(&missing)
        .arg(dir.path().join("out.md"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("The specified path does not exist"));

    assert!(!dir.path().join("out.md").exists());
}

#[test]
fn test_writes_explicit_output() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("proj");
    setup_project(&root);
    let output = dir.path().join("context.md");

    let mut cmd = Command::cargo_bin("dumpmd").unwrap();
    cmd.arg(&root)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Context generated and saved to:"));

    let doc = fs::read_to_string(&output).unwrap();
    assert!(doc.starts_with("# Project Context: proj\n\n"));
    assert!(doc.contains("> proj/a.txt\n\n```txt\nhi\n```"));
    assert!(doc.contains("> proj/sub/b.md\n\n\"\"\"md\n# hi\n\"\"\""));
    assert!(!doc.contains("secret.key"));
    assert!(!doc.contains("do not leak"));
    assert!(doc.ends_with("# Statistics\n\n- Total Files: 2\n"));
}

#[test]
fn test_default_output_under_home_downloads() {
    let home = tempdir().unwrap();
    fs::create_dir(home.path().join("Downloads")).unwrap();
    let work = tempdir().unwrap();
    setup_project(&work.path().join("proj"));

    let mut cmd = Command::cargo_bin("dumpmd").unwrap();
    cmd.current_dir(work.path())
        .env("HOME", home.path())
        .arg("proj")
        .assert()
        .success();

    let doc = fs::read_to_string(home.path().join("Downloads").join("proj.md")).unwrap();
    assert!(doc.contains("- Total Files: 2"));
}

#[test]
fn test_repeated_runs_are_identical() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("proj");
    setup_project(&root);
    let first = dir.path().join("first.md");
    let second = dir.path().join("second.md");

    for output in [&first, &second] {
        Command::cargo_bin("dumpmd")
            .unwrap()
            .arg(&root)
            .arg(output)
            .assert()
            .success();
    }

    assert_eq!(
        fs::read_to_string(first).unwrap(),
        fs::read_to_string(second).unwrap()
    );
}
