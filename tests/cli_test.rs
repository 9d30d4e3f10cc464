//! Smoke tests for the gridtrace binary.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_demo_scene_prints_grid_and_exits_zero() {
    Command::cargo_bin("gridtrace")
        .expect("binary builds")
        .assert()
        .success()
        .stdout(predicate::str::contains("######"))
        .stdout(predicate::str::contains("..#..#"));
}

#[test]
fn test_scene_file_argument() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("scene.json");
    std::fs::write(&path, r#"[{"kind": "dot", "at": [0, 0]}]"#).expect("write scene");

    Command::cargo_bin("gridtrace")
        .expect("binary builds")
        .arg(&path)
        .assert()
        .success()
        .stdout("#\n");
}

#[test]
fn test_custom_mark_flag() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("scene.json");
    std::fs::write(&path, r#"[{"kind": "dot", "at": [3, 3]}]"#).expect("write scene");

    Command::cargo_bin("gridtrace")
        .expect("binary builds")
        .arg(&path)
        .args(["--mark", "@"])
        .assert()
        .success()
        .stdout("@\n");
}

#[test]
fn test_invalid_scene_exits_nonzero() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("scene.json");
    std::fs::write(&path, r#"[{"kind": "vertical", "from": [0, 0], "to": [1, 5]}]"#)
        .expect("write scene");

    Command::cargo_bin("gridtrace")
        .expect("binary builds")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not axis-aligned"));
}

#[test]
fn test_missing_scene_file_exits_nonzero() {
    Command::cargo_bin("gridtrace")
        .expect("binary builds")
        .arg("/nonexistent/scene.json")
        .assert()
        .failure();
}
