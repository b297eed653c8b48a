//! Integration tests for the grapify binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn grapify() -> Command {
    Command::cargo_bin("grapify").unwrap()
}

#[test]
fn help_lists_subcommands() {
    grapify()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("classify"))
        .stdout(predicate::str::contains("batch"))
        .stdout(predicate::str::contains("inspect"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn classify_missing_input_fails() {
    grapify()
        .args(["classify", "does-not-exist.jpg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn classify_missing_model_fails() {
    let dir = tempfile::tempdir().unwrap();
    let image_path = dir.path().join("leaf.png");
    let img = image::RgbImage::from_pixel(32, 32, image::Rgb([30, 120, 30]));
    img.save(&image_path).unwrap();

    grapify()
        .args(["classify", image_path.to_str().unwrap()])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Model file not found"));
}

#[test]
fn batch_no_matches_fails() {
    let dir = tempfile::tempdir().unwrap();

    grapify()
        .args(["batch", "*.png"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching image files"));
}

#[test]
fn config_path_prints_location() {
    grapify()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file:"));
}

#[test]
fn config_init_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    grapify()
        .args(["config", "init", "--output", path.to_str().unwrap()])
        .assert()
        .success();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("grapeleaf.onnx"));
    assert!(content.contains("Grape Black Rot"));
}
