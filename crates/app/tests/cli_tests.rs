use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn studio() -> Command {
    Command::new(env!("CARGO_BIN_EXE_manim-studio"))
}

#[test]
fn test_cli_help() {
    studio()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("narrated animation scenes"));
}

#[test]
fn test_cli_lists_themes_sorted() {
    studio()
        .arg("themes")
        .assert()
        .success()
        .stdout("3b1b_classic\ndark_swiss\nlight\nnord\n");
}

#[test]
fn test_cli_prints_theme() {
    studio()
        .args(["theme", "nord"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"bg\": \"#2e3440\""));
}

#[test]
fn test_cli_unknown_theme_fails() {
    studio()
        .args(["theme", "solarized"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("solarized"));
}

#[test]
fn test_cli_default_timing_is_normal() {
    studio()
        .arg("timing")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"normal\": 0.8"));
}

#[test]
fn test_cli_timing_defaults_to_config_pace() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("studio.json");
    fs::write(&config, r#"{ "pace": "relaxed" }"#).unwrap();

    studio()
        .arg("--config")
        .arg(&config)
        .arg("timing")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"normal\": 1.2"));

    studio()
        .arg("--config")
        .arg(&config)
        .args(["timing", "fast"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"normal\": 0.5"));
}

#[test]
fn test_cli_preset_commands_ignore_broken_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("broken.json");
    fs::write(&config, "{ not json").unwrap();

    studio()
        .arg("--config")
        .arg(&config)
        .arg("themes")
        .assert()
        .success()
        .stdout(predicate::str::contains("nord"));
    studio()
        .arg("--config")
        .arg(&config)
        .args(["theme", "nord"])
        .assert()
        .success();
    studio()
        .arg("--config")
        .arg(&config)
        .args(["timing", "fast"])
        .assert()
        .success();

    studio()
        .arg("--config")
        .arg(&config)
        .arg("scene")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Json"));
}

#[test]
fn test_cli_scales_point_sets() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("points.json");
    fs::write(&input, "[[[0, 0], [10, 0]]]").unwrap();

    let output = studio()
        .arg("scale")
        .arg(&input)
        .args(["--target-scale", "5"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let mapped: Vec<Vec<[f64; 3]>> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(mapped, vec![vec![[-2.5, 0.0, 0.0], [2.5, 0.0, 0.0]]]);
}

#[test]
fn test_cli_scale_rejects_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.json");
    fs::write(&input, "[[]]").unwrap();

    studio()
        .arg("scale")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("EmptyInput"));
}

#[test]
fn test_cli_scene_uses_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("studio.json");
    fs::write(&config, r#"{ "theme": "light", "scene": { "speech_service": "azure" } }"#).unwrap();

    studio()
        .arg("--config")
        .arg(&config)
        .arg("scene")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"background_color\": \"#fafafa\""))
        .stdout(predicate::str::contains("\"speech_service\": \"azure\""));
}

#[test]
fn test_cli_template_lays_out_equations() {
    let output = studio()
        .args(["template", "--title", "Physics", "-e", "E = mc^2", "-e", "F = ma"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let template: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(template["elements"].as_array().unwrap().len(), 2);
    assert_eq!(template["elements"][1]["id"], "equations");
    assert_eq!(
        template["teardown"]["fade_out"],
        serde_json::json!(["title", "equations"])
    );
}
