//! Integration tests for the fitcalc binary.
//!
//! These tests verify end-to-end behavior including:
//! - The built-in demo batch
//! - JSON and CSV batch files
//! - Error reporting for unknown codes and bad parameters
//! - Config file handling

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a test directory that also serves as XDG config home
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the CLI binary, isolated from the user's config
fn cli(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fitcalc"));
    cmd.env("XDG_CONFIG_HOME", temp_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Workout distance, speed and calorie calculator",
        ));
}

#[test]
fn test_demo_batch_prints_three_reports() {
    let temp_dir = setup_test_dir();
    let output = cli(&temp_dir).assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(
        lines,
        vec![
            "Training type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; \
             Mean speed: 1.000 km/h; Calories burned: 336.000.",
            "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
             Mean speed: 9.750 km/h; Calories burned: 699.750.",
            "Training type: SportsWalking; Duration: 1.000 h.; Distance: 5.850 km; \
             Mean speed: 5.850 km/h; Calories burned: 182.311.",
        ]
    );
}

#[test]
fn test_report_subcommand_matches_default() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Training type: Running;"));
}

#[test]
fn test_json_format() {
    let temp_dir = setup_test_dir();
    let output = cli(&temp_dir)
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let first: serde_json::Value = serde_json::from_str(stdout.lines().next().unwrap()).unwrap();
    assert_eq!(first["training_type"], "Swimming");
    assert_eq!(first["distance"], 0.994);
    assert_eq!(first["calories"], 336.0);
}

#[test]
fn test_csv_input() {
    let temp_dir = setup_test_dir();
    let input = temp_dir.path().join("packages.csv");
    fs::write(&input, "RUN,15000,2,75\n").unwrap();

    cli(&temp_dir)
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Training type: Running; Duration: 2.000 h.; Distance: 9.750 km; \
             Mean speed: 4.875 km/h;",
        ));
}

#[test]
fn test_unknown_code_fails() {
    let temp_dir = setup_test_dir();
    let input = temp_dir.path().join("packages.json");
    fs::write(&input, r#"[{"code": "XYZ", "data": [1, 1, 1]}]"#).unwrap();

    cli(&temp_dir)
        .arg("--input")
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("XYZ"));
}

#[test]
fn test_wrong_arity_fails() {
    let temp_dir = setup_test_dir();
    let input = temp_dir.path().join("packages.csv");
    fs::write(&input, "WLK,9000,1,75\n").unwrap();

    cli(&temp_dir)
        .arg("--input")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidParameters"))
        .stderr(predicate::str::contains("WLK"));
}

#[test]
fn test_fail_fast_stops_at_first_error() {
    let temp_dir = setup_test_dir();
    let input = temp_dir.path().join("packages.csv");
    fs::write(&input, "XYZ,1,1,1\nRUN,15000,1,75\n").unwrap();

    cli(&temp_dir)
        .arg("--input")
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Running").not());
}

#[test]
fn test_keep_going_reports_rest() {
    let temp_dir = setup_test_dir();
    let input = temp_dir.path().join("packages.csv");
    fs::write(&input, "XYZ,1,1,1\nRUN,15000,1,75\n").unwrap();

    cli(&temp_dir)
        .arg("--input")
        .arg(&input)
        .arg("--keep-going")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Training type: Running;"))
        .stderr(predicate::str::contains("Package 1 (XYZ)"));
}

#[test]
fn test_config_file_sets_format_and_input() {
    let temp_dir = setup_test_dir();
    let input = temp_dir.path().join("batch.csv");
    fs::write(&input, "SWM,720,1,80,25,40\n").unwrap();

    let config_dir = temp_dir.path().join("fitcalc");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        format!(
            "[output]\nformat = \"json\"\n\n[input]\npackages_file = {:?}\n",
            input.to_str().unwrap()
        ),
    )
    .unwrap();

    let output = cli(&temp_dir).assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("\"training_type\":\"Swimming\""));
}

#[test]
fn test_flag_overrides_config_format() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("custom.toml");
    fs::write(&config_path, "[output]\nformat = \"json\"\n").unwrap();

    cli(&temp_dir)
        .arg("--config")
        .arg(&config_path)
        .args(["--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Training type: Swimming;"));
}

#[test]
fn test_kinds_lists_codes() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("kinds")
        .assert()
        .success()
        .stdout(predicate::str::contains("RUN"))
        .stdout(predicate::str::contains("WLK"))
        .stdout(predicate::str::contains("pool_length_m"));
}
