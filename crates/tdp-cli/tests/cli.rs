//! Exit codes and output of the `tdp` binary.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tdp_model::ClientProfile;

fn tdp(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tdp"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn unique_temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "tdp-cli-bin-{}-{}-{}.json",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn encode_prints_vector_as_json() {
    let output = tdp(&["encode", "--json", "--age", "150", "--month", "may"]);

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert_eq!(
        stdout(&output).trim(),
        "[150,0,0,0,0,0,0,0,4,0,1,999,0,0,1.1,93.994,-36.4,4.857,5191.0]"
    );
}

#[test]
fn invalid_profile_file_exits_with_one() {
    let mut json = serde_json::to_value(ClientProfile::default()).unwrap();
    json["day_of_week"] = "sat".into();
    let path = unique_temp_file("sat");
    fs::write(&path, serde_json::to_vec(&json).unwrap()).unwrap();

    let output = tdp(&["encode", "--profile", path.to_str().unwrap()]);
    fs::remove_file(&path).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("error: invalid client profile"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn missing_model_exits_with_one() {
    let model = unique_temp_file("no-model");
    let output = tdp(&["predict", "--model", model.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("error: load model"));
}

#[test]
fn usage_errors_exit_with_one() {
    let conflict = tdp(&["predict", "--profile", "client.json", "--age", "40"]);
    assert_eq!(conflict.status.code(), Some(1));

    let bad_choice = tdp(&["encode", "--poutcome", "won"]);
    assert_eq!(bad_choice.status.code(), Some(1));
}

#[test]
fn help_exits_with_zero() {
    let output = tdp(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage: tdp"));
}
