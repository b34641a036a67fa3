use serde_json::{json, Value};
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_resume-scout"))
        .args(args)
        .env_remove("GITHUB_TOKEN")
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn missing_argument_reports_error() {
    let output = run(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_json(&output), json!({ "error": "No PDF path provided" }));
}

#[test]
fn missing_file_reports_error() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("resume.pdf");
    let path = path.to_str().unwrap();

    let output = run(&[path]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_json(&output),
        json!({ "error": format!("PDF not found at {path}") })
    );
}
