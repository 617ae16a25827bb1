use std::process::{Command, Output};

use ffi_sample::{BOOTSTRAP_MESSAGE, FINISH_MESSAGE, START_MESSAGE};

const C_MESSAGE: &str = "C の関数が呼び出されました";

fn run_sample() -> Output {
    Command::new(env!("CARGO_BIN_EXE_ffi-sample"))
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run ffi-sample")
}

#[test]
fn prints_lines_in_order() {
    let output = run_sample();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec![BOOTSTRAP_MESSAGE, START_MESSAGE, C_MESSAGE, FINISH_MESSAGE]);
}

#[test]
fn bootstrap_line_appears_once() {
    let stdout = String::from_utf8(run_sample().stdout).unwrap();
    assert!(stdout.starts_with(BOOTSTRAP_MESSAGE));
    assert_eq!(stdout.matches(BOOTSTRAP_MESSAGE).count(), 1);
    assert_eq!(stdout.matches(C_MESSAGE).count(), 1);
}

#[test]
fn repeated_runs_are_identical() {
    let first = run_sample();
    let second = run_sample();
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), Some(0));
    assert_eq!(second.status.code(), Some(0));
}

#[test]
fn ignores_arguments() {
    let output = Command::new(env!("CARGO_BIN_EXE_ffi-sample"))
        .args(["--verbose", "extra"])
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run ffi-sample");

    assert!(output.status.success());
    assert_eq!(output.stdout, run_sample().stdout);
}

#[test]
fn logging_stays_off_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_ffi-sample"))
        .env("RUST_LOG", "debug")
        .output()
        .expect("Failed to run ffi-sample");

    assert!(output.status.success());
    assert_eq!(output.stdout, run_sample().stdout);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Delegating"));
}
