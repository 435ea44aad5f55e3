/// Smoke tests for the binary's one failure path: a terminal without color
use std::process::{Command, Output};

const NO_COLOR_MESSAGE: &str = "Your terminal does not support colors!";

fn run_without_color(args: &[&str], term: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_termcube"))
        .args(args)
        .env("TERM", term)
        .env_remove("COLORTERM")
        .output()
        .expect("Failed to execute termcube")
}

#[test]
fn dumb_terminal_exits_with_status_one() {
    let output = run_without_color(&[], "dumb");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), NO_COLOR_MESSAGE);
}

#[test]
fn redirected_output_is_treated_as_no_color() {
    // stdout is a pipe here, so even a color TERM cannot be drawn on
    let output = run_without_color(&[], "xterm-256color");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(NO_COLOR_MESSAGE));
    // No escape sequences: the screen was never taken over
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn arguments_are_ignored() {
    let output = run_without_color(&["--help", "extra"], "dumb");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), NO_COLOR_MESSAGE);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("panicked at"));
}
