// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Runs the `simple-git` binary as a user would. Only invocations that stop before git
//! touches a repository are exercised here, so these tests work in any directory.

use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn run_simple_git(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_simple-git"))
        .args(args)
        .output()
        .expect("the simple-git binary is built for integration tests")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_version_flag_prints_version() {
    let output = run_simple_git(&["--version"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Simple Git CLI Version: 0.1.0.\n");
}

#[test]
fn test_version_flag_short_circuits_subcommand() {
    // `push-all` w/out `-m` would be a parse error if the version flag didn't win.
    let output = run_simple_git(&["-V", "push-all"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Simple Git CLI Version: 0.1.0."));
}

#[test]
fn test_files_without_message_exits_with_one() {
    let output = run_simple_git(&["push", "--files", "x.py"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Message option required when using the files option."));
}

#[test]
fn test_interactive_without_message_exits_with_one() {
    let output = run_simple_git(&["push", "-i"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Message option required to use interactive."));
}

#[test]
fn test_push_all_requires_message() {
    let output = run_simple_git(&["push-all"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("--message"));
}

#[test]
fn test_missing_subcommand_is_reported() {
    let output = run_simple_git(&[]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("a command is required"));
}
