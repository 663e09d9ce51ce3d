// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Write as _, process::Stdio};

use tokio::process::Command;

use crate::{SimpleGitError, SimpleGitResult};

/// Disambiguate the [`tokio::process::Command`] type from the [`std::process::Command`]
/// type. All the git commands in this crate are run using tokio's `Command`, and they
/// are awaited one after the other, never concurrently.
pub type TokioCommand = tokio::process::Command;

/// This macro creates a [`TokioCommand`] that receives a set of arguments and returns
/// it.
///
/// # Example of command and args
///
/// ```
/// # use simple_git::command;
/// let branch_name = "fix-bug";
/// let command = command!(
///     program => "git",
///     args => "checkout", "-b", branch_name,
/// );
/// assert_eq!(command.as_std().get_args().count(), 3);
/// ```
///
/// # Example of command, args, and items
///
/// ```
/// # use simple_git::command;
/// let paths = vec!["src/main.rs", "README.md"];
/// let command = command!(
///     program => "git",
///     args => "add",
///     + items => &paths
/// );
/// assert_eq!(command.as_std().get_args().count(), 3);
/// ```
#[macro_export]
macro_rules! command {
    // Variant that receives a command and args & items.
    (program=> $cmd:expr, args => $($args:expr,)* + items => $items:expr)
    => {{
        let mut it = $crate::TokioCommand::new($cmd);
        $(
            it.arg($args);
        )*
        for item in $items {
            it.arg(item.to_string());
        }
        it
    }};

    // Variant that receives a command and args.
    (program=> $cmd:expr, args=> $($args:expr),* $(,)?) => {{
        let mut it = $crate::TokioCommand::new($cmd);
        $(
            it.arg($args);
        )*
        it
    }};
}

/// What a command wrote to `stdout` and `stderr`, decoded lossily as UTF-8.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    #[must_use]
    pub fn from_stdout(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Both streams, `stdout` first, w/out trailing whitespace.
    #[must_use]
    pub fn combined(&self) -> String {
        let mut acc = String::new();
        for stream in [&self.stdout, &self.stderr] {
            let stream = stream.trim_end();
            if stream.is_empty() {
                continue;
            }
            if !acc.is_empty() {
                acc.push('\n');
            }
            acc.push_str(stream);
        }
        acc
    }
}

pub trait Run {
    /// # Errors
    ///
    /// Returns an error if:
    /// - The command program does not exist or cannot be executed
    /// - The command fails with a non-zero exit status
    fn run(
        &mut self,
    ) -> impl std::future::Future<Output = SimpleGitResult<CommandOutput>> + Send;
}

impl Run for TokioCommand {
    #[allow(clippy::missing_errors_doc)]
    async fn run(&mut self) -> SimpleGitResult<CommandOutput> { run(self).await }
}

/// Run the command and capture its `stdout` and `stderr`. The `stdin` is inherited from
/// the parent process, so that git's credential helpers can still ask the user for
/// input.
///
/// # Errors
///
/// Returns an error if:
/// - The command program does not exist or cannot be executed
///   ([`SimpleGitError::UnableToRunCommand`])
/// - The command fails with a non-zero exit status ([`SimpleGitError::CommandFailed`])
pub async fn run(command: &mut Command) -> SimpleGitResult<CommandOutput> {
    let command_str = fmt_cmd_str(command);

    // % is Display, ? is Debug.
    tracing::debug!(message = "Running command", command = %command_str);

    // Try to run command (might be unable to run it if the program is invalid).
    let output = command
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|source| SimpleGitError::UnableToRunCommand {
            command: command_str.clone(),
            source,
        })?;

    let it = CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };

    // At this point, the command has run, but it might result in a success or failure.
    if output.status.success() {
        Ok(it)
    } else {
        Err(SimpleGitError::CommandFailed {
            command: command_str,
            maybe_exit_code: output.status.code(),
            output: it.combined(),
        })
    }
}

/// Format the command as a single line, eg: `git commit -m "fix typos"`.
#[must_use]
pub fn fmt_cmd_str(command: &Command) -> String {
    let command = command.as_std();
    let mut acc = command.get_program().to_string_lossy().into_owned();
    for arg in command.get_args() {
        let arg = arg.to_string_lossy();
        if arg.is_empty() || arg.contains(char::is_whitespace) {
            _ = write!(acc, " {arg:?}");
        } else {
            _ = write!(acc, " {arg}");
        }
    }
    acc
}
