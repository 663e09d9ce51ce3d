// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Every way an invocation of `simple-git` can stop early. The binary target converts
//! these into a process exit code via [`SimpleGitError::exit_code()`].
//!
//! | Variant                          | Raised by                                   | Exit code     |
//! | -------------------------------- | ------------------------------------------- | ------------- |
//! | [`FilesRequireMessage`]          | `push --files ..` without `-m`              | 1             |
//! | [`InteractiveRequiresMessage`]   | `push -i` without `-m`                      | 1             |
//! | [`CommandFailed`]                | git ran and returned a non-zero exit code   | git's code    |
//! | [`UnableToRunCommand`]           | git could not be spawned at all             | 1             |
//! | [`PromptFailed`]                 | the terminal prompt could not read a line   | 1             |
//!
//! [`FilesRequireMessage`]: SimpleGitError::FilesRequireMessage
//! [`InteractiveRequiresMessage`]: SimpleGitError::InteractiveRequiresMessage
//! [`CommandFailed`]: SimpleGitError::CommandFailed
//! [`UnableToRunCommand`]: SimpleGitError::UnableToRunCommand
//! [`PromptFailed`]: SimpleGitError::PromptFailed

/// Exit code used for usage errors, and for failures that didn't produce an exit code
/// of their own.
pub const EXIT_CODE_USAGE_ERROR: u8 = 1;

pub type SimpleGitResult<T> = Result<T, SimpleGitError>;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum SimpleGitError {
    #[error("Message option required when using the files option.")]
    #[diagnostic(
        code(simple_git::usage::files_require_message),
        help("Pass a commit message, eg: `simple-git push -m \"fix typos\" --files 'a.rs b.rs'`")
    )]
    FilesRequireMessage,

    #[error("Message option required to use interactive.")]
    #[diagnostic(
        code(simple_git::usage::interactive_requires_message),
        help("The interactive option edits the message passed via `-m`.")
    )]
    InteractiveRequiresMessage,

    /// git ran, and exited with a non-zero exit code (or was killed by a signal, in
    /// which case there is no exit code).
    #[error("Command failed: {command}")]
    #[diagnostic(code(simple_git::git::command_failed))]
    CommandFailed {
        command: String,
        maybe_exit_code: Option<i32>,
        output: String,
    },

    #[error("Unable to run command: {command}")]
    #[diagnostic(
        code(simple_git::git::unable_to_run),
        help("Make sure that `git` is installed and available on your PATH.")
    )]
    UnableToRunCommand {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to read the commit message from the terminal")]
    #[diagnostic(code(simple_git::prompt::failed))]
    PromptFailed {
        #[source]
        source: std::io::Error,
    },
}

impl SimpleGitError {
    /// The process exit code for this error. For [`SimpleGitError::CommandFailed`] this
    /// is git's own exit code, clamped to the range a process can return.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            SimpleGitError::CommandFailed {
                maybe_exit_code: Some(code),
                ..
            } => u8::try_from(*code)
                .ok()
                .filter(|it| *it != 0)
                .unwrap_or(EXIT_CODE_USAGE_ERROR),
            SimpleGitError::FilesRequireMessage
            | SimpleGitError::InteractiveRequiresMessage
            | SimpleGitError::CommandFailed {
                maybe_exit_code: None,
                ..
            }
            | SimpleGitError::UnableToRunCommand { .. }
            | SimpleGitError::PromptFailed { .. } => EXIT_CODE_USAGE_ERROR,
        }
    }
}
