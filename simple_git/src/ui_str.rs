// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! All the user facing strings live here, so the commands read as a sequence of steps.

use crate::{SimpleGitError, fmt};

pub fn version_message(version: &str) -> String {
    format!("Simple Git CLI Version: {version}.")
}

pub fn unrecoverable_error_message(error: &SimpleGitError) -> String {
    match error {
        SimpleGitError::CommandFailed { output, .. } if !output.is_empty() => {
            format!("{a}\n{b}", a = fmt::fatal(error), b = fmt::dim(output))
        }
        _ => fmt::fatal(error),
    }
}

pub mod branch_create_display {
    use super::fmt;

    pub fn info_create_success(branch_name: &str) -> String {
        format!(
            "{a} {b}{c}",
            a = fmt::normal("Created and switched to branch"),
            b = fmt::emphasis(branch_name),
            c = fmt::normal(".")
        )
    }
}

pub mod commit_display {
    use super::fmt;

    /// The line editor draws its own prompt styling, so this is plain text.
    pub fn commit_message_prompt() -> &'static str { "commit message" }

    pub fn error_options_cannot_be_used_as_message() -> String {
        fmt::error("Options cannot be used as message. Enter a valid commit message.")
    }

    pub fn info_committing_with_message(message: &str) -> String {
        format!(
            "{a} {b}{c}",
            a = fmt::normal("Committing with message"),
            b = fmt::emphasis(format!("'{message}'")),
            c = fmt::normal(".")
        )
    }
}

pub mod push_display {
    use super::fmt;

    pub fn info_no_commits_to_push() -> String { fmt::normal("No commits to push.") }

    pub fn info_pushed_to_remote_branch(remote_branch: &str) -> String {
        format!(
            "{a} {b}{c}",
            a = fmt::normal("Pushed all changes to"),
            b = fmt::emphasis(remote_branch),
            c = fmt::normal(".")
        )
    }
}
