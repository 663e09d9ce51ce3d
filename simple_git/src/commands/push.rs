// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{AppContext, CommandRunDetails, InlinePaths, PushDetails};
use crate::{CommitMessagePrompt, Reporter, SimpleGitError, SimpleGitResult,
            VersionControl, push_to_remote, stage_files,
            ui_str::commit_display};

/// A commit message that is exactly one of these is almost certainly an option that the
/// user mistyped, so it is never committed.
pub const RESERVED_OPTION_TOKENS: [&str; 5] =
    ["-m", "--message", "-i", "--interactive", "--files"];

#[must_use]
pub fn is_reserved_option_token(message: &str) -> bool {
    RESERVED_OPTION_TOKENS.contains(&message)
}

/// The options of `simple-git push`. Empty strings mean the option wasn't given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushOptions {
    pub interactive: bool,
    pub message: String,
    /// Whitespace separated list of paths to stage before committing.
    pub files: String,
}

/// Split the `--files` value into individual paths.
#[must_use]
pub fn split_paths(files: &str) -> InlinePaths {
    files.split_whitespace().map(ToString::to_string).collect()
}

/// The main function for `simple-git push`.
///
/// 1. Stage the `files` (if any), which requires a `message`.
/// 2. Without a `message`, skip straight to pushing whatever was already committed.
/// 3. With a `message`, make sure it is not an option token (re-prompting until it
///    isn't), let the user edit it when `interactive`, commit, and push.
///
/// Usage errors are detected before git is invoked.
///
/// # Errors
///
/// Returns [`SimpleGitError::FilesRequireMessage`] or
/// [`SimpleGitError::InteractiveRequiresMessage`] for invalid combinations of options,
/// and any error from git or the prompt along the way.
pub async fn try_push<G: VersionControl, P: CommitMessagePrompt>(
    context: &mut AppContext<G, P>,
    options: PushOptions,
) -> SimpleGitResult<CommandRunDetails> {
    let details = push_with_options(context, options).await?;
    Ok(CommandRunDetails::Push(details))
}

pub(super) async fn push_with_options<G: VersionControl, P: CommitMessagePrompt>(
    context: &mut AppContext<G, P>,
    options: PushOptions,
) -> SimpleGitResult<PushDetails> {
    let PushOptions {
        interactive,
        message,
        files,
    } = options;

    let mut staged_paths = InlinePaths::new();
    if !files.is_empty() {
        if message.is_empty() {
            return Err(SimpleGitError::FilesRequireMessage);
        }
        staged_paths = split_paths(&files);
        stage_files(&context.vcs, &mut context.reporter, &staged_paths).await?;
    }

    if message.is_empty() {
        if interactive {
            return Err(SimpleGitError::InteractiveRequiresMessage);
        }
        let outcome = push_to_remote(&context.vcs, &mut context.reporter).await?;
        return Ok(PushDetails {
            staged_paths,
            maybe_commit_message: None,
            outcome,
        });
    }

    let message =
        finalize_commit_message(&context.prompt, &mut context.reporter, message, interactive)
            .await?;

    context
        .reporter
        .info(commit_display::info_committing_with_message(&message));
    let output = context.vcs.run_commit(&message).await?;
    context.reporter.git_output(&output);

    let outcome = push_to_remote(&context.vcs, &mut context.reporter).await?;

    Ok(PushDetails {
        staged_paths,
        maybe_commit_message: Some(message),
        outcome,
    })
}

/// Replace a reserved message, then (when `interactive`) hand the message to the user
/// for editing. The edited text is checked again, so an option token can't sneak in
/// through the editor either.
async fn finalize_commit_message(
    prompt: &impl CommitMessagePrompt,
    reporter: &mut Reporter,
    message: String,
    interactive: bool,
) -> SimpleGitResult<String> {
    let message = replace_reserved_message(prompt, reporter, message).await?;
    if !interactive {
        return Ok(message);
    }

    let edited = prompt
        .edit_message(commit_display::commit_message_prompt(), &message)
        .await?;
    replace_reserved_message(prompt, reporter, edited).await
}

/// Keep asking for a new message for as long as the user supplies a reserved token.
async fn replace_reserved_message(
    prompt: &impl CommitMessagePrompt,
    reporter: &mut Reporter,
    mut message: String,
) -> SimpleGitResult<String> {
    while is_reserved_option_token(&message) {
        // % is Display, ? is Debug.
        tracing::warn!(message = "Rejected commit message", commit_message = %message);
        reporter.error(commit_display::error_options_cannot_be_used_as_message());
        message = prompt
            .read_message(commit_display::commit_message_prompt())
            .await?;
    }
    Ok(message)
}
