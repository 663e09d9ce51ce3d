// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{AppContext, CommandRunDetails, InlinePaths, PushDetails, PushOptions,
            push::push_with_options};
use crate::{CommitMessagePrompt, SimpleGitResult, VersionControl,
            git_command_args::GIT_ARG_ALL_CHANGES, stage_files};

/// The main function for `simple-git push-all`. Stages every change in the working tree,
/// then continues exactly like `simple-git push` w/out any `--files`.
///
/// # Errors
///
/// Returns an error if staging fails, or anything that `push` can return.
pub async fn try_push_all<G: VersionControl, P: CommitMessagePrompt>(
    context: &mut AppContext<G, P>,
    interactive: bool,
    message: String,
) -> SimpleGitResult<CommandRunDetails> {
    let staged_paths: InlinePaths = [GIT_ARG_ALL_CHANGES.to_string()].into_iter().collect();
    stage_files(&context.vcs, &mut context.reporter, &staged_paths).await?;

    let options = PushOptions {
        interactive,
        message,
        files: String::new(),
    };
    let details = push_with_options(context, options).await?;

    Ok(CommandRunDetails::PushAll(PushDetails {
        staged_paths,
        ..details
    }))
}
