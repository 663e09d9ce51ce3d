// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{AppContext, CommandRunDetails};
use crate::{CommitMessagePrompt, SimpleGitResult, VersionControl,
            ui_str::branch_create_display};

/// The main function for `simple-git create <name>`. Creates a branch named after
/// `name` (see [`derive_branch_name()`]) and switches to it. git's own checks decide
/// whether the name is acceptable; its exit code is passed through when it is not.
///
/// # Errors
///
/// Returns an error if `git checkout -b` fails.
pub async fn try_create<G: VersionControl, P: CommitMessagePrompt>(
    context: &mut AppContext<G, P>,
    name: &str,
) -> SimpleGitResult<CommandRunDetails> {
    let branch_name = derive_branch_name(name);

    let output = context.vcs.run_checkout_new_branch(&branch_name).await?;
    context.reporter.git_output(&output);
    context
        .reporter
        .info(branch_create_display::info_create_success(&branch_name));

    Ok(CommandRunDetails::Create { branch_name })
}

/// Every run of whitespace in `name` becomes a single `-`, and leading or trailing
/// whitespace is dropped. Eg: `"  fix   the bug "` becomes `"fix-the-bug"`.
#[must_use]
pub fn derive_branch_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("-")
}
