// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{VersionControl, parse_remote_branch};
use crate::{Reporter, SimpleGitResult, ui_str::push_display};

/// What [`push_to_remote()`] ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    /// There were no local commits missing from the remote, so nothing was pushed.
    NothingToPush,
    /// The current branch already tracks `remote_branch`, so a plain `git push` ran.
    PushedToUpstream { remote_branch: String },
    /// The current branch had no upstream. `git push -u origin HEAD` created it, and
    /// `remote_branch` is what the branch tracks now.
    PushedAndSetUpstream { remote_branch: String },
}

impl PushOutcome {
    #[must_use]
    pub fn maybe_remote_branch(&self) -> Option<&str> {
        match self {
            PushOutcome::NothingToPush => None,
            PushOutcome::PushedToUpstream { remote_branch }
            | PushOutcome::PushedAndSetUpstream { remote_branch } => Some(remote_branch),
        }
    }
}

/// Add the given paths to the staging area.
///
/// # Errors
///
/// Returns an error if `git add` fails.
pub async fn stage_files(
    vcs: &impl VersionControl,
    reporter: &mut Reporter,
    paths: &[String],
) -> SimpleGitResult<()> {
    let output = vcs.run_add(paths).await?;
    reporter.git_output(&output);
    Ok(())
}

/// The raw `git log` text for commits that are reachable from a local branch, but not
/// from any remote tracking branch. Empty means there is nothing to push.
///
/// # Errors
///
/// Returns an error if `git log` fails.
pub async fn list_unpushed_commits(vcs: &impl VersionControl) -> SimpleGitResult<String> {
    let output = vcs.run_log_unpushed().await?;
    Ok(output.stdout)
}

/// The upstream of the current branch, eg: `origin/main`, or an empty string if there
/// is none. This is computed fresh on every call.
///
/// # Errors
///
/// Returns an error if `git status` fails.
pub async fn resolve_remote_branch(vcs: &impl VersionControl) -> SimpleGitResult<String> {
    let output = vcs.run_status().await?;
    Ok(parse_remote_branch(&output.stdout).to_string())
}

/// Push the local commits to the remote:
/// 1. If there are no unpushed commits, report that and don't touch the network.
/// 2. If the current branch has an upstream, run `git push`.
/// 3. Otherwise run `git push -u origin HEAD` (once), and resolve the upstream again so
///    the report names the branch that was just created.
///
/// # Errors
///
/// Returns an error if any of the git commands fail. Nothing is retried.
pub async fn push_to_remote(
    vcs: &impl VersionControl,
    reporter: &mut Reporter,
) -> SimpleGitResult<PushOutcome> {
    let commits_to_push = list_unpushed_commits(vcs).await?;
    if commits_to_push.is_empty() {
        tracing::info!(message = "No commits to push");
        reporter.info(push_display::info_no_commits_to_push());
        return Ok(PushOutcome::NothingToPush);
    }

    let remote_branch = resolve_remote_branch(vcs).await?;
    let outcome = if remote_branch.is_empty() {
        let output = vcs.run_push_set_upstream().await?;
        reporter.git_output(&output);
        PushOutcome::PushedAndSetUpstream {
            remote_branch: resolve_remote_branch(vcs).await?,
        }
    } else {
        let output = vcs.run_push().await?;
        reporter.git_output(&output);
        PushOutcome::PushedToUpstream { remote_branch }
    };

    // % is Display, ? is Debug.
    tracing::info!(message = "Pushed to remote", outcome = ?outcome);

    let remote_branch = outcome.maybe_remote_branch().unwrap_or_default();
    reporter.info(push_display::info_pushed_to_remote_branch(remote_branch));

    Ok(outcome)
}
