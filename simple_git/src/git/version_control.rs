// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::future::Future;

use crate::{CommandOutput, SimpleGitResult};

/// The narrow interface to the external version control tool. Each method maps to
/// exactly one invocation of `git`:
///
/// | Method                          | git invocation                     |
/// | ------------------------------- | ---------------------------------- |
/// | [`run_add`]                     | `git add <paths...>`               |
/// | [`run_commit`]                  | `git commit -m <message>`          |
/// | [`run_push`]                    | `git push`                         |
/// | [`run_push_set_upstream`]       | `git push -u origin HEAD`          |
/// | [`run_status`]                  | `git status -sb`                   |
/// | [`run_log_unpushed`]            | `git log --branches --not --remotes` |
/// | [`run_checkout_new_branch`]     | `git checkout -b <branch>`         |
///
/// The commands are written against this trait, so they can be tested w/out a real git
/// repository (see `FakeGit` in the test fixtures).
///
/// [`run_add`]: VersionControl::run_add
/// [`run_commit`]: VersionControl::run_commit
/// [`run_push`]: VersionControl::run_push
/// [`run_push_set_upstream`]: VersionControl::run_push_set_upstream
/// [`run_status`]: VersionControl::run_status
/// [`run_log_unpushed`]: VersionControl::run_log_unpushed
/// [`run_checkout_new_branch`]: VersionControl::run_checkout_new_branch
///
/// # Errors
///
/// Every method returns [`crate::SimpleGitError::CommandFailed`] when git exits with a
/// non-zero code, and [`crate::SimpleGitError::UnableToRunCommand`] when git can't be
/// run at all.
pub trait VersionControl {
    fn run_add(
        &self,
        paths: &[String],
    ) -> impl Future<Output = SimpleGitResult<CommandOutput>> + Send;

    fn run_commit(
        &self,
        message: &str,
    ) -> impl Future<Output = SimpleGitResult<CommandOutput>> + Send;

    fn run_push(&self) -> impl Future<Output = SimpleGitResult<CommandOutput>> + Send;

    fn run_push_set_upstream(
        &self,
    ) -> impl Future<Output = SimpleGitResult<CommandOutput>> + Send;

    fn run_status(&self) -> impl Future<Output = SimpleGitResult<CommandOutput>> + Send;

    fn run_log_unpushed(
        &self,
    ) -> impl Future<Output = SimpleGitResult<CommandOutput>> + Send;

    fn run_checkout_new_branch(
        &self,
        branch_name: &str,
    ) -> impl Future<Output = SimpleGitResult<CommandOutput>> + Send;
}
