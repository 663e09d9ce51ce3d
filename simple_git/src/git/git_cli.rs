// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use super::{GIT_PROGRAM, REMOTE_NAME, VersionControl,
            git_command_args::{GIT_ARG_BRANCHES, GIT_ARG_HEAD, GIT_ARG_MESSAGE,
                               GIT_ARG_NEW_BRANCH, GIT_ARG_NOT, GIT_ARG_REMOTES,
                               GIT_ARG_SET_UPSTREAM, GIT_ARG_STATUS_SHORT_BRANCH},
            git_command_names::{GIT_CMD_ADD, GIT_CMD_CHECKOUT, GIT_CMD_COMMIT,
                                GIT_CMD_LOG, GIT_CMD_PUSH, GIT_CMD_STATUS}};
use crate::{CommandOutput, Run, SimpleGitResult, TokioCommand, command};

/// [`VersionControl`] backed by the `git` executable. By default it runs `git` found on
/// the `PATH` in the current working directory of the process.
#[derive(Debug, Clone)]
pub struct GitCli {
    pub program: String,
    pub maybe_current_dir: Option<PathBuf>,
}

impl Default for GitCli {
    fn default() -> Self {
        Self {
            program: GIT_PROGRAM.to_string(),
            maybe_current_dir: None,
        }
    }
}

impl GitCli {
    /// Run git inside `current_dir` instead of the process's current working directory.
    #[must_use]
    pub fn in_dir(current_dir: impl Into<PathBuf>) -> Self {
        Self {
            maybe_current_dir: Some(current_dir.into()),
            ..Default::default()
        }
    }

    async fn run_in_dir(&self, mut cmd: TokioCommand) -> SimpleGitResult<CommandOutput> {
        if let Some(current_dir) = &self.maybe_current_dir {
            cmd.current_dir(current_dir);
        }
        cmd.run().await
    }
}

impl VersionControl for GitCli {
    async fn run_add(&self, paths: &[String]) -> SimpleGitResult<CommandOutput> {
        let cmd = command!(
            program => &self.program,
            args => GIT_CMD_ADD,
            + items => paths
        );
        self.run_in_dir(cmd).await
    }

    async fn run_commit(&self, message: &str) -> SimpleGitResult<CommandOutput> {
        let cmd = command!(
            program => &self.program,
            args => GIT_CMD_COMMIT, GIT_ARG_MESSAGE, message
        );
        self.run_in_dir(cmd).await
    }

    async fn run_push(&self) -> SimpleGitResult<CommandOutput> {
        let cmd = command!(program => &self.program, args => GIT_CMD_PUSH);
        self.run_in_dir(cmd).await
    }

    async fn run_push_set_upstream(&self) -> SimpleGitResult<CommandOutput> {
        let cmd = command!(
            program => &self.program,
            args => GIT_CMD_PUSH, GIT_ARG_SET_UPSTREAM, REMOTE_NAME, GIT_ARG_HEAD
        );
        self.run_in_dir(cmd).await
    }

    async fn run_status(&self) -> SimpleGitResult<CommandOutput> {
        let cmd = command!(
            program => &self.program,
            args => GIT_CMD_STATUS, GIT_ARG_STATUS_SHORT_BRANCH
        );
        self.run_in_dir(cmd).await
    }

    async fn run_log_unpushed(&self) -> SimpleGitResult<CommandOutput> {
        let cmd = command!(
            program => &self.program,
            args => GIT_CMD_LOG, GIT_ARG_BRANCHES, GIT_ARG_NOT, GIT_ARG_REMOTES
        );
        self.run_in_dir(cmd).await
    }

    async fn run_checkout_new_branch(
        &self,
        branch_name: &str,
    ) -> SimpleGitResult<CommandOutput> {
        let cmd = command!(
            program => &self.program,
            args => GIT_CMD_CHECKOUT, GIT_ARG_NEW_BRANCH, branch_name
        );
        self.run_in_dir(cmd).await
    }
}
