// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

pub const GIT_PROGRAM: &str = "git";

pub mod git_command_names {
    pub const GIT_CMD_ADD: &str = "add";
    pub const GIT_CMD_COMMIT: &str = "commit";
    pub const GIT_CMD_PUSH: &str = "push";
    pub const GIT_CMD_STATUS: &str = "status";
    pub const GIT_CMD_LOG: &str = "log";
    pub const GIT_CMD_CHECKOUT: &str = "checkout";
}

pub mod git_command_args {
    pub const GIT_ARG_MESSAGE: &str = "-m";
    pub const GIT_ARG_NEW_BRANCH: &str = "-b";
    pub const GIT_ARG_SET_UPSTREAM: &str = "-u";
    pub const GIT_ARG_HEAD: &str = "HEAD";
    pub const GIT_ARG_STATUS_SHORT_BRANCH: &str = "-sb";
    pub const GIT_ARG_BRANCHES: &str = "--branches";
    pub const GIT_ARG_NOT: &str = "--not";
    pub const GIT_ARG_REMOTES: &str = "--remotes";
    pub const GIT_ARG_ALL_CHANGES: &str = ".";
}

/// The only remote that `simple-git` knows about.
pub const REMOTE_NAME: &str = "origin";
