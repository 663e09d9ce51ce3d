// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The version control adapter. Everything that talks to the `git` executable, or
//! interprets its text output, lives here:
//! - [`VersionControl`] is the narrow seam the commands are written against, and
//!   [`GitCli`] is its real implementation.
//! - [`parse_remote_branch()`] extracts the `origin/<branch>` token from `git status
//!   -sb` output.
//! - [`push_to_remote()`] decides between a plain push and one that sets the upstream.

// Skip rustfmt for rest of file to preserve manual organization
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod constants;
mod version_control;
mod git_cli;
mod status_parse;
mod remote_sync;

// Public re-exports (expose stable flat API).
pub use constants::*;
pub use version_control::*;
pub use git_cli::*;
pub use status_parse::*;
pub use remote_sync::*;
