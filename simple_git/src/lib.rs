/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! # simple-git
//!
//! Shorter commands for the most common `git` workflow: create a branch, stage some
//! files, commit, and push to the remote tracking branch.
//!
//! ```text
//! simple-git create fix login bug          # git checkout -b fix-login-bug
//! simple-git push -m "fix" --files "a b"   # git add a b; git commit -m fix; git push
//! simple-git push-all -m "wip"             # git add .; git commit -m wip; git push
//! simple-git push                          # push commits that are already made
//! simple-git --version
//! ```
//!
//! When the current branch has no upstream yet, `push` and `push-all` run
//! `git push -u origin HEAD` to create it.
//!
//! # Exit codes
//!
//! - `0` on success (including when there is nothing to push).
//! - `1` for usage errors, eg: `--files` or `-i` w/out `-m`.
//! - git's own exit code when a git command fails.
//!
//! # Layout
//!
//! - [`commands`]: one module per subcommand, all written against an [`AppContext`].
//! - [`git`]: the version control adapter, ie: the [`VersionControl`] seam, the real
//!   [`GitCli`], and the push state machine in [`push_to_remote()`].
//! - [`prompt`]: reading (and editing) the commit message on the terminal.
//! - [`log_support`]: opt in file logging via [`tracing`], enabled w/ `-l`.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::redundant_closure)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::cast_sign_loss)]
#![warn(clippy::cast_lossless)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::must_use_candidate)]
#![warn(clippy::items_after_statements)]
#![warn(clippy::needless_return)]
#![warn(clippy::redundant_else)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::ignored_unit_patterns)]
#![warn(clippy::match_wildcard_for_single_variants)]
#![warn(clippy::default_trait_access)]
#![warn(clippy::map_unwrap_or)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unused_self)]
#![warn(clippy::manual_let_else)]
#![warn(clippy::if_not_else)]
#![warn(clippy::unnecessary_wraps)]
#![warn(clippy::single_match_else)]
#![warn(clippy::return_self_not_must_use)]

// Attach sources.
pub mod clap_config;
pub mod commands;
pub mod common;
pub mod error;
pub mod git;
pub mod log_support;
pub mod prompt;
pub mod script;
pub mod ui_str;

#[cfg(test)]
pub mod test_fixtures;

// Re-export.
pub use clap_config::*;
pub use commands::*;
pub use common::*;
pub use error::*;
pub use git::*;
pub use log_support::*;
pub use prompt::*;
pub use script::*;
