// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Shared test infrastructure: a recording fake for [`VersionControl`], a scripted
//! fake for [`CommitMessagePrompt`], a [`Reporter`] that writes into memory, and a
//! helper that sets up a real git repository in a temp dir.

use std::{collections::VecDeque,
          io::Write,
          path::{Path, PathBuf},
          sync::{Arc, Mutex}};

use miette::IntoDiagnostic;

use crate::{AppContext, CommandOutput, CommitMessagePrompt, Reporter, Run,
            SimpleGitError, SimpleGitResult, VersionControl, command};

// Attach sources.
mod temp_dir;

// Re-export.
pub use temp_dir::*;

/// A [`Write`] implementation that can be cloned, and read back after the writes.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock().unwrap()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}

/// Returns a tuple of (`reporter`, `stdout_buffer`, `stderr_buffer`).
pub fn capture_reporter() -> (Reporter, SharedBuffer, SharedBuffer) {
    let out = SharedBuffer::default();
    let err = SharedBuffer::default();
    let reporter = Reporter::new(Box::new(out.clone()), Box::new(err.clone()));
    (reporter, out, err)
}

/// One invocation of git, as seen by [`FakeGit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCall {
    Add(Vec<String>),
    Commit(String),
    Push,
    PushSetUpstream,
    Status,
    LogUnpushed,
    CheckoutNewBranch(String),
}

const FAKE_COMMIT_LOG: &str = "commit 0123456789abcdef\n\n    fake commit\n";

#[derive(Debug, Default)]
struct FakeGitState {
    calls: Vec<GitCall>,
    committed: bool,
    pushed: bool,
    upstream_created: bool,
}

/// Records every call, and behaves enough like a repository for the commands:
/// - `git log` reports the configured unpushed commits (or a fake one after a commit),
///   and nothing after a push.
/// - `git status` reports the configured header, or the "after upstream push" header
///   once `git push -u origin HEAD` has run.
#[derive(Debug, Default)]
pub struct FakeGit {
    unpushed: String,
    status: String,
    maybe_status_after_upstream_push: Option<String>,
    maybe_failure: Option<(GitCall, i32)>,
    state: Mutex<FakeGitState>,
}

impl FakeGit {
    #[must_use]
    pub fn with_unpushed(mut self, log_output: &str) -> Self {
        self.unpushed = log_output.to_string();
        self
    }

    #[must_use]
    pub fn with_status(mut self, status_output: &str) -> Self {
        self.status = status_output.to_string();
        self
    }

    #[must_use]
    pub fn with_status_after_upstream_push(mut self, status_output: &str) -> Self {
        self.maybe_status_after_upstream_push = Some(status_output.to_string());
        self
    }

    /// The first call w/ the same variant as `call` (arguments are ignored) exits w/
    /// `exit_code`.
    #[must_use]
    pub fn failing_on(mut self, call: GitCall, exit_code: i32) -> Self {
        self.maybe_failure = Some((call, exit_code));
        self
    }

    pub fn calls(&self) -> Vec<GitCall> { self.state.lock().unwrap().calls.clone() }

    fn record(&self, call: GitCall) -> SimpleGitResult<()> {
        self.state.lock().unwrap().calls.push(call.clone());
        match &self.maybe_failure {
            Some((failing_call, exit_code))
                if std::mem::discriminant(failing_call)
                    == std::mem::discriminant(&call) =>
            {
                Err(SimpleGitError::CommandFailed {
                    command: format!("{call:?}"),
                    maybe_exit_code: Some(*exit_code),
                    output: "fatal: fake failure".to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}

impl VersionControl for FakeGit {
    async fn run_add(&self, paths: &[String]) -> SimpleGitResult<CommandOutput> {
        self.record(GitCall::Add(paths.to_vec()))?;
        Ok(CommandOutput::default())
    }

    async fn run_commit(&self, message: &str) -> SimpleGitResult<CommandOutput> {
        self.record(GitCall::Commit(message.to_string()))?;
        self.state.lock().unwrap().committed = true;
        Ok(CommandOutput::from_stdout("[main 0123456] fake commit\n"))
    }

    async fn run_push(&self) -> SimpleGitResult<CommandOutput> {
        self.record(GitCall::Push)?;
        self.state.lock().unwrap().pushed = true;
        Ok(CommandOutput::default())
    }

    async fn run_push_set_upstream(&self) -> SimpleGitResult<CommandOutput> {
        self.record(GitCall::PushSetUpstream)?;
        let mut state = self.state.lock().unwrap();
        state.pushed = true;
        state.upstream_created = true;
        Ok(CommandOutput::default())
    }

    async fn run_status(&self) -> SimpleGitResult<CommandOutput> {
        self.record(GitCall::Status)?;
        let state = self.state.lock().unwrap();
        let status = match (&self.maybe_status_after_upstream_push, state.upstream_created)
        {
            (Some(status_after), true) => status_after.clone(),
            _ => self.status.clone(),
        };
        Ok(CommandOutput::from_stdout(status))
    }

    async fn run_log_unpushed(&self) -> SimpleGitResult<CommandOutput> {
        self.record(GitCall::LogUnpushed)?;
        let state = self.state.lock().unwrap();
        let log = if state.pushed {
            String::new()
        } else if state.committed && self.unpushed.is_empty() {
            FAKE_COMMIT_LOG.to_string()
        } else {
            self.unpushed.clone()
        };
        Ok(CommandOutput::from_stdout(log))
    }

    async fn run_checkout_new_branch(
        &self,
        branch_name: &str,
    ) -> SimpleGitResult<CommandOutput> {
        self.record(GitCall::CheckoutNewBranch(branch_name.to_string()))?;
        Ok(CommandOutput::default())
    }
}

/// One interaction w/ the user, as seen by [`FakePrompt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptCall {
    Read,
    Edit { prefill: String },
}

/// Answers [`CommitMessagePrompt::read_message()`] from a script of lines, and
/// [`CommitMessagePrompt::edit_message()`] w/ a fixed edit (or the unchanged prefill).
#[derive(Debug, Default)]
pub struct FakePrompt {
    lines: Mutex<VecDeque<String>>,
    maybe_edited: Option<String>,
    calls: Mutex<Vec<PromptCall>>,
}

impl FakePrompt {
    #[must_use]
    pub fn with_lines(lines: &[&str]) -> Self {
        Self {
            lines: Mutex::new(lines.iter().map(ToString::to_string).collect()),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_edit(mut self, edited: &str) -> Self {
        self.maybe_edited = Some(edited.to_string());
        self
    }

    pub fn calls(&self) -> Vec<PromptCall> { self.calls.lock().unwrap().clone() }
}

impl CommitMessagePrompt for FakePrompt {
    async fn read_message(&self, _prompt: &str) -> SimpleGitResult<String> {
        self.calls.lock().unwrap().push(PromptCall::Read);
        self.lines.lock().unwrap().pop_front().ok_or_else(|| {
            SimpleGitError::PromptFailed {
                source: std::io::Error::from(std::io::ErrorKind::UnexpectedEof),
            }
        })
    }

    async fn edit_message(&self, _prompt: &str, prefill: &str) -> SimpleGitResult<String> {
        self.calls.lock().unwrap().push(PromptCall::Edit {
            prefill: prefill.to_string(),
        });
        Ok(self
            .maybe_edited
            .clone()
            .unwrap_or_else(|| prefill.to_string()))
    }
}

/// Returns a tuple of (`context`, `stdout_buffer`, `stderr_buffer`).
pub fn fake_context(
    git: FakeGit,
    prompt: FakePrompt,
) -> (AppContext<FakeGit, FakePrompt>, SharedBuffer, SharedBuffer) {
    let (reporter, out, err) = capture_reporter();
    (AppContext::new(git, prompt, reporter), out, err)
}

/// The real git tests are skipped on machines that don't have git on the `PATH`.
pub fn git_is_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|output| output.status.success())
}

pub fn try_write_file(
    folder: &Path,
    file_name: &str,
    content: &str,
) -> miette::Result<PathBuf> {
    let file_path = folder.join(file_name);
    std::fs::write(&file_path, content).into_diagnostic()?;
    Ok(file_path)
}

async fn run_git_in(folder: &Path, args: &[&str]) -> miette::Result<()> {
    let mut cmd = command!(program => "git", args => "-C", folder);
    cmd.args(args);
    cmd.run().await?;
    Ok(())
}

/// Set up a basic git repository w/ an initial commit on `main`. Returns a tuple of
/// (`temp_dir_root`, `git_folder`). When the `temp_dir_root` is dropped the folder is
/// removed. The current working directory of the process is never changed, so these
/// tests can run in parallel.
pub async fn helper_setup_git_repo_with_commit() -> miette::Result<(
    /* temp_dir_root: don't drop this immediately using `_` */ TempDir,
    /* git_folder */ PathBuf,
)> {
    let temp_dir_root = try_create_temp_dir()?;
    let git_folder = temp_dir_root.join("git_test_repo");
    std::fs::create_dir_all(&git_folder).into_diagnostic()?;

    run_git_in(&git_folder, &["init", "--initial-branch=main"]).await?;

    // Configure git user for commit. This test assumes an environment where no prior
    // local or global git config has been created.
    run_git_in(&git_folder, &["config", "user.email", "test@example.com"]).await?;
    run_git_in(&git_folder, &["config", "user.name", "Test User"]).await?;

    // Disable commit signing to avoid issues with missing keys in the test environment.
    run_git_in(&git_folder, &["config", "commit.gpgsign", "false"]).await?;

    try_write_file(&git_folder, "initial.txt", "initial content")?;
    run_git_in(&git_folder, &["add", "initial.txt"]).await?;
    run_git_in(&git_folder, &["commit", "-m", "Initial commit"]).await?;

    Ok((temp_dir_root, git_folder))
}
