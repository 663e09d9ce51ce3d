// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommitMessagePrompt, GitCli, Reporter, TerminalPrompt, VersionControl};

/// Everything a command needs to talk to the outside world. It is created once in
/// `main()` and passed down explicitly, so the tests can swap in fakes for git, the
/// terminal prompt, and the user facing output.
#[derive(Debug)]
pub struct AppContext<G: VersionControl, P: CommitMessagePrompt> {
    pub vcs: G,
    pub prompt: P,
    pub reporter: Reporter,
}

impl<G: VersionControl, P: CommitMessagePrompt> AppContext<G, P> {
    pub fn new(vcs: G, prompt: P, reporter: Reporter) -> Self {
        Self {
            vcs,
            prompt,
            reporter,
        }
    }
}

impl AppContext<GitCli, TerminalPrompt> {
    /// Run `git` from the `PATH` in the current working directory, read from the
    /// controlling terminal, and report to `stdout` and `stderr`.
    #[must_use]
    pub fn from_terminal() -> Self {
        Self::new(GitCli::default(), TerminalPrompt, Reporter::stdio())
    }
}
