// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Reading the commit message from the terminal. [`CommitMessagePrompt`] is the seam
//! the commands use, and [`TerminalPrompt`] is the real line editor (backed by
//! [`dialoguer`]). When `stdin` is not a terminal (eg: piped input) the line editor
//! can't run, so a plain line is read from `stdin` instead.

use std::{future::Future,
          io::{BufRead, IsTerminal}};

use crate::{SimpleGitError, SimpleGitResult};

pub trait CommitMessagePrompt {
    /// Ask for a line of text, starting w/ an empty line.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleGitError::PromptFailed`] if the terminal can't be read (eg: stdin
    /// was closed).
    fn read_message(
        &self,
        prompt: &str,
    ) -> impl Future<Output = SimpleGitResult<String>> + Send;

    /// Ask for a line of text, pre-filled w/ `prefill` so the user can edit it in place.
    ///
    /// # Errors
    ///
    /// Returns [`SimpleGitError::PromptFailed`] if the terminal can't be read.
    fn edit_message(
        &self,
        prompt: &str,
        prefill: &str,
    ) -> impl Future<Output = SimpleGitResult<String>> + Send;
}

/// Line editing prompt on the controlling terminal. The blocking read runs on tokio's
/// blocking thread pool, and the caller awaits it.
///
/// W/out a terminal on `stdin`, both methods read the next line from `stdin`, and the
/// pre-filled text of [`CommitMessagePrompt::edit_message()`] is not shown.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl CommitMessagePrompt for TerminalPrompt {
    async fn read_message(&self, prompt: &str) -> SimpleGitResult<String> {
        let prompt = prompt.to_string();
        interact_on_blocking_pool(move || {
            if !std::io::stdin().is_terminal() {
                return read_piped_line(&mut std::io::stdin().lock());
            }
            dialoguer::Input::<String>::new()
                .with_prompt(prompt)
                .interact_text()
                .map_err(prompt_failed)
        })
        .await
    }

    async fn edit_message(&self, prompt: &str, prefill: &str) -> SimpleGitResult<String> {
        let prompt = prompt.to_string();
        let prefill = prefill.to_string();
        interact_on_blocking_pool(move || {
            if !std::io::stdin().is_terminal() {
                return read_piped_line(&mut std::io::stdin().lock());
            }
            dialoguer::Input::<String>::new()
                .with_prompt(prompt)
                .with_initial_text(prefill)
                .interact_text()
                .map_err(prompt_failed)
        })
        .await
    }
}

/// Read one line, w/out the line ending. Running out of input is an error, so a closed
/// pipe can't make the reserved message loop spin forever.
///
/// # Errors
///
/// Returns [`SimpleGitError::PromptFailed`] on end of input, or if reading fails.
pub fn read_piped_line(reader: &mut impl BufRead) -> SimpleGitResult<String> {
    let mut line = String::new();
    let bytes_read = reader.read_line(&mut line).map_err(prompt_failed)?;
    if bytes_read == 0 {
        return Err(prompt_failed(std::io::Error::from(
            std::io::ErrorKind::UnexpectedEof,
        )));
    }
    let content_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(content_len);
    Ok(line)
}

fn prompt_failed(
    error: impl Into<Box<dyn std::error::Error + Send + Sync>>,
) -> SimpleGitError {
    SimpleGitError::PromptFailed {
        source: std::io::Error::other(error),
    }
}

async fn interact_on_blocking_pool(
    interact: impl FnOnce() -> SimpleGitResult<String> + Send + 'static,
) -> SimpleGitResult<String> {
    match tokio::task::spawn_blocking(interact).await {
        Ok(res) => res,
        Err(join_error) => Err(prompt_failed(join_error)),
    }
}
