// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::REMOTE_NAME;

/// Separates the local branch from its upstream in the `git status -sb` header line.
const UPSTREAM_SEPARATOR: &str = "...";

/// Extracts the remote tracking branch (eg: `origin/main`) from the output of `git
/// status -sb`. Returns an empty string when no upstream is configured.
///
/// Only the first line (the `## ` branch header) is scanned, and only the part after
/// the `...` separator, since that is the only place where git prints the upstream.
/// Paths in the rest of the output (eg: a file named `origin.txt`) and local branch
/// names that happen to contain `origin` are never mistaken for the upstream.
///
/// ### Input
/// ```text
/// ## main...origin/main [ahead 1]
///  M src/lib.rs
/// ```
///
/// ### Output
/// ```text
/// origin/main
/// ```
#[must_use]
pub fn parse_remote_branch(status_output: &str) -> &str {
    let header_line = status_output.lines().next().unwrap_or_default();

    let Some((_local_branch, upstream)) = header_line.split_once(UPSTREAM_SEPARATOR)
    else {
        return "";
    };

    let Some(start_index) = upstream.find(REMOTE_NAME) else {
        return "";
    };

    match find_space_or_newline(upstream, start_index) {
        Some(end_index) => &upstream[start_index..end_index],
        None => &upstream[start_index..],
    }
}

/// Returns the index of the nearest space or newline at or after `start_index`, or
/// `None` if there is neither.
#[must_use]
pub fn find_space_or_newline(text: &str, start_index: usize) -> Option<usize> {
    text.get(start_index..)?
        .find([' ', '\n'])
        .map(|offset| start_index + offset)
}
