// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result as FmtResult};

use smallvec::SmallVec;

use crate::PushOutcome;

/// Most commands deal w/ a handful of paths, which fit on the stack.
pub type InlinePaths = SmallVec<[String; 4]>;

/// Detailed information about a `push` or `push-all` that has run successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushDetails {
    pub staged_paths: InlinePaths,
    pub maybe_commit_message: Option<String>,
    pub outcome: PushOutcome,
}

/// Information about the command that has run successfully. Eg: `simple-git create` or
/// `simple-git push`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandRunDetails {
    Create { branch_name: String },
    Push(PushDetails),
    PushAll(PushDetails),
}

impl Display for CommandRunDetails {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            CommandRunDetails::Create { branch_name } => {
                write!(f, " Create: {branch_name:?}")
            }
            CommandRunDetails::Push(details) => write!(
                f,
                " Push: {A:?}, {B:?}",
                A = details.maybe_commit_message,
                B = details.outcome
            ),
            CommandRunDetails::PushAll(details) => write!(
                f,
                " PushAll: {A:?}, {B:?}",
                A = details.maybe_commit_message,
                B = details.outcome
            ),
        }
    }
}
