// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod common_types;
pub mod context;
pub mod create;
pub mod push;
pub mod push_all;

// Re-export.
pub use common_types::*;
pub use context::*;
pub use create::*;
pub use push::*;
pub use push_all::*;

use crate::{CLICommand, CommitMessagePrompt, SimpleGitResult, VersionControl};

/// Run the subcommand the user typed. Every command reports its progress through
/// `context.reporter`, and returns what it did so `main()` can log it.
///
/// # Errors
///
/// Returns whatever error the command ran into. See [`crate::SimpleGitError`].
pub async fn try_run_command<G: VersionControl, P: CommitMessagePrompt>(
    context: &mut AppContext<G, P>,
    command: CLICommand,
) -> SimpleGitResult<CommandRunDetails> {
    match command {
        CLICommand::Create { name } => try_create(context, &name).await,
        CLICommand::Push {
            interactive,
            message,
            files,
        } => {
            let options = PushOptions {
                interactive,
                message,
                files,
            };
            try_push(context, options).await
        }
        CLICommand::PushAll {
            interactive,
            message,
        } => try_push_all(context, interactive, message).await,
    }
}
