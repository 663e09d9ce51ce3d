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

use std::process::ExitCode;

use clap::{CommandFactory, Parser, error::ErrorKind};
use simple_git::{AppContext, CLIArg, CLICommand, is_version_requested,
                 try_initialize_logging_global, try_run_command, ui_str};

#[tokio::main]
async fn main() -> ExitCode {
    // The version flag wins over everything else on the command line, including
    // subcommands that would otherwise fail to parse.
    let args = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    if is_version_requested(args) {
        println!("{}", ui_str::version_message(env!("CARGO_PKG_VERSION")));
        return ExitCode::SUCCESS;
    }

    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    enable_logging.then(|| {
        try_initialize_logging_global(enable_logging).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    let Some(command) = cli_arg.command else {
        CLIArg::command()
            .error(
                ErrorKind::MissingSubcommand,
                "a command is required: `create`, `push`, or `push-all`",
            )
            .exit();
    };

    let exit_code = launch_simple_git(command).await;

    enable_logging.then(|| {
        tracing::debug!(message = "Stop logging...", exit_code = ?exit_code);
    });

    exit_code
}

async fn launch_simple_git(command: CLICommand) -> ExitCode {
    let mut context = AppContext::from_terminal();
    let res = try_run_command(&mut context, command).await;
    match res {
        // Command ran successfully.
        Ok(details) => {
            // % is Display, ? is Debug.
            tracing::debug!(message = "Command ran successfully", details = %details);
            ExitCode::SUCCESS
        }
        // Handle usage errors and git failures here.
        Err(error) => {
            // % is Display, ? is Debug.
            tracing::error!(
                message = "Could not run simple-git due to the following problem",
                error = ?error
            );
            context
                .reporter
                .error(ui_str::unrecoverable_error_message(&error));
            ExitCode::from(error.exit_code())
        }
    }
}
