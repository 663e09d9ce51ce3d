/*
 *   Copyright (c) 2024-2025 R3BL LLC
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

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(bin_name = "simple-git")]
#[command(about = "Shorter commands for the branch, commit, and push workflow")]
#[command(next_line_help = true)]
// `--version` is handled by hand, see [`is_version_requested()`].
#[command(disable_version_flag = true)]
// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\n\nUSAGE:\n  simple-git [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
// More info: <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CLIArg {
    /// `None` when only global options (eg: `--version`) were passed. `main()` reports a
    /// missing subcommand in that case.
    #[command(subcommand)]
    pub command: Option<CLICommand>,

    // Never read: `is_version_requested()` acts on the flag before clap parses. Declared
    // so that `--help` lists it, and so clap accepts it w/out a subcommand.
    #[arg(long, short = 'V', help = "Print the version and exit")]
    pub version: bool,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

/// Returns `true` if `--version` (or `-V`) appears before the subcommand. This is
/// checked before clap parses anything, so that `simple-git --version push-all` prints
/// the version instead of complaining about the missing `-m`.
pub fn is_version_requested<S: AsRef<str>>(args: impl IntoIterator<Item = S>) -> bool {
    args.into_iter()
        .skip(1)
        .map_while(|arg| {
            let arg = arg.as_ref();
            arg.starts_with('-').then(|| arg == "--version" || arg == "-V")
        })
        .any(|is_version| is_version)
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum CLICommand {
    #[clap(
        about = "🌱 Create a new branch and switch to it\n💡 Eg: `simple-git create fix login bug` creates `fix-login-bug`"
    )]
    Create {
        #[arg(help = "Name of the branch, whitespace is replaced w/ `-`")]
        name: String,
    },

    #[clap(
        about = "🚀 Commit (optionally staging files) and push to the remote tracking branch\n💡 Eg: `simple-git push -m \"fix typos\" --files \"a.rs b.rs\"`"
    )]
    Push {
        #[arg(
            long,
            short = 'i',
            help = "Edit the commit message before committing (requires `-m`)"
        )]
        interactive: bool,

        #[arg(
            long,
            short = 'm',
            default_value = "",
            allow_hyphen_values = true,
            help = "Commit message, without it nothing is committed and only the existing commits are pushed"
        )]
        message: String,

        #[arg(
            long,
            default_value = "",
            allow_hyphen_values = true,
            help = "Whitespace separated list of files to stage (requires `-m`)"
        )]
        files: String,
    },

    #[clap(
        about = "📦 Stage all changes, commit, and push to the remote tracking branch\n💡 Eg: `simple-git push-all -m \"wip\"`"
    )]
    PushAll {
        #[arg(
            long,
            short = 'i',
            help = "Edit the commit message before committing"
        )]
        interactive: bool,

        #[arg(
            long,
            short = 'm',
            required = true,
            allow_hyphen_values = true,
            help = "Commit message"
        )]
        message: String,
    },
}
