// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Display, Formatter, Result as FmtResult},
          io::Write};

use crate::{CommandOutput, fmt};

/// The user facing side of logging: everything `simple-git` has to say to the person at
/// the terminal goes through here. Diagnostic logging (for the operator) uses
/// [`tracing`] instead, and is only written when `--enable-logging` is passed.
///
/// Writes are best effort, since there is nothing useful to do if the terminal is gone.
pub struct Reporter {
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
}

impl Debug for Reporter {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult { write!(f, "Reporter") }
}

impl Default for Reporter {
    fn default() -> Self { Self::stdio() }
}

impl Reporter {
    /// Info goes to `stdout`, errors go to `stderr`.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(Box::new(std::io::stdout()), Box::new(std::io::stderr()))
    }

    #[must_use]
    pub fn new(out: Box<dyn Write + Send>, err: Box<dyn Write + Send>) -> Self {
        Self { out, err }
    }

    pub fn info(&mut self, message: impl Display) {
        _ = writeln!(self.out, "{message}");
        _ = self.out.flush();
    }

    pub fn error(&mut self, message: impl Display) {
        _ = writeln!(self.err, "{message}");
        _ = self.err.flush();
    }

    /// Echo git's own output (verbatim, dimmed) so the user sees what git said.
    pub fn git_output(&mut self, output: &CommandOutput) {
        let text = output.combined();
        if !text.is_empty() {
            self.info(fmt::dim(text));
        }
    }
}
