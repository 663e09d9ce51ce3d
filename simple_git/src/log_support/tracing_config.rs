// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Where the diagnostic logs go, and at which level. Logs never go to the terminal,
/// since `stdout` and `stderr` belong to the messages for the user. Use
/// [`crate::try_initialize_logging_global()`] to install it.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// `File` holds the path to use for the log file. Eg: `/tmp/simple_git.log` or
/// `log.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    File(String),
}

impl TracingConfig {
    /// Logging is disabled.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::OFF,
        }
    }

    /// Log everything at [`LevelFilter::DEBUG`] and above to [`DEFAULT_LOG_FILE_NAME`].
    #[must_use]
    pub fn new_file(maybe_file_path: Option<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                maybe_file_path.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

/// `-l` / `--enable-logging` turns on file logging, otherwise logging is off.
impl From<bool> for TracingConfig {
    fn from(enable_logging: bool) -> Self {
        if enable_logging {
            TracingConfig::new_file(None)
        } else {
            TracingConfig::disabled()
        }
    }
}
