use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

use crate::logger::{
    error::{LoggerError, LoggerResult},
    object::{LoggerFormat, LoggerLevel, LoggerTimeZone},
};

/// Default capacity (in lines) of the background writer queue.
pub const DEFAULT_BUFFER_SIZE: usize = 1024;

/// Logger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggerConfig {
    /// Output format.
    pub format: LoggerFormat,
    /// Log level filter expression (e.g., "info", "retryd_core=debug,info").
    pub level: LoggerLevel,
    /// Timezone for timestamps.
    pub tz: LoggerTimeZone,
    /// Whether to include module/target names in log output.
    pub with_targets: bool,
    /// Whether to use colored output.
    pub use_color: bool,
    /// Lines queued for the background writer before new records are dropped.
    pub buffer_size: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            tz: LoggerTimeZone::default(),
            with_targets: true,
            use_color: true,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl LoggerConfig {
    /// Determines whether colored output should be used.
    ///
    /// Color is enabled only if:
    /// 1. `use_color` config is `true` (user hasn't explicitly disabled it), AND
    /// 2. stdout is a terminal (not redirected to a file/pipe)
    ///
    /// Call this during logger initialization, not during config parsing,
    /// so terminal detection reflects the running process.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stdout().is_terminal()
    }

    /// Validate values serde cannot check.
    pub fn validate(&self) -> LoggerResult<()> {
        if self.buffer_size == 0 {
            return Err(LoggerError::InvalidBufferSize(self.buffer_size));
        }
        Ok(())
    }
}
