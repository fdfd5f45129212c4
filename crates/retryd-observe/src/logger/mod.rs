mod config;
mod error;
mod guard;
mod install;
mod object;

pub use config::{DEFAULT_BUFFER_SIZE, LoggerConfig};
pub use error::{LoggerError, LoggerResult};
pub use guard::LoggerGuard;
pub use object::LoggerFormat;
pub use object::LoggerLevel;
pub use object::{LoggerTimeZone, init_local_offset};

/// Initializes the global tracing subscriber with the given configuration.
///
/// Once initialized, all `tracing` macros (`warn!`, `debug!`, etc.) emitted by the retry
/// loop and by the application use this configuration.
///
/// Text and JSON records are handed to a background writer through a bounded queue
/// of [`LoggerConfig::buffer_size`] lines, so logging never blocks a retry loop on I/O.
/// The returned [`LoggerGuard`] owns that writer: keep it alive for the lifetime of the
/// program and drop it (or call [`LoggerGuard::shutdown`]) on exit to drain queued records.
///
/// # Important: Local Timezone
/// For using `LoggerTimeZone::Local`, call [`init_local_offset`]
/// in `main()` before spawning any threads.
///
/// # Examples
/// ```rust
/// use retryd_observe::{LoggerConfig, init_logger};
///
/// fn main() {
///     let config = LoggerConfig::default();
///     let guard = init_logger(&config).expect("Failed to initialize logger");
///
///     tracing::info!("Logger initialized successfully");
///     guard.shutdown();
/// }
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<LoggerGuard> {
    cfg.validate()?;
    match cfg.format {
        LoggerFormat::Text => install::logger_text(cfg),
        LoggerFormat::Json => install::logger_json(cfg),
        LoggerFormat::Journald => install::logger_journald(cfg),
    }
}
