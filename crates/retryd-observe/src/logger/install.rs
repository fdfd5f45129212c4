use tracing::Subscriber;
use tracing_appender::non_blocking::{NonBlocking, NonBlockingBuilder};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::logger::{
    config::LoggerConfig,
    error::{LoggerError, LoggerResult},
    guard::LoggerGuard,
    object::LoggerRfc3339,
};

/// Initializes text logger.
pub fn logger_text(cfg: &LoggerConfig) -> LoggerResult<LoggerGuard> {
    let (writer, guard) = stdout_writer(cfg);
    let filter = cfg.level.to_env_filter();
    let fmt_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(cfg.should_use_color())
        .with_target(cfg.with_targets)
        .with_timer(LoggerRfc3339::new(cfg.tz));

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);
    init_subscriber(subscriber)?;
    Ok(guard)
}

/// Initializes JSON (structured) logger.
pub fn logger_json(cfg: &LoggerConfig) -> LoggerResult<LoggerGuard> {
    let (writer, guard) = stdout_writer(cfg);
    let filter = cfg.level.to_env_filter();
    let fmt_layer = fmt::layer()
        .json()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(cfg.with_targets)
        .with_timer(LoggerRfc3339::new(cfg.tz));

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);
    init_subscriber(subscriber)?;
    Ok(guard)
}

/// Initializes journald logger (Linux only).
#[cfg(target_os = "linux")]
pub fn logger_journald(cfg: &LoggerConfig) -> LoggerResult<LoggerGuard> {
    let filter = cfg.level.to_env_filter();
    let journald =
        tracing_journald::layer().map_err(|e| LoggerError::JournaldInitFailed(e.to_string()))?;

    let subscriber = tracing_subscriber::registry().with(filter).with(journald);
    init_subscriber(subscriber)?;
    Ok(LoggerGuard::unbuffered())
}

/// Stub for journald on non-Linux platforms.
#[cfg(not(target_os = "linux"))]
pub fn logger_journald(_cfg: &LoggerConfig) -> LoggerResult<LoggerGuard> {
    Err(LoggerError::JournaldNotSupported)
}

/// Bounded, lossy stdout writer drained by a background thread.
fn stdout_writer(cfg: &LoggerConfig) -> (NonBlocking, LoggerGuard) {
    let (writer, worker) = NonBlockingBuilder::default()
        .buffered_lines_limit(cfg.buffer_size)
        .lossy(true)
        .thread_name("retryd-log-writer")
        .finish(std::io::stdout());
    (writer, LoggerGuard::buffered(worker))
}

/// Installs the subscriber as the global default.
fn init_subscriber<S>(subscriber: S) -> LoggerResult<()>
where
    S: Subscriber + Send + Sync + 'static,
{
    subscriber
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::object::LoggerFormat;

    #[test]
    #[cfg(not(target_os = "linux"))]
    fn init_journald_returns_error_when_not_supported() {
        let config = LoggerConfig {
            format: LoggerFormat::Journald,
            ..Default::default()
        };

        let result = logger_journald(&config);
        assert!(matches!(result, Err(LoggerError::JournaldNotSupported)));
    }

    #[test]
    fn stdout_writer_is_buffered() {
        let config = LoggerConfig {
            format: LoggerFormat::Json,
            buffer_size: 20,
            ..Default::default()
        };

        let (_writer, guard) = stdout_writer(&config);
        assert!(guard.is_buffered());
    }

    #[test]
    fn second_install_is_rejected() {
        let config = LoggerConfig {
            format: LoggerFormat::Text,
            use_color: false,
            ..Default::default()
        };

        let first = logger_text(&config);
        let second = logger_json(&config);

        assert!(first.is_ok() || matches!(first, Err(LoggerError::AlreadyInitialized)));
        assert!(matches!(second, Err(LoggerError::AlreadyInitialized)));
    }
}
