use std::fmt;

use tracing_appender::non_blocking::WorkerGuard;

/// Lifetime handle of the installed logger.
///
/// Dropping the guard flushes every record still queued for the background writer.
/// Journald output is written synchronously and holds no worker.
#[must_use = "dropping the guard immediately stops the background log writer"]
pub struct LoggerGuard {
    worker: Option<WorkerGuard>,
}

impl LoggerGuard {
    pub(crate) fn buffered(worker: WorkerGuard) -> Self {
        Self {
            worker: Some(worker),
        }
    }

    pub(crate) fn unbuffered() -> Self {
        Self { worker: None }
    }

    /// Returns `true` if records go through a background writer.
    pub fn is_buffered(&self) -> bool {
        self.worker.is_some()
    }

    /// Drain queued records and stop the background writer.
    pub fn shutdown(self) {
        drop(self);
    }
}

impl fmt::Debug for LoggerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerGuard")
            .field("buffered", &self.is_buffered())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbuffered_guard_has_no_worker() {
        let guard = LoggerGuard::unbuffered();
        assert!(!guard.is_buffered());
        assert_eq!(format!("{guard:?}"), "LoggerGuard { buffered: false }");
        guard.shutdown();
    }

    #[test]
    fn buffered_guard_flushes_on_shutdown() {
        let (writer, worker) = tracing_appender::non_blocking(std::io::sink());
        let guard = LoggerGuard::buffered(worker);
        assert!(guard.is_buffered());

        drop(writer);
        guard.shutdown();
    }
}
