use tracing::warn;

use super::{AttemptFailure, RetryObserver};

/// Logs `Attempt {n} to {label}` at warn level with the error text as the `error` field.
///
/// Delivery is whatever the installed `tracing` subscriber does; with the
/// `retryd-observe` logger the record is queued to a background writer and never blocks
/// on I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RetryObserver for TracingObserver {
    fn attempt_failed(&self, event: &AttemptFailure<'_>) {
        warn!(error = %event.error, "{}", event.message());
    }
}
