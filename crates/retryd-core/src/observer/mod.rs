//! Per-attempt observation hooks for the retry loop.
//!
//! The executor reports every failed attempt to an injected [`RetryObserver`].
//! Observers are side-effect sinks only: they cannot influence the retry decision
//! and must return quickly.
mod event;
pub use event::AttemptFailure;

mod noop;
pub use noop::NoopObserver;

mod log;
pub use log::TracingObserver;

use std::sync::Arc;

/// Sink for retry-loop events.
///
/// Implementations are injected via [`crate::Retrier::with_observer`] and shared
/// across every loop run by that retrier.
pub trait RetryObserver: Send + Sync + 'static {
    /// Called once per failed attempt, before the strategy is consulted.
    ///
    /// Not called for successful attempts, timed-out attempts or cancelled attempts.
    fn attempt_failed(&self, event: &AttemptFailure<'_>);
}

/// Shared handle to an observer.
pub type ObserverHandle = Arc<dyn RetryObserver>;

/// Observer that logs a warning per failed attempt through `tracing`.
#[inline]
pub fn tracing_observer() -> ObserverHandle {
    Arc::new(TracingObserver)
}

/// Observer that drops every event.
#[inline]
pub fn noop_observer() -> ObserverHandle {
    Arc::new(NoopObserver)
}
