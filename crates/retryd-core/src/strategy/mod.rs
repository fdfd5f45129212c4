//! Backoff strategies: pure decisions about whether to retry and how long to wait.
//!
//! A strategy is consulted by [`crate::Retrier`] after every failed attempt with the
//! zero-based attempt index and the error of that attempt. Built-in strategies only look
//! at the index; custom ones may downcast the error to decide per failure kind.
use std::{error::Error, sync::Arc, time::Duration};

mod exponential;
pub use exponential::ExponentialBackoffStrategy;

mod fixed;
pub use fixed::FixedDelayStrategy;

mod jittered;
pub use jittered::JitteredStrategy;

/// Outcome of a single strategy consultation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetryDecision {
    /// Sleep for the given delay, then run the next attempt.
    Retry(Duration),
    /// Give up and surface the last error.
    Stop,
}

impl RetryDecision {
    /// `true` for [`RetryDecision::Retry`].
    #[inline]
    pub fn should_retry(&self) -> bool {
        matches!(self, RetryDecision::Retry(_))
    }

    /// Delay before the next attempt; [`Duration::ZERO`] when stopping.
    #[inline]
    pub fn delay(&self) -> Duration {
        match self {
            RetryDecision::Retry(d) => *d,
            RetryDecision::Stop => Duration::ZERO,
        }
    }

    /// Transform the delay of a `Retry` decision, leaving `Stop` untouched.
    #[inline]
    pub fn map_delay(self, f: impl FnOnce(Duration) -> Duration) -> Self {
        match self {
            RetryDecision::Retry(d) => RetryDecision::Retry(f(d)),
            RetryDecision::Stop => RetryDecision::Stop,
        }
    }
}

/// Policy deciding whether a failed attempt is retried and after which delay.
///
/// Implementations must be stateless with respect to a single retry loop: the same
/// instance is shared by concurrent loops, and the executor owns all attempt bookkeeping.
/// Once `attempt` reaches the configured bound a strategy must return [`RetryDecision::Stop`].
pub trait RetryStrategy: Send + Sync {
    /// Decide what happens after attempt `attempt` (zero-based) failed with `err`.
    fn should_retry(&self, attempt: u32, err: &(dyn Error + 'static)) -> RetryDecision;
}

/// Shared, type-erased strategy handle.
///
/// Produced by [`crate::map::to_strategy`] from declarative configuration.
pub type StrategyHandle = Arc<dyn RetryStrategy>;

impl<S: RetryStrategy + ?Sized> RetryStrategy for &S {
    #[inline]
    fn should_retry(&self, attempt: u32, err: &(dyn Error + 'static)) -> RetryDecision {
        (**self).should_retry(attempt, err)
    }
}

impl<S: RetryStrategy + ?Sized> RetryStrategy for Box<S> {
    #[inline]
    fn should_retry(&self, attempt: u32, err: &(dyn Error + 'static)) -> RetryDecision {
        (**self).should_retry(attempt, err)
    }
}

impl<S: RetryStrategy + ?Sized> RetryStrategy for Arc<S> {
    #[inline]
    fn should_retry(&self, attempt: u32, err: &(dyn Error + 'static)) -> RetryDecision {
        (**self).should_retry(attempt, err)
    }
}
