//! Retry executor.
//!
//! Runs an operation until it succeeds, the strategy stops, the per-attempt deadline
//! elapses or the caller's [`CancellationToken`] fires:
//!
//! ```text
//! Attempting ──ok──────────────► Succeeded
//!     │ err
//!     ├─ observer.attempt_failed
//!     ├─ strategy: Stop ────────► ExhaustedOrStopped (raw last error)
//!     └─ strategy: Retry(d) ──► AwaitingDelay ──d elapsed──► Attempting (attempt + 1)
//!
//! deadline during Attempting          ──► AttemptTimedOut
//! ctx cancelled in Attempting / Delay ──► Cancelled
//! ```
mod attempt;

use std::{error::Error, future::Future, sync::Arc, time::Duration};

use retryd_model::DEFAULT_ATTEMPT_TIMEOUT_MS;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, trace};

use crate::{
    error::RetryError,
    observer::{AttemptFailure, ObserverHandle, tracing_observer},
    strategy::{RetryDecision, RetryStrategy},
};
use attempt::AttemptOutcome;

/// Deadline applied to every attempt unless overridden.
pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_millis(DEFAULT_ATTEMPT_TIMEOUT_MS);

/// Retry `operation` with `strategy`, a [`DEFAULT_ATTEMPT_TIMEOUT`] per attempt and
/// warn-level logging of every failed attempt.
///
/// # Examples
/// ```no_run
/// use std::time::Duration;
/// use retryd_core::prelude::*;
///
/// # async fn fetch() -> Result<String, std::io::Error> { Ok(String::new()) }
/// # async fn run() -> Result<(), RetryError<std::io::Error>> {
/// let ctx = CancellationToken::new();
/// let strategy = ExponentialBackoffStrategy::new(5, Duration::from_millis(100));
///
/// let body = retry(&ctx, fetch, strategy, "fetch config").await?;
/// # Ok(())
/// # }
/// ```
pub async fn retry<S, F, Fut, T, E>(
    ctx: &CancellationToken,
    operation: F,
    strategy: S,
    label: &str,
) -> Result<T, RetryError<E>>
where
    S: RetryStrategy,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Error + 'static,
{
    Retrier::new(strategy).run(ctx, label, operation).await
}

/// Configured retry executor.
///
/// Holds the strategy, the per-attempt deadline and the observer. A `Retrier` keeps no
/// per-run state, so one instance can drive any number of concurrent loops.
#[derive(Clone)]
pub struct Retrier<S> {
    strategy: S,
    attempt_timeout: Option<Duration>,
    observer: ObserverHandle,
}

impl<S: RetryStrategy> Retrier<S> {
    /// Create a retrier with the default deadline and the tracing observer.
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            attempt_timeout: Some(DEFAULT_ATTEMPT_TIMEOUT),
            observer: tracing_observer(),
        }
    }

    /// Replace the per-attempt deadline; `None` lets attempts run unbounded.
    pub fn with_attempt_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    /// Replace the observer notified about failed attempts.
    pub fn with_observer(mut self, observer: ObserverHandle) -> Self {
        self.observer = observer;
        self
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn attempt_timeout(&self) -> Option<Duration> {
        self.attempt_timeout
    }

    /// Run `operation` until it succeeds or the loop terminates.
    pub async fn run<F, Fut, T, E>(
        &self,
        ctx: &CancellationToken,
        label: &str,
        mut operation: F,
    ) -> Result<T, RetryError<E>>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Error + 'static,
    {
        self.run_with_token(ctx, label, |_| operation()).await
    }

    /// Like [`Retrier::run`], but every attempt receives its own child token.
    ///
    /// The token is cancelled when the attempt ends for any reason, including a timeout
    /// or caller cancellation. Operations that spawn work of their own should watch it so
    /// abandoned attempts stop promptly.
    #[instrument(level = "debug", skip_all, fields(label = %label))]
    pub async fn run_with_token<F, Fut, T, E>(
        &self,
        ctx: &CancellationToken,
        label: &str,
        mut operation: F,
    ) -> Result<T, RetryError<E>>
    where
        F: FnMut(CancellationToken) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Error + 'static,
    {
        let mut attempt: u32 = 0;
        loop {
            if ctx.is_cancelled() {
                debug!(attempt, "cancelled before attempt");
                return Err(RetryError::Cancelled { attempt });
            }
            trace!(attempt, "starting attempt");
            let token = ctx.child_token();
            let fut = operation(token.clone());

            let err = match attempt::race(ctx, &token, self.attempt_timeout, fut).await {
                AttemptOutcome::Finished(Ok(value)) => return Ok(value),
                AttemptOutcome::Finished(Err(err)) => err,
                AttemptOutcome::TimedOut(timeout) => {
                    debug!(attempt, ?timeout, "attempt timed out");
                    return Err(RetryError::AttemptTimedOut { attempt, timeout });
                }
                AttemptOutcome::Cancelled => {
                    debug!(attempt, "cancelled during attempt");
                    return Err(RetryError::Cancelled { attempt });
                }
            };

            self.observer.attempt_failed(&AttemptFailure {
                attempt,
                label,
                error: &err,
            });

            match self.strategy.should_retry(attempt, &err) {
                RetryDecision::Stop => {
                    debug!(attempt, "strategy stopped; returning last error");
                    return Err(RetryError::Operation(err));
                }
                RetryDecision::Retry(delay) => {
                    debug!(attempt, ?delay, "retry scheduled after failure");
                    if !attempt::backoff(ctx, delay).await {
                        debug!(attempt, "cancelled during backoff");
                        return Err(RetryError::Cancelled { attempt });
                    }
                }
            }
            attempt = attempt.saturating_add(1);
        }
    }

    /// Run a synchronous `operation` on tokio's blocking pool, one attempt at a time.
    ///
    /// A blocking closure cannot be interrupted: when an attempt times out or the caller
    /// cancels, the retrier stops waiting and returns, but the closure keeps running on
    /// the blocking pool until it returns by itself. Prefer [`Retrier::run_with_token`]
    /// when the work can observe cancellation.
    pub async fn run_blocking<F, T, E>(
        &self,
        ctx: &CancellationToken,
        label: &str,
        operation: F,
    ) -> Result<T, RetryError<E>>
    where
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
        T: Send + 'static,
        E: Error + Send + 'static,
    {
        let operation = Arc::new(operation);
        self.run(ctx, label, || {
            let operation = Arc::clone(&operation);
            async move {
                match tokio::task::spawn_blocking(move || operation()).await {
                    Ok(res) => res,
                    Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
                    // runtime shutdown; the surrounding loop is being dropped as well
                    Err(_) => std::future::pending().await,
                }
            }
        })
        .await
    }
}
