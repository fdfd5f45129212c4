use std::{future::Future, time::Duration};

use tokio_util::sync::CancellationToken;

/// How a single attempt ended.
pub(crate) enum AttemptOutcome<T, E> {
    /// The operation resolved on its own.
    Finished(Result<T, E>),
    /// The per-attempt deadline elapsed first.
    TimedOut(Duration),
    /// The caller's token fired first.
    Cancelled,
}

/// Drive `fut` until it resolves, the deadline elapses or `ctx` is cancelled.
///
/// Caller cancellation wins ties. The attempt token is cancelled on every exit path,
/// and a losing `fut` is dropped here, so nothing from the attempt outlives this call
/// except work the operation itself detached.
pub(crate) async fn race<Fut, T, E>(
    ctx: &CancellationToken,
    attempt_token: &CancellationToken,
    timeout: Option<Duration>,
    fut: Fut,
) -> AttemptOutcome<T, E>
where
    Fut: Future<Output = Result<T, E>>,
{
    let deadline = async {
        match timeout {
            Some(d) => {
                tokio::time::sleep(d).await;
                d
            }
            None => std::future::pending().await,
        }
    };

    let outcome = tokio::select! {
        biased;
        _ = ctx.cancelled() => AttemptOutcome::Cancelled,
        res = fut => AttemptOutcome::Finished(res),
        d = deadline => AttemptOutcome::TimedOut(d),
    };
    attempt_token.cancel();
    outcome
}

/// Sleep for `delay` unless `ctx` is cancelled first.
///
/// Returns `false` when cancelled.
pub(crate) async fn backoff(ctx: &CancellationToken, delay: Duration) -> bool {
    tokio::select! {
        biased;
        _ = ctx.cancelled() => false,
        _ = tokio::time::sleep(delay) => true,
    }
}
