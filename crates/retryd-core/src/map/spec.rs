use std::time::Duration;

use retryd_model::{ModelResult, RetrySpec};
use tracing::trace;

use super::to_jittered_strategy;
use crate::{retry::Retrier, strategy::StrategyHandle};

/// Validate `spec` and build a [`Retrier`] from it.
///
/// The retrier uses the tracing observer; swap it with [`Retrier::with_observer`].
/// `spec.label` is not stored: pass it to [`Retrier::run`] at the call site.
pub fn to_retrier(spec: &RetrySpec) -> ModelResult<Retrier<StrategyHandle>> {
    spec.validate()?;
    trace!(
        label = %spec.label,
        kind = %spec.backoff.kind(),
        max_retries = spec.backoff.max_retries(),
        attempt_timeout_ms = ?spec.attempt_timeout_ms,
        jitter = ?spec.jitter,
        "retry spec resolved"
    );

    let strategy = to_jittered_strategy(&spec.backoff, spec.jitter);
    Ok(Retrier::new(strategy)
        .with_attempt_timeout(spec.attempt_timeout_ms.map(Duration::from_millis)))
}

#[cfg(test)]
mod tests {
    use retryd_model::{BackoffStrategy, ModelError};
    use tokio_util::sync::CancellationToken;

    use super::*;
    use crate::{RetryError, observer::noop_observer};

    #[test]
    fn builds_from_json() {
        let json = r#"{
            "label": "fetch",
            "attemptTimeoutMs": 1500,
            "backoff": {"fixed": {"maxRetries": 2, "delayMs": 10}}
        }"#;
        let spec: RetrySpec = serde_json::from_str(json).unwrap();
        let retrier = to_retrier(&spec).unwrap();

        assert_eq!(retrier.attempt_timeout(), Some(Duration::from_millis(1500)));
    }

    #[test]
    fn invalid_spec_is_rejected() {
        let mut spec = RetrySpec::new(
            "fetch",
            BackoffStrategy::Fixed {
                max_retries: 1,
                delay_ms: 1,
            },
        );
        spec.attempt_timeout_ms = Some(0);

        assert!(matches!(to_retrier(&spec), Err(ModelError::Invalid(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn mapped_retrier_honours_max_retries() {
        let spec = RetrySpec::new(
            "count",
            BackoffStrategy::Exponential {
                max_retries: 2,
                base_delay_ms: 5,
                max_delay_ms: None,
            },
        );
        let retrier = to_retrier(&spec).unwrap().with_observer(noop_observer());
        let ctx = CancellationToken::new();

        let mut calls = 0u32;
        let out = retrier
            .run(&ctx, &spec.label, || {
                calls += 1;
                async { Err::<(), _>(std::io::Error::other("nope")) }
            })
            .await;

        assert!(matches!(out, Err(RetryError::Operation(_))));
        assert_eq!(calls, 3);
    }
}
