use std::{sync::Arc, time::Duration};

use retryd_model::{BackoffStrategy, JitterStrategy};

use crate::strategy::{
    ExponentialBackoffStrategy, FixedDelayStrategy, JitteredStrategy, StrategyHandle,
};

pub fn to_strategy(s: &BackoffStrategy) -> StrategyHandle {
    match *s {
        BackoffStrategy::Fixed {
            max_retries,
            delay_ms,
        } => Arc::new(FixedDelayStrategy::new(
            max_retries,
            Duration::from_millis(delay_ms),
        )),
        BackoffStrategy::Exponential {
            max_retries,
            base_delay_ms,
            max_delay_ms,
        } => Arc::new(ExponentialBackoffStrategy {
            max_retries,
            base_delay: Duration::from_millis(base_delay_ms),
            max_delay: max_delay_ms.map(Duration::from_millis),
        }),
    }
}

/// Same as [`to_strategy`], wrapped in [`JitteredStrategy`] unless `jitter` is `None`.
pub fn to_jittered_strategy(s: &BackoffStrategy, jitter: JitterStrategy) -> StrategyHandle {
    let inner = to_strategy(s);
    match jitter {
        JitterStrategy::None => inner,
        other => Arc::new(JitteredStrategy::new(inner, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{RetryDecision, tests::Transient};

    #[test]
    fn maps_fixed() {
        let s = to_strategy(&BackoffStrategy::Fixed {
            max_retries: 2,
            delay_ms: 150,
        });

        assert_eq!(
            s.should_retry(1, &Transient),
            RetryDecision::Retry(Duration::from_millis(150))
        );
        assert_eq!(s.should_retry(2, &Transient), RetryDecision::Stop);
    }

    #[test]
    fn maps_exponential_with_cap() {
        let s = to_strategy(&BackoffStrategy::Exponential {
            max_retries: 6,
            base_delay_ms: 100,
            max_delay_ms: Some(300),
        });

        assert_eq!(
            s.should_retry(1, &Transient),
            RetryDecision::Retry(Duration::from_millis(200))
        );
        assert_eq!(
            s.should_retry(5, &Transient),
            RetryDecision::Retry(Duration::from_millis(300))
        );
        assert_eq!(s.should_retry(6, &Transient), RetryDecision::Stop);
    }

    #[test]
    fn jitter_keeps_bound_and_ceiling() {
        let s = to_jittered_strategy(
            &BackoffStrategy::Fixed {
                max_retries: 1,
                delay_ms: 80,
            },
            JitterStrategy::Full,
        );

        assert!(s.should_retry(0, &Transient).delay() <= Duration::from_millis(80));
        assert_eq!(s.should_retry(1, &Transient), RetryDecision::Stop);
    }
}
