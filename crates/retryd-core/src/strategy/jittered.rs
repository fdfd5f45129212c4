use std::{error::Error, time::Duration};

use rand::Rng;
use retryd_model::JitterStrategy;

use super::{RetryDecision, RetryStrategy};

/// Wraps another strategy and randomizes the delays it returns.
///
/// The stop decision always comes from the inner strategy; jitter only ever shortens a delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JitteredStrategy<S> {
    inner: S,
    jitter: JitterStrategy,
}

impl<S> JitteredStrategy<S> {
    pub fn new(inner: S, jitter: JitterStrategy) -> Self {
        Self { inner, jitter }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn jitter(&self) -> JitterStrategy {
        self.jitter
    }
}

impl<S: RetryStrategy> RetryStrategy for JitteredStrategy<S> {
    fn should_retry(&self, attempt: u32, err: &(dyn Error + 'static)) -> RetryDecision {
        self.inner
            .should_retry(attempt, err)
            .map_delay(|d| apply_jitter(self.jitter, d))
    }
}

fn apply_jitter(jitter: JitterStrategy, base: Duration) -> Duration {
    match jitter {
        JitterStrategy::None => base,
        JitterStrategy::Full => scale(base, rand::thread_rng().gen_range(0.0..=1.0)),
        JitterStrategy::Equal => {
            let half = base / 2;
            let spread = scale(base - half, rand::thread_rng().gen_range(0.0..=1.0));
            half.saturating_add(spread)
        }
    }
}

/// `d * factor` for `factor` in `[0, 1]`, never exceeding `d`.
fn scale(d: Duration, factor: f64) -> Duration {
    Duration::try_from_secs_f64(d.as_secs_f64() * factor)
        .unwrap_or(d)
        .min(d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{ExponentialBackoffStrategy, FixedDelayStrategy, tests::Transient};

    const SAMPLES: usize = 500;

    #[test]
    fn none_is_passthrough() {
        let s = JitteredStrategy::new(
            ExponentialBackoffStrategy::new(3, Duration::from_millis(100)),
            JitterStrategy::None,
        );
        assert_eq!(
            s.should_retry(2, &Transient),
            RetryDecision::Retry(Duration::from_millis(400))
        );
    }

    #[test]
    fn full_stays_within_zero_and_base() {
        let base = Duration::from_millis(300);
        let s = JitteredStrategy::new(FixedDelayStrategy::new(1, base), JitterStrategy::Full);

        for _ in 0..SAMPLES {
            let d = s.should_retry(0, &Transient).delay();
            assert!(d <= base, "{d:?} > {base:?}");
        }
    }

    #[test]
    fn equal_keeps_at_least_half() {
        let base = Duration::from_millis(300);
        let s = JitteredStrategy::new(FixedDelayStrategy::new(1, base), JitterStrategy::Equal);

        for _ in 0..SAMPLES {
            let d = s.should_retry(0, &Transient).delay();
            assert!(d >= base / 2 && d <= base, "{d:?} outside [{:?}, {base:?}]", base / 2);
        }
    }

    #[test]
    fn stop_is_not_jittered() {
        let s = JitteredStrategy::new(
            FixedDelayStrategy::new(2, Duration::from_secs(1)),
            JitterStrategy::Full,
        );
        assert_eq!(s.should_retry(2, &Transient), RetryDecision::Stop);
    }

    #[test]
    fn saturated_delay_does_not_panic() {
        let s = JitteredStrategy::new(
            ExponentialBackoffStrategy::new(u32::MAX, Duration::from_secs(1)),
            JitterStrategy::Equal,
        );
        let d = s.should_retry(500, &Transient).delay();
        assert!(d >= Duration::MAX / 2);
    }
}
