use std::{error::Error, time::Duration};

use super::{RetryDecision, RetryStrategy};

/// Retries up to `max_retries` times with the same delay before every retry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedDelayStrategy {
    /// Number of retries after the first attempt.
    pub max_retries: u32,
    /// Delay applied before every retry.
    pub delay: Duration,
}

impl FixedDelayStrategy {
    pub const fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }
}

impl RetryStrategy for FixedDelayStrategy {
    fn should_retry(&self, attempt: u32, _err: &(dyn Error + 'static)) -> RetryDecision {
        if attempt < self.max_retries {
            RetryDecision::Retry(self.delay)
        } else {
            RetryDecision::Stop
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::tests::Transient;

    #[test]
    fn constant_delay_below_bound() {
        let s = FixedDelayStrategy::new(3, Duration::from_millis(250));

        for attempt in 0..3 {
            assert_eq!(
                s.should_retry(attempt, &Transient),
                RetryDecision::Retry(Duration::from_millis(250)),
                "attempt {attempt}"
            );
        }
    }

    #[test]
    fn stops_at_and_after_bound() {
        let s = FixedDelayStrategy::new(3, Duration::from_millis(250));

        for attempt in [3, 4, 100, u32::MAX] {
            let d = s.should_retry(attempt, &Transient);
            assert!(!d.should_retry());
            assert_eq!(d.delay(), Duration::ZERO);
        }
    }

    #[test]
    fn zero_retries_never_retries() {
        let s = FixedDelayStrategy::new(0, Duration::from_secs(1));
        assert_eq!(s.should_retry(0, &Transient), RetryDecision::Stop);
    }
}
