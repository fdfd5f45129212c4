use std::{error::Error, time::Duration};

use super::{RetryDecision, RetryStrategy};

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Retries up to `max_retries` times; the delay before retry `n` is `base_delay * 2^n`.
///
/// Growth saturates at [`Duration::MAX`] instead of overflowing, and `max_delay`
/// (when set) caps every delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExponentialBackoffStrategy {
    /// Number of retries after the first attempt.
    pub max_retries: u32,
    /// Delay before the first retry.
    pub base_delay: Duration,
    /// Upper bound for a single delay.
    pub max_delay: Option<Duration>,
}

impl ExponentialBackoffStrategy {
    /// Uncapped exponential backoff.
    pub const fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
            max_delay: None,
        }
    }

    /// Cap every delay at `max_delay`.
    pub const fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = Some(max_delay);
        self
    }

    /// Delay for the given attempt, ignoring the retry bound.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let delay = scale_pow2(self.base_delay, attempt);
        match self.max_delay {
            Some(cap) => delay.min(cap),
            None => delay,
        }
    }
}

impl RetryStrategy for ExponentialBackoffStrategy {
    fn should_retry(&self, attempt: u32, _err: &(dyn Error + 'static)) -> RetryDecision {
        if attempt < self.max_retries {
            RetryDecision::Retry(self.delay_for(attempt))
        } else {
            RetryDecision::Stop
        }
    }
}

/// `base * 2^exp`, saturating at `Duration::MAX`.
fn scale_pow2(base: Duration, exp: u32) -> Duration {
    let nanos = base.as_nanos();
    if nanos == 0 {
        return Duration::ZERO;
    }
    if exp > nanos.leading_zeros() {
        return Duration::MAX;
    }
    let scaled = nanos << exp;

    match u64::try_from(scaled / NANOS_PER_SEC) {
        Ok(secs) => Duration::new(secs, (scaled % NANOS_PER_SEC) as u32),
        Err(_) => Duration::MAX,
    }
}
