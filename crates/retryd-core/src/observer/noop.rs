use super::{AttemptFailure, RetryObserver};

/// Observer that compiles to nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RetryObserver for NoopObserver {
    #[inline(always)]
    fn attempt_failed(&self, _: &AttemptFailure<'_>) {}
}
