use std::time::Duration;

use thiserror::Error;

/// Terminal failure of a retry loop.
///
/// Exhaustion is not a separate kind: when the strategy stops, the raw error from the
/// last attempt is returned inside [`RetryError::Operation`].
#[derive(Debug, Error)]
pub enum RetryError<E> {
    #[error(transparent)]
    Operation(E),

    #[error("attempt {} exceeded its deadline of {timeout:?}", number(.attempt))]
    AttemptTimedOut { attempt: u32, timeout: Duration },

    #[error("retry cancelled at attempt {}", number(.attempt))]
    Cancelled { attempt: u32 },
}

fn number(attempt: &u32) -> u32 {
    attempt.saturating_add(1)
}

impl<E> RetryError<E> {
    /// Zero-based index of the attempt that ended the loop, if known.
    pub fn attempt(&self) -> Option<u32> {
        match self {
            RetryError::Operation(_) => None,
            RetryError::AttemptTimedOut { attempt, .. } | RetryError::Cancelled { attempt } => {
                Some(*attempt)
            }
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, RetryError::Cancelled { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, RetryError::AttemptTimedOut { .. })
    }

    /// Borrow the operation error, if the loop ended because the strategy stopped.
    pub fn operation_error(&self) -> Option<&E> {
        match self {
            RetryError::Operation(e) => Some(e),
            _ => None,
        }
    }

    /// Take the operation error out, if the loop ended because the strategy stopped.
    pub fn into_operation_error(self) -> Option<E> {
        match self {
            RetryError::Operation(e) => Some(e),
            _ => None,
        }
    }
}
