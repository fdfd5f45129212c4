pub mod error;
pub mod map;
pub mod observer;
pub mod retry;
pub mod strategy;

pub use error::RetryError;
pub use observer::{
    AttemptFailure, NoopObserver, ObserverHandle, RetryObserver, TracingObserver, noop_observer,
    tracing_observer,
};
pub use retry::{DEFAULT_ATTEMPT_TIMEOUT, Retrier, retry};
pub use strategy::{
    ExponentialBackoffStrategy, FixedDelayStrategy, JitteredStrategy, RetryDecision,
    RetryStrategy, StrategyHandle,
};

pub mod prelude {
    pub use crate::error::RetryError;
    pub use crate::observer::{ObserverHandle, RetryObserver};
    pub use crate::retry::{Retrier, retry};
    pub use crate::strategy::{
        ExponentialBackoffStrategy, FixedDelayStrategy, RetryDecision, RetryStrategy,
    };
    pub use tokio_util::sync::CancellationToken;
}
