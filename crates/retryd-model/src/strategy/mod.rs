mod backoff;
pub use backoff::BackoffStrategy;

mod jitter;
pub use jitter::JitterStrategy;

mod kind;
pub use kind::StrategyKind;
