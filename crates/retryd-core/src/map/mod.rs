//! Mapping from declarative `retryd-model` values to runtime strategies and retriers.
mod backoff;
mod spec;

pub use backoff::{to_jittered_strategy, to_strategy};
pub use spec::to_retrier;
