mod domain;
pub use domain::{DEFAULT_ATTEMPT_TIMEOUT_MS, Label, TimeoutMs};

mod error;
pub use error::{ModelError, ModelResult};

mod spec;
pub use spec::RetrySpec;

mod strategy;
pub use strategy::{BackoffStrategy, JitterStrategy, StrategyKind};
