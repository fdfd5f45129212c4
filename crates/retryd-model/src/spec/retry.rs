use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::{
    domain::{DEFAULT_ATTEMPT_TIMEOUT_MS, Label, TimeoutMs},
    error::{ModelError, ModelResult},
    strategy::{BackoffStrategy, JitterStrategy},
};

/// Declarative specification of a retried operation.
///
/// `RetrySpec` describes *how* an operation is retried, never *what* the operation is:
/// the closure itself is always supplied in code.
///
/// Fields cover:
/// - diagnostics (`label`)
/// - per-attempt bound (`attempt_timeout_ms`)
/// - retry decision and delay shape (`backoff`, `jitter`)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct RetrySpec {
    /// Name of the operation, used in per-attempt log lines.
    pub label: Label,
    /// Deadline for a single attempt in milliseconds.
    ///
    /// Missing field means [`DEFAULT_ATTEMPT_TIMEOUT_MS`]; an explicit `null` disables the deadline.
    #[serde(default = "default_attempt_timeout")]
    pub attempt_timeout_ms: Option<TimeoutMs>,
    /// Decides whether to retry and how long to wait.
    pub backoff: BackoffStrategy,
    /// Randomization applied on top of the backoff delay.
    #[serde(default)]
    pub jitter: JitterStrategy,
}

fn default_attempt_timeout() -> Option<TimeoutMs> {
    Some(DEFAULT_ATTEMPT_TIMEOUT_MS)
}

impl RetrySpec {
    /// Create a spec with the default attempt timeout and no jitter.
    pub fn new(label: impl Into<Label>, backoff: BackoffStrategy) -> Self {
        Self {
            label: label.into(),
            attempt_timeout_ms: default_attempt_timeout(),
            backoff,
            jitter: JitterStrategy::None,
        }
    }

    /// Validate the spec before it is turned into a retrier.
    ///
    /// Rules:
    /// - `label` is not empty or whitespace-only;
    /// - `attemptTimeoutMs`, when set, is greater than zero;
    /// - `backoff` passes [`BackoffStrategy::validate`].
    pub fn validate(&self) -> ModelResult<()> {
        if self.label.trim().is_empty() {
            return Err(ModelError::Invalid("retry label is empty".into()));
        }
        if self.attempt_timeout_ms == Some(0) {
            return Err(ModelError::Invalid(
                "attemptTimeoutMs must be greater than zero (use null to disable)".into(),
            ));
        }
        self.backoff.validate()
    }
}
