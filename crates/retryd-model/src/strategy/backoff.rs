use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::error::{ModelError, ModelResult};
use crate::strategy::StrategyKind;

/// Declarative backoff configuration.
///
/// JSON shape (externally tagged, camelCase):
/// ```json
/// { "fixed": { "maxRetries": 3, "delayMs": 250 } }
/// { "exponential": { "maxRetries": 5, "baseDelayMs": 100, "maxDelayMs": 5000 } }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum BackoffStrategy {
    /// Same delay before every retry.
    Fixed {
        /// Number of retries after the first attempt.
        max_retries: u32,
        /// Delay between attempts, in milliseconds.
        delay_ms: u64,
    },
    /// Delay doubles after every failed attempt: `base * 2^attempt`.
    Exponential {
        /// Number of retries after the first attempt.
        max_retries: u32,
        /// Delay before the first retry, in milliseconds.
        base_delay_ms: u64,
        /// Optional upper bound on a single delay, in milliseconds.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_delay_ms: Option<u64>,
    },
}

impl BackoffStrategy {
    /// Returns the strategy family.
    pub fn kind(&self) -> StrategyKind {
        match self {
            BackoffStrategy::Fixed { .. } => StrategyKind::Fixed,
            BackoffStrategy::Exponential { .. } => StrategyKind::Exponential,
        }
    }

    /// Number of retries allowed after the first attempt.
    pub fn max_retries(&self) -> u32 {
        match self {
            BackoffStrategy::Fixed { max_retries, .. }
            | BackoffStrategy::Exponential { max_retries, .. } => *max_retries,
        }
    }

    /// Validate parameters that serde cannot check on its own.
    ///
    /// Rules:
    /// - `maxDelayMs`, when set, is not smaller than `baseDelayMs`.
    pub fn validate(&self) -> ModelResult<()> {
        match self {
            BackoffStrategy::Exponential {
                base_delay_ms,
                max_delay_ms: Some(max),
                ..
            } if max < base_delay_ms => Err(ModelError::Invalid(format!(
                "maxDelayMs ({max}) is smaller than baseDelayMs ({base_delay_ms})"
            ))),
            _ => Ok(()),
        }
    }
}
