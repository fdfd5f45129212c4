//! Common model-level constants.

/// Per-attempt deadline applied when a [`crate::RetrySpec`] does not set one.
///
/// Every attempt races against this deadline; whichever finishes first wins.
pub const DEFAULT_ATTEMPT_TIMEOUT_MS: u64 = 10_000;
