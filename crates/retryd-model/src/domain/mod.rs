mod constants;
pub use constants::DEFAULT_ATTEMPT_TIMEOUT_MS;

/// Human-readable name of the operation being retried.
///
/// Rendered into every per-attempt log line as `Attempt {n} to {label}`.
pub type Label = String;

/// Timeout value in milliseconds.
///
/// Used in retry specifications where an explicit per-attempt time limit is required.
pub type TimeoutMs = u64;
