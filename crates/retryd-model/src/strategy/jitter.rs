use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

/// Controls how random jitter is applied to backoff delays.
///
/// Jitter spreads retries over time so that many callers failing together
/// do not come back in lockstep.
///
/// Strategies:
/// - `None`: No jitter. Delays are exactly what the backoff strategy returns.
/// - `Full`: Picks a random delay in `[0, base]`.
/// - `Equal`: Keeps half of the delay and randomizes the other half: `base/2 + rand[0, base/2]`.
///
/// The math lives in the core crate. This enum only selects the policy.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub enum JitterStrategy {
    /// No randomness applied.
    #[default]
    None,
    /// Full jitter: delay is uniformly sampled from `[0, base]`.
    ///
    /// This is the most collision-resistant strategy.
    Full,
    /// Equal jitter: delay is sampled from `[base / 2, base]`.
    Equal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_none() {
        assert_eq!(JitterStrategy::default(), JitterStrategy::None);
    }

    #[test]
    fn serde_uses_camel_case_names() {
        assert_eq!(serde_json::to_string(&JitterStrategy::Equal).unwrap(), r#""equal""#);
        let parsed: JitterStrategy = serde_json::from_str(r#""full""#).unwrap();
        assert_eq!(parsed, JitterStrategy::Full);
        assert!(serde_json::from_str::<JitterStrategy>(r#""decorrelated""#).is_err());
    }
}
