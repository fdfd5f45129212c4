use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "schema")]
use schemars::JsonSchema;

/// Discriminant of a [`super::BackoffStrategy`] without its parameters.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub enum StrategyKind {
    /// Constant delay between attempts.
    Fixed,
    /// Delay doubles after every failed attempt.
    #[default]
    Exponential,
}

impl StrategyKind {
    /// Returns the kind as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Fixed => "fixed",
            StrategyKind::Exponential => "exponential",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_serde_name() {
        for kind in [StrategyKind::Fixed, StrategyKind::Exponential] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }

    #[test]
    fn default_is_exponential() {
        assert_eq!(StrategyKind::default(), StrategyKind::Exponential);
    }
}
