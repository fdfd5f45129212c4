use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::logger::LoggerError;

/// Validated `tracing_subscriber::EnvFilter` expression.
///
/// Stores the raw directive string (e.g. `"info"`, `"retryd_core=debug,warn"`),
/// checked with `EnvFilter::try_new` whenever it is built from config or user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LoggerLevel(String);

impl LoggerLevel {
    /// Parse and validate a filter expression.
    ///
    /// # Examples
    /// ```
    /// use retryd_observe::LoggerLevel;
    ///
    /// let lvl = LoggerLevel::new("retryd_core=debug,info").unwrap();
    /// assert_eq!(lvl.as_str(), "retryd_core=debug,info");
    /// ```
    pub fn new(s: impl Into<String>) -> Result<Self, LoggerError> {
        Self::try_from(s.into())
    }

    /// The directive string exactly as configured.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build an `EnvFilter` from the stored directives.
    ///
    /// The string was validated on construction; should parsing still fail, the filter
    /// falls back to `info`.
    pub fn to_env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(self.as_str()).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

impl Default for LoggerLevel {
    fn default() -> Self {
        Self("info".to_string())
    }
}

impl FromStr for LoggerLevel {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for LoggerLevel {
    type Error = LoggerError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match EnvFilter::try_new(&s) {
            Ok(_) => Ok(LoggerLevel(s)),
            Err(e) => Err(LoggerError::InvalidLevel(format!("{s}: {e}"))),
        }
    }
}

impl From<LoggerLevel> for String {
    fn from(l: LoggerLevel) -> Self {
        l.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_per_target_levels() {
        for lvl in ["warn", "trace", "retryd_core=debug,info", "retryd_core::retry=trace"] {
            assert!(lvl.parse::<LoggerLevel>().is_ok(), "{lvl} should parse");
        }
    }

    #[test]
    fn rejects_bad_directives() {
        for lvl in ["retryd_core=loud", "x=trace,y=wat"] {
            assert!(
                matches!(lvl.parse::<LoggerLevel>(), Err(LoggerError::InvalidLevel(_))),
                "{lvl} should be rejected"
            );
        }
    }

    #[test]
    fn default_is_info() {
        assert_eq!(LoggerLevel::default().as_str(), "info");
        let _ = LoggerLevel::default().to_env_filter();
    }

    #[test]
    fn deserialization_validates() {
        let lvl: LoggerLevel = serde_json::from_str(r#""debug""#).unwrap();
        assert_eq!(lvl, LoggerLevel::new("debug").unwrap());
        assert!(serde_json::from_str::<LoggerLevel>(r#""retryd=lol""#).is_err());
    }
}
