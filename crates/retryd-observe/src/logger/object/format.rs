use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::logger::LoggerError;

/// Output format for the logger.
/// - `Text`     — human-friendly, colored (when enabled) text logs.
/// - `Json`     — one JSON object per record, for log collectors.
/// - `Journald` — records are sent to systemd-journald (Linux only).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[non_exhaustive]
pub enum LoggerFormat {
    #[default]
    Text,
    Json,
    Journald,
}

impl LoggerFormat {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LoggerFormat::Text => "text",
            LoggerFormat::Json => "json",
            LoggerFormat::Journald => "journald",
        }
    }
}

impl FromStr for LoggerFormat {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "journald" | "journal" if cfg!(target_os = "linux") => Ok(Self::Journald),
            "journald" | "journal" => Err(LoggerError::JournaldNotSupported),
            _ => Err(LoggerError::InvalidFormat(s.to_string())),
        }
    }
}

impl TryFrom<String> for LoggerFormat {
    type Error = LoggerError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<LoggerFormat> for String {
    fn from(f: LoggerFormat) -> Self {
        f.as_str().to_string()
    }
}

impl fmt::Display for LoggerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitive_with_whitespace() {
        for (input, want) in [
            ("text", LoggerFormat::Text),
            (" Text ", LoggerFormat::Text),
            ("JSON", LoggerFormat::Json),
        ] {
            assert_eq!(input.parse::<LoggerFormat>().unwrap(), want, "{input:?}");
        }
    }

    #[test]
    fn journald_is_linux_only() {
        let parsed = "journal".parse::<LoggerFormat>();

        if cfg!(target_os = "linux") {
            assert_eq!(parsed.unwrap(), LoggerFormat::Journald);
        } else {
            assert!(matches!(parsed, Err(LoggerError::JournaldNotSupported)));
        }
    }

    #[test]
    fn rejects_unknown_format() {
        for input in ["", "xml", "logfmt", "text-json"] {
            assert!(
                matches!(input.parse::<LoggerFormat>(), Err(LoggerError::InvalidFormat(_))),
                "expected InvalidFormat for {input:?}"
            );
        }
    }

    #[test]
    fn serializes_as_canonical_string() {
        assert_eq!(serde_json::to_string(&LoggerFormat::Json).unwrap(), r#""json""#);

        let parsed: LoggerFormat = serde_json::from_str(r#""TEXT""#).unwrap();
        assert_eq!(parsed, LoggerFormat::Text);
        assert!(serde_json::from_str::<LoggerFormat>(r#""yaml""#).is_err());
    }
}
