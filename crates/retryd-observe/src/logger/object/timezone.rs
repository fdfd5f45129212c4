use std::sync::{OnceLock, RwLock};

use serde::{Deserialize, Serialize};
use time::UtcOffset;

/// Cached local UTC offset; set by [`init_local_offset`] or on first use.
static LOCAL_OFFSET: RwLock<UtcOffset> = RwLock::new(UtcOffset::UTC);

/// Marks that detection has been attempted once.
static DETECTED: OnceLock<()> = OnceLock::new();

/// Timezone configuration for log timestamps.
///
/// - `Utc`: All timestamps in UTC (always works, default)
/// - `Local`: Uses system timezone
#[derive(Debug, Default, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LoggerTimeZone {
    #[default]
    Utc,
    Local,
}

/// Detect and cache the local timezone offset.
///
/// **Call in `main()` before spawning any threads** (before building the tokio runtime):
/// offset detection fails in multi-threaded processes on most Unix platforms.
/// Falls back to UTC silently if detection fails.
pub fn init_local_offset() {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    if let Ok(mut guard) = LOCAL_OFFSET.write() {
        *guard = offset;
    }
    let _ = DETECTED.set(());
}

/// Cached local offset, detecting it on first use if [`init_local_offset`] was not called.
pub(crate) fn local_offset() -> UtcOffset {
    DETECTED.get_or_init(|| match UtcOffset::current_local_offset() {
        Ok(detected) => {
            if let Ok(mut guard) = LOCAL_OFFSET.write() {
                *guard = detected;
            }
        }
        Err(_) => {
            eprintln!(
                "WARNING: retryd-observe local timezone detection failed. \
                 Call init_local_offset() in main() before starting the runtime. \
                 Falling back to UTC."
            );
        }
    });

    LOCAL_OFFSET
        .read()
        .map(|guard| *guard)
        .unwrap_or(UtcOffset::UTC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&LoggerTimeZone::Local).unwrap(), r#""local""#);
        let tz: LoggerTimeZone = serde_json::from_str(r#""utc""#).unwrap();
        assert_eq!(tz, LoggerTimeZone::Utc);
        assert!(serde_json::from_str::<LoggerTimeZone>(r#""pst""#).is_err());
    }

    #[test]
    fn offset_is_sane_after_init() {
        init_local_offset();
        assert!(local_offset().whole_hours().abs() <= 14);
    }
}
