use std::{error::Error, fmt};

/// A failed attempt as seen by a [`super::RetryObserver`].
#[derive(Clone, Copy)]
pub struct AttemptFailure<'a> {
    /// Zero-based attempt index.
    pub attempt: u32,
    /// Label of the retried operation.
    pub label: &'a str,
    /// Error returned by the attempt.
    pub error: &'a (dyn Error + 'static),
}

impl AttemptFailure<'_> {
    /// One-based attempt number, as shown to humans.
    #[inline]
    pub fn number(&self) -> u32 {
        self.attempt.saturating_add(1)
    }

    /// Log line for this event: `Attempt {n} to {label}`.
    pub fn message(&self) -> String {
        format!("Attempt {} to {}", self.number(), self.label)
    }
}

impl fmt::Debug for AttemptFailure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttemptFailure")
            .field("attempt", &self.attempt)
            .field("label", &self.label)
            .field("error", &self.error.to_string())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_uses_one_based_number() {
        let err = std::io::Error::other("connection refused");
        let event = AttemptFailure {
            attempt: 0,
            label: "connect to db",
            error: &err,
        };

        assert_eq!(event.number(), 1);
        assert_eq!(event.message(), "Attempt 1 to connect to db");
    }

    #[test]
    fn debug_renders_error_text() {
        let err = std::io::Error::other("boom");
        let event = AttemptFailure {
            attempt: 4,
            label: "x",
            error: &err,
        };

        let s = format!("{event:?}");
        assert!(s.contains("attempt: 4"));
        assert!(s.contains("\"boom\""));
    }
}
