//! Error types for horizon.

use thiserror::Error;

/// Result type alias for time period parsing.
pub type Result<T> = std::result::Result<T, TimePeriodError>;

/// Errors that can occur while parsing a time period.
///
/// Both variants carry the offending literal so callers can report it as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimePeriodError {
    /// The input does not split into a start spec and an end spec.
    #[error("could not parse timerange string {0}")]
    MalformedRange(String),

    /// One side of the range is not a valid date or date-time literal.
    #[error("could not parse time string {0}")]
    MalformedInstant(String),
}

impl TimePeriodError {
    /// Returns the literal that failed to parse.
    #[must_use]
    pub fn literal(&self) -> &str {
        match self {
            Self::MalformedRange(s) | Self::MalformedInstant(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TimePeriodError::MalformedRange("djadk".to_string());
        assert_eq!(err.to_string(), "could not parse timerange string djadk");
        assert_eq!(err.literal(), "djadk");

        let err = TimePeriodError::MalformedInstant("ab/04/1776".to_string());
        assert_eq!(err.to_string(), "could not parse time string ab/04/1776");
        assert_eq!(err.literal(), "ab/04/1776");
    }
}
