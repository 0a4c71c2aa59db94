//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Errors produced while computing intervals or querying axis helpers.
///
/// All failures are precondition violations on the caller's data, so the
/// enum currently has a single variant carrying the reason.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IntervalError {
    /// The input violates a documented precondition (empty data, non-finite
    /// values, sequences too short for the query, and so on).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl IntervalError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        log::debug!("rejecting input: {reason}");
        Self::InvalidInput(reason)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, IntervalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_message() {
        let err = IntervalError::invalid("no data values");
        assert_eq!(err.to_string(), "invalid input: no data values");
        assert_eq!(err, IntervalError::InvalidInput("no data values".into()));
    }
}
