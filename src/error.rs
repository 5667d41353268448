//! Error types for contract violations at operation boundaries.
//!
//! Operations never fail because nothing matched; those cases return `None`
//! or an empty result. The only failures are arguments an operation cannot
//! make sense of, such as reading a named field from an element that is not
//! a record.

use std::fmt;

/// An argument handed to a public operation violates its contract.
///
/// # Examples
///
/// ```rust
/// use combinars::error::InvalidArgumentError;
///
/// let error = InvalidArgumentError::new("pluck", "field `age` read from a number");
/// assert_eq!(
///     format!("{error}"),
///     "pluck: invalid argument: field `age` read from a number"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgumentError {
    /// The public operation that rejected the argument.
    pub operation: &'static str,
    /// What was wrong with the argument.
    pub reason: String,
}

impl InvalidArgumentError {
    /// Creates a new error for `operation`.
    pub fn new(operation: &'static str, reason: impl Into<String>) -> Self {
        Self {
            operation,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}: invalid argument: {}",
            self.operation, self.reason
        )
    }
}

impl std::error::Error for InvalidArgumentError {}
