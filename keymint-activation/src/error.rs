//! Error types for activation key generation.

use thiserror::Error;

/// Activation-key-specific errors.
#[derive(Debug, Error)]
pub enum ActivationKeyError {
    /// A parameter has an unacceptable value (whitespace separator, bad map,
    /// blank prefix, non-whole seed).
    #[error("invalid {param}: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        param: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// A numeric parameter lies outside its valid range.
    #[error("{param} out of range: expected {expected}, got {actual}")]
    OutOfRange {
        /// Name of the offending parameter.
        param: &'static str,
        /// The valid range, e.g. `[3, 6]`.
        expected: String,
        /// The rejected value.
        actual: String,
    },

    /// Configuration JSON could not be parsed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A thread panicked while holding the sequence lock.
    #[error("activation key sequence lock poisoned")]
    Poisoned,
}

impl ActivationKeyError {
    pub(crate) fn invalid(param: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            param,
            reason: reason.into(),
        }
    }

    pub(crate) fn out_of_range(
        param: &'static str,
        expected: impl Into<String>,
        actual: impl ToString,
    ) -> Self {
        Self::OutOfRange {
            param,
            expected: expected.into(),
            actual: actual.to_string(),
        }
    }

    /// Returns true for argument errors.
    #[must_use]
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns true for range errors.
    #[must_use]
    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

/// Result type for activation key operations.
pub type ActivationKeyResult<T> = Result<T, ActivationKeyError>;
