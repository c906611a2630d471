//! Error types for subnet calculations.

use thiserror::Error;

/// Errors returned by the subnet calculator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubnetError {
    /// The input was not text at all.
    #[error("Invalid argument type: expected a string, got {found}")]
    InvalidArgumentType { found: String },

    /// The input was text but not a valid `A.B.C.D/N` network.
    #[error("Invalid network format '{input}': {reason}")]
    InvalidNetworkFormat { input: String, reason: String },

    /// A derivation step failed after a successful parse.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Result type for subnet calculations.
pub type SubnetResult<T> = Result<T, SubnetError>;

impl SubnetError {
    pub(crate) fn format(input: &str, reason: impl Into<String>) -> Self {
        SubnetError::InvalidNetworkFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by the caller's input, false for logic defects.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, SubnetError::InternalError(_))
    }
}
