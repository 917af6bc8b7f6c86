//! Core error types for string function evaluation

use crate::config::ConfigurationError;

/// Result type for string function operations
pub type JlibResult<T> = Result<T, JlibError>;

/// String function errors
///
/// Every error surfaces to the immediate caller. There is no partial-result
/// fallback: a failed call produced no usable output.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JlibError {
    /// Malformed call shape: negative limit, empty literal pattern, wrong
    /// argument type or count
    #[error("Argument error: {0}")]
    Argument(String),

    /// A matcher capability returned a structurally invalid result
    #[error("Matcher contract violation: {0}")]
    MatcherContract(String),

    /// A replacement capability returned something other than a string
    #[error("Replacement function error: {0}")]
    ReplacementFunction(String),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// Failure reported by a host-supplied capability
    #[error("Evaluation error: {0}")]
    Evaluation(String),

    #[error("Cannot convert non-finite number to a string")]
    NonFinite,

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("Decimal format error: {0}")]
    DecimalFormat(String),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
