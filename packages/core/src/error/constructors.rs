//! Error constructor functions

use super::types::JlibError;

impl JlibError {
    /// Create a new Argument error
    pub fn argument(msg: impl Into<String>) -> Self {
        Self::Argument(msg.into())
    }

    /// Create a new MatcherContract error
    pub fn matcher_contract(msg: impl Into<String>) -> Self {
        Self::MatcherContract(msg.into())
    }

    /// Create a new ReplacementFunction error
    pub fn replacement_function(msg: impl Into<String>) -> Self {
        Self::ReplacementFunction(msg.into())
    }

    /// Create a new InvalidPattern error
    pub fn invalid_pattern(msg: impl Into<String>) -> Self {
        Self::InvalidPattern(msg.into())
    }

    /// Create a new Evaluation error
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn decimal_format(msg: impl Into<String>) -> Self {
        Self::DecimalFormat(msg.into())
    }

    /// Whether the error was caused by the caller's argument shape rather than
    /// by a capability or by the input text
    #[must_use]
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Self::Argument(_))
    }
}
