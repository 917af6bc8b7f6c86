//! JLib Public API
//!
//! String functions for a JSON query and transformation language, callable by
//! name from an expression evaluator.
//!
//! ```rust
//! use jlib::{Argument, FunctionEvaluator, RegexMatcher};
//!
//! let evaluator = FunctionEvaluator::new();
//! let result = evaluator.evaluate_function_value(
//!     "replace",
//!     &[
//!         Argument::string("hello world"),
//!         Argument::matcher(RegexMatcher::new(r"o(\w)?")?),
//!         Argument::string("0$1"),
//!     ],
//! )?;
//! assert_eq!(result.as_str(), Some("hell0 w0rld"));
//! # Ok::<(), jlib::JlibError>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod evaluator;

pub use evaluator::{FUNCTION_NAMES, FunctionEvaluator};

// Re-export important types from the core package
pub use jlib_core::functions;
pub use jlib_core::matcher::{RegexCache, RegexMatcher, extract_matches};
pub use jlib_core::{
    Argument, ConfigurationError, Continuation, JlibError, JlibResult, MatchCandidate,
    MatchRecord, Matcher, MatcherConfig, Pattern, Replacement, Replacer,
};
pub use jlib_core::functions::{DecimalFormat, DecimalFormatter};
