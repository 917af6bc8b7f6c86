//! By-name dispatch of the string functions
//!
//! The expression evaluator resolves a function call to a name and a list of
//! evaluated arguments; [`FunctionEvaluator`] checks the argument shapes and
//! calls the matching implementation.

pub mod args;
pub mod dispatch;

pub use dispatch::{FUNCTION_NAMES, FunctionEvaluator};
