//! Pattern and replacement classification
//!
//! Pattern and replacement arguments are either literal strings or
//! capabilities. They are classified once, at the function boundary, and the
//! rest of the library works on the resulting sum types.

use std::fmt;
use std::rc::Rc;

use crate::error::{JlibError, JlibResult};
use crate::matcher::{Matcher, Replacer};
use crate::value::Argument;

/// Pattern argument of `contains`, `split`, `match` and `replace`
#[derive(Clone)]
pub enum Pattern {
    Literal(String),
    Matcher(Rc<dyn Matcher>),
}

/// Replacement argument of `replace`
#[derive(Clone)]
pub enum Replacement {
    /// Literal text, possibly containing `$0`, `$N` and `$$` tokens
    Literal(String),
    Function(Rc<dyn Replacer>),
}

impl Pattern {
    /// Classify a host argument as a pattern
    ///
    /// # Errors
    ///
    /// Returns `JlibError::Argument` unless the argument is a string or a
    /// matcher.
    pub fn classify(arg: &Argument, function: &str) -> JlibResult<Self> {
        match arg {
            Argument::Value(serde_json::Value::String(s)) => Ok(Self::Literal(s.clone())),
            Argument::Matcher(m) => Ok(Self::Matcher(Rc::clone(m))),
            other => Err(JlibError::argument(format!(
                "function {function} takes a string or a regex, got {}",
                other.type_name()
            ))),
        }
    }

    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}

impl Replacement {
    /// Classify a host argument as a replacement
    ///
    /// # Errors
    ///
    /// Returns `JlibError::Argument` unless the argument is a string or a
    /// function.
    pub fn classify(arg: &Argument, function: &str) -> JlibResult<Self> {
        match arg {
            Argument::Value(serde_json::Value::String(s)) => Ok(Self::Literal(s.clone())),
            Argument::Function(f) => Ok(Self::Function(Rc::clone(f))),
            other => Err(JlibError::argument(format!(
                "function {function} takes a string or a function as replacement, got {}",
                other.type_name()
            ))),
        }
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Self::Matcher(_) => f.write_str("Matcher(..)"),
        }
    }
}

impl fmt::Debug for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

impl From<&str> for Pattern {
    fn from(s: &str) -> Self {
        Self::Literal(s.to_string())
    }
}

impl From<&str> for Replacement {
    fn from(s: &str) -> Self {
        Self::Literal(s.to_string())
    }
}
