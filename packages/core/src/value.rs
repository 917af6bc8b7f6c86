//! Host values passed to string functions
//!
//! The expression evaluator hands every function its arguments as
//! [`Argument`]s: plain JSON data, a matcher capability (a compiled regex
//! literal), or a callable function.

use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use crate::matcher::{Matcher, Replacer};

/// A single function argument or function result
#[derive(Clone)]
pub enum Argument {
    Value(Value),
    Matcher(Rc<dyn Matcher>),
    Function(Rc<dyn Replacer>),
}

impl Argument {
    #[must_use]
    pub fn string(s: impl Into<String>) -> Self {
        Self::Value(Value::String(s.into()))
    }

    pub fn matcher(matcher: impl Matcher + 'static) -> Self {
        Self::Matcher(Rc::new(matcher))
    }

    pub fn function(function: impl Replacer + 'static) -> Self {
        Self::Function(Rc::new(function))
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Value(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_callable(&self) -> bool {
        matches!(self, Self::Matcher(_) | Self::Function(_))
    }

    /// Type name used in argument error messages
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Value(Value::Null) => "null",
            Self::Value(Value::Bool(_)) => "boolean",
            Self::Value(Value::Number(_)) => "number",
            Self::Value(Value::String(_)) => "string",
            Self::Value(Value::Array(_)) => "array",
            Self::Value(Value::Object(_)) => "object",
            Self::Matcher(_) => "regex",
            Self::Function(_) => "function",
        }
    }
}

impl fmt::Debug for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Matcher(_) => f.write_str("Matcher(..)"),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

impl From<Value> for Argument {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for Argument {
    fn from(s: &str) -> Self {
        Self::string(s)
    }
}

impl From<String> for Argument {
    fn from(s: String) -> Self {
        Self::Value(Value::String(s))
    }
}
