//! Function evaluator and dispatcher

use std::rc::Rc;

use serde_json::Value;

use super::args;
use jlib_core::functions::{self, DecimalFormatter};
use jlib_core::{Argument, JlibError, JlibResult, Pattern, Replacement};

/// Names accepted by [`FunctionEvaluator::evaluate_function_value`]
pub const FUNCTION_NAMES: &[&str] = &[
    "contains",
    "split",
    "match",
    "replace",
    "string",
    "substring",
    "substringBefore",
    "substringAfter",
    "pad",
    "trim",
    "join",
    "formatNumber",
    "formatBase",
    "base64encode",
    "base64decode",
    "encodeUrl",
    "encodeUrlComponent",
    "decodeUrl",
    "decodeUrlComponent",
];

/// String function dispatcher
///
/// `formatNumber` needs a host-supplied [`DecimalFormatter`]; without one it
/// reports an evaluation error.
#[derive(Clone, Default)]
pub struct FunctionEvaluator {
    decimal_formatter: Option<Rc<dyn DecimalFormatter>>,
}

impl FunctionEvaluator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_decimal_formatter(mut self, formatter: impl DecimalFormatter + 'static) -> Self {
        self.decimal_formatter = Some(Rc::new(formatter));
        self
    }

    #[must_use]
    pub fn is_function(name: &str) -> bool {
        FUNCTION_NAMES.contains(&name)
    }

    /// Evaluate a string function call
    ///
    /// # Errors
    ///
    /// Returns `JlibError::Argument` for unknown names and malformed argument
    /// lists, and whatever the called function reports.
    pub fn evaluate_function_value(&self, name: &str, args: &[Argument]) -> JlibResult<Argument> {
        log::trace!("Evaluating string function {name} with {} argument(s)", args.len());

        match name {
            "contains" => {
                args::arity(name, args, 2, 2)?;
                let subject = args::string(name, args, 0)?;
                let pattern = Pattern::classify(&args[1], name)?;
                functions::contains(subject, &pattern).map(|b| Value::Bool(b).into())
            }
            "split" => {
                args::arity(name, args, 2, 3)?;
                let subject = args::string(name, args, 0)?;
                let separator = Pattern::classify(&args[1], name)?;
                let limit = args::optional_integer(name, args, 2)?;
                let parts = functions::split(subject, &separator, limit)?;
                Ok(Value::from(parts).into())
            }
            "match" => {
                args::arity(name, args, 2, 3)?;
                let subject = args::string(name, args, 0)?;
                let Argument::Matcher(matcher) = &args[1] else {
                    return Err(JlibError::argument(format!(
                        "function match takes a regex, got {}",
                        args[1].type_name()
                    )));
                };
                let limit = args::optional_integer(name, args, 2)?;
                let matches = functions::match_pattern(subject, matcher.as_ref(), limit)?;
                Ok(Value::Array(matches).into())
            }
            "replace" => {
                args::arity(name, args, 3, 4)?;
                let subject = args::string(name, args, 0)?;
                let pattern = Pattern::classify(&args[1], name)?;
                let replacement = Replacement::classify(&args[2], name)?;
                let limit = args::optional_integer(name, args, 3)?;
                functions::replace(subject, &pattern, &replacement, limit).map(Argument::from)
            }
            "string" => {
                args::arity(name, args, 1, 1)?;
                functions::string(&args[0]).map(Argument::from)
            }
            "substring" => {
                args::arity(name, args, 2, 3)?;
                let s = args::string(name, args, 0)?;
                let start = args::integer(name, args, 1)?;
                let length = args::optional_integer(name, args, 2)?;
                Ok(functions::substring(s, start, length).into())
            }
            "substringBefore" | "substringAfter" => {
                args::arity(name, args, 2, 2)?;
                let s = args::string(name, args, 0)?;
                let sub = args::string(name, args, 1)?;
                let result = if name == "substringBefore" {
                    functions::substring_before(s, sub)
                } else {
                    functions::substring_after(s, sub)
                };
                Ok(result.into())
            }
            "pad" => {
                args::arity(name, args, 2, 3)?;
                let s = args::string(name, args, 0)?;
                let width = args::integer(name, args, 1)?;
                let chars = args::optional_string(name, args, 2)?;
                Ok(functions::pad(s, width, chars).into())
            }
            "trim" => {
                args::arity(name, args, 1, 1)?;
                Ok(functions::trim(args::string(name, args, 0)?).into())
            }
            "join" => {
                args::arity(name, args, 1, 2)?;
                let values = args::value(name, args, 0)?;
                let separator = args::optional_string(name, args, 1)?;
                functions::join(values, separator).map(Argument::from)
            }
            "formatNumber" => {
                args::arity(name, args, 2, 3)?;
                let value = args::number(name, args, 0)?;
                let picture = args::string(name, args, 1)?;
                let options = if args.len() > 2 {
                    Some(args::value(name, args, 2)?)
                } else {
                    None
                };
                let formatter = self.decimal_formatter.as_deref().ok_or_else(|| {
                    JlibError::evaluation("no decimal formatter is configured for formatNumber")
                })?;
                functions::format_number(value, picture, options, formatter).map(Argument::from)
            }
            "formatBase" => {
                args::arity(name, args, 1, 2)?;
                let value = args::number(name, args, 0)?;
                let base = args::optional_number(name, args, 1)?;
                functions::format_base(value, base).map(Argument::from)
            }
            "base64encode" => {
                args::arity(name, args, 1, 1)?;
                Ok(functions::base64_encode(args::string(name, args, 0)?).into())
            }
            "base64decode" => {
                args::arity(name, args, 1, 1)?;
                functions::base64_decode(args::string(name, args, 0)?).map(Argument::from)
            }
            "encodeUrl" => {
                args::arity(name, args, 1, 1)?;
                functions::encode_url(args::string(name, args, 0)?).map(Argument::from)
            }
            "encodeUrlComponent" => {
                args::arity(name, args, 1, 1)?;
                functions::encode_url_component(args::string(name, args, 0)?).map(Argument::from)
            }
            "decodeUrl" | "decodeUrlComponent" => {
                args::arity(name, args, 1, 1)?;
                functions::decode_url(args::string(name, args, 0)?).map(Argument::from)
            }
            _ => Err(JlibError::argument(format!("unknown function: {name}"))),
        }
    }
}
