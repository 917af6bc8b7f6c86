//! Argument shape checks
//!
//! Every mismatch is reported as `JlibError::Argument`; nothing is coerced.

use serde_json::Value;

use jlib_core::{Argument, JlibError, JlibResult};

/// Check the number of arguments
pub fn arity(name: &str, args: &[Argument], min: usize, max: usize) -> JlibResult<()> {
    if args.len() < min || args.len() > max {
        let expected = if min == max {
            format!("{min}")
        } else {
            format!("{min} to {max}")
        };
        return Err(JlibError::argument(format!(
            "function {name} takes {expected} argument(s), got {}",
            args.len()
        )));
    }
    Ok(())
}

pub fn string<'a>(name: &str, args: &'a [Argument], index: usize) -> JlibResult<&'a str> {
    args.get(index)
        .and_then(Argument::as_str)
        .ok_or_else(|| type_error(name, args, index, "a string"))
}

pub fn optional_string<'a>(
    name: &str,
    args: &'a [Argument],
    index: usize,
) -> JlibResult<Option<&'a str>> {
    if index >= args.len() {
        return Ok(None);
    }
    string(name, args, index).map(Some)
}

pub fn number(name: &str, args: &[Argument], index: usize) -> JlibResult<f64> {
    args.get(index)
        .and_then(Argument::as_value)
        .and_then(Value::as_f64)
        .ok_or_else(|| type_error(name, args, index, "a number"))
}

pub fn optional_number(name: &str, args: &[Argument], index: usize) -> JlibResult<Option<f64>> {
    if index >= args.len() {
        return Ok(None);
    }
    number(name, args, index).map(Some)
}

/// An integral number argument; `3.0` is accepted, `3.5` is not
pub fn integer(name: &str, args: &[Argument], index: usize) -> JlibResult<i64> {
    if let Some(n) = args.get(index).and_then(Argument::as_value).and_then(Value::as_i64) {
        return Ok(n);
    }
    let n = number(name, args, index)?;
    if n.fract() != 0.0 || n < i64::MIN as f64 || n > i64::MAX as f64 {
        return Err(type_error(name, args, index, "an integer"));
    }
    Ok(n as i64)
}

pub fn optional_integer(name: &str, args: &[Argument], index: usize) -> JlibResult<Option<i64>> {
    if index >= args.len() {
        return Ok(None);
    }
    integer(name, args, index).map(Some)
}

pub fn value<'a>(name: &str, args: &'a [Argument], index: usize) -> JlibResult<&'a Value> {
    args.get(index)
        .and_then(Argument::as_value)
        .ok_or_else(|| type_error(name, args, index, "a value"))
}

fn type_error(name: &str, args: &[Argument], index: usize, expected: &str) -> JlibError {
    let got = args.get(index).map_or("nothing", Argument::type_name);
    JlibError::argument(format!(
        "argument {} of function {name} must be {expected}, got {got}",
        index + 1
    ))
}
