//! Substring, padding, trimming, joining and string conversion
//!
//! Lengths and offsets are counted in characters, not bytes.

use serde_json::Value;

use super::byte_offset;
use crate::error::{JlibError, JlibResult};
use crate::value::Argument;

/// Convert a value to a string
///
/// Strings are returned unchanged and callables become empty strings.
/// Integral numbers are rendered without a fractional part; everything else
/// uses its compact JSON representation.
///
/// # Errors
///
/// Returns `JlibError::NonFinite` for NaN or infinite numbers.
pub fn string(arg: &Argument) -> JlibResult<String> {
    match arg {
        Argument::Matcher(_) | Argument::Function(_) => Ok(String::new()),
        Argument::Value(Value::String(s)) => Ok(s.clone()),
        Argument::Value(Value::Number(n)) => number_to_string(n),
        Argument::Value(v) => serde_json::to_string(v).map_err(|e| JlibError::encode(e.to_string())),
    }
}

fn number_to_string(n: &serde_json::Number) -> JlibResult<String> {
    if n.is_i64() || n.is_u64() {
        return Ok(n.to_string());
    }
    let Some(f) = n.as_f64() else {
        return Ok(n.to_string());
    };
    if !f.is_finite() {
        return Err(JlibError::NonFinite);
    }
    if f.fract() == 0.0 && f.abs() < 1e21 {
        return Ok(format!("{f:.0}"));
    }
    Ok(n.to_string())
}

/// Portion of `s` starting at character `start`
///
/// A negative `start` counts from the end. `length`, when given, caps the
/// number of characters returned.
#[must_use]
pub fn substring(s: &str, start: i64, length: Option<i64>) -> String {
    let count = i64::try_from(s.chars().count()).unwrap_or(i64::MAX);

    if length.is_some_and(|len| len <= 0) || start >= count {
        return String::new();
    }

    let start = if start < 0 { (start + count).max(0) } else { start };
    let tail = &s[byte_offset(s, usize::try_from(start).unwrap_or(0))..];

    match length {
        Some(len) => {
            let len = usize::try_from(len).unwrap_or(usize::MAX);
            tail[..byte_offset(tail, len)].to_string()
        }
        None => tail.to_string(),
    }
}

/// Text before the first occurrence of `sub`, or all of `s`
#[must_use]
pub fn substring_before(s: &str, sub: &str) -> String {
    s.find(sub).map_or(s, |i| &s[..i]).to_string()
}

/// Text after the first occurrence of `sub`, or all of `s`
#[must_use]
pub fn substring_after(s: &str, sub: &str) -> String {
    s.find(sub).map_or(s, |i| &s[i + sub.len()..]).to_string()
}

/// Pad `s` to `|width|` characters
///
/// A positive width pads on the right, a negative one on the left. The pad
/// text defaults to a single space and is cut to fit exactly.
#[must_use]
pub fn pad(s: &str, width: i64, chars: Option<&str>) -> String {
    let target = usize::try_from(width.unsigned_abs()).unwrap_or(usize::MAX);
    let current = s.chars().count();
    if target <= current {
        return s.to_string();
    }

    let fill = match chars {
        Some(c) if !c.is_empty() => c,
        _ => " ",
    };
    let padding: String = fill.chars().cycle().take(target - current).collect();

    if width < 0 {
        padding + s
    } else {
        format!("{s}{padding}")
    }
}

/// Collapse whitespace runs to a single space and strip both ends
#[must_use]
pub fn trim(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Join an array of strings with an optional separator
///
/// A lone string is returned as is.
///
/// # Errors
///
/// Returns `JlibError::Argument` if `values` is neither a string nor an array
/// of strings.
pub fn join(values: &Value, separator: Option<&str>) -> JlibResult<String> {
    match values {
        Value::String(s) => Ok(s.clone()),
        Value::Array(items) => {
            let parts = items
                .iter()
                .map(|item| {
                    item.as_str()
                        .ok_or_else(|| JlibError::argument("function join takes an array of strings"))
                })
                .collect::<JlibResult<Vec<_>>>()?;
            Ok(parts.join(separator.unwrap_or_default()))
        }
        _ => Err(JlibError::argument("function join takes an array of strings")),
    }
}
