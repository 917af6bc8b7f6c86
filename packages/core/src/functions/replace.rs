//! `replace()` function
//!
//! Literal patterns use an ordinary left-to-right substitution. Matcher
//! patterns are substituted from the last match to the first, directly in the
//! subject's original offsets: rewriting a later span never moves an earlier
//! one.

use serde_json::Value;

use super::{byte_spans, check_limit, expand_replacement};
use crate::error::{JlibError, JlibResult};
use crate::matcher::{MatchRecord, Matcher, Replacer, extract_matches};
use crate::pattern::{Pattern, Replacement};

/// Replace up to `limit` occurrences of `pattern` in `subject`
///
/// With a literal pattern the replacement must be literal too and is inserted
/// verbatim. With a matcher pattern a literal replacement may refer to the
/// match with `$0` and to captured groups with `$N`; a function replacement
/// receives `{match, index, groups}` and must return a string.
///
/// # Errors
///
/// - `JlibError::Argument` for a negative limit, an empty literal pattern, or
///   a function replacement paired with a literal pattern
/// - `JlibError::ReplacementFunction` if a replacement function returns a
///   non-string
/// - matcher failures and contract violations
pub fn replace(
    subject: &str,
    pattern: &Pattern,
    replacement: &Replacement,
    limit: Option<i64>,
) -> JlibResult<String> {
    let limit = check_limit(limit, "fourth argument of function replace")?;

    match pattern {
        Pattern::Literal(pattern) => replace_literal(subject, pattern, replacement, limit),
        Pattern::Matcher(matcher) => {
            replace_matches(subject, matcher.as_ref(), replacement, limit)
        }
    }
}

fn replace_literal(
    subject: &str,
    pattern: &str,
    replacement: &Replacement,
    limit: Option<usize>,
) -> JlibResult<String> {
    if pattern.is_empty() {
        return Err(JlibError::argument(
            "second argument of function replace can't be an empty string",
        ));
    }

    let Replacement::Literal(text) = replacement else {
        return Err(JlibError::argument(
            "third argument of function replace must be a string when pattern is a string",
        ));
    };

    Ok(match limit {
        Some(max) => subject.replacen(pattern, text, max),
        None => subject.replace(pattern, text),
    })
}

fn replace_matches(
    subject: &str,
    matcher: &dyn Matcher,
    replacement: &Replacement,
    limit: Option<usize>,
) -> JlibResult<String> {
    let matches = extract_matches(matcher, subject, limit)?;
    let spans = byte_spans(subject, &matches);
    let expandable = matches!(replacement, Replacement::Literal(text) if text.contains('$'));

    let mut result = subject.to_string();
    for (record, &(start, end)) in matches.iter().zip(&spans).rev() {
        let text = match replacement {
            Replacement::Function(function) => call_replacer(function.as_ref(), record)?,
            Replacement::Literal(text) if expandable => expand_replacement(text, record),
            Replacement::Literal(text) => text.clone(),
        };
        result.replace_range(start..end, &text);
    }

    tracing::debug!(
        target: "jlib::replace",
        replacements = matches.len(),
        subject_len = subject.len(),
        result_len = result.len(),
        "Applied matcher replacements"
    );

    Ok(result)
}

fn call_replacer(function: &dyn Replacer, record: &MatchRecord) -> JlibResult<String> {
    match function.call(&record.to_value())? {
        Value::String(s) => Ok(s),
        other => Err(JlibError::replacement_function(format!(
            "third argument of function replace must be a function that returns a string, got {other}"
        ))),
    }
}
