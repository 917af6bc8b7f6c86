//! `split()` function

use super::{byte_spans, check_limit};
use crate::error::JlibResult;
use crate::matcher::extract_matches;
use crate::pattern::Pattern;

/// Split `subject` on every occurrence of `separator`
///
/// An empty literal separator yields one segment per character. A subject
/// without the separator yields a single segment. With a matcher separator
/// every match is enumerated before the segment list is cut to `limit`.
///
/// # Errors
///
/// Returns `JlibError::Argument` for a negative limit and propagates matcher
/// failures.
pub fn split(subject: &str, separator: &Pattern, limit: Option<i64>) -> JlibResult<Vec<String>> {
    let limit = check_limit(limit, "third argument of the split function")?;

    let mut parts: Vec<String> = match separator {
        Pattern::Literal(sep) if sep.is_empty() => subject.chars().map(String::from).collect(),
        Pattern::Literal(sep) => subject.split(sep.as_str()).map(String::from).collect(),
        Pattern::Matcher(matcher) => {
            let matches = extract_matches(matcher.as_ref(), subject, None)?;
            let mut parts = Vec::with_capacity(matches.len() + 1);
            let mut pos = 0;
            for (start, end) in byte_spans(subject, &matches) {
                parts.push(subject[pos..start].to_string());
                pos = end;
            }
            parts.push(subject[pos..].to_string());
            parts
        }
    };

    if let Some(max) = limit {
        parts.truncate(max);
    }

    Ok(parts)
}
