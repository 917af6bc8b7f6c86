//! `match()` function

use serde_json::Value;

use super::check_limit;
use crate::error::JlibResult;
use crate::matcher::{Matcher, extract_matches};

/// Describe the matches of `matcher` in `subject`
///
/// Each element is an object with the fields:
///
/// - `match` - the matched text
/// - `index` - the character offset where the match starts
/// - `groups` - the captured groups, empty strings for groups that did not
///   participate
///
/// # Errors
///
/// Returns `JlibError::Argument` for a negative limit and propagates matcher
/// failures and contract violations.
pub fn match_pattern(
    subject: &str,
    matcher: &dyn Matcher,
    limit: Option<i64>,
) -> JlibResult<Vec<Value>> {
    let limit = check_limit(limit, "third argument of function match")?;
    let matches = extract_matches(matcher, subject, limit)?;
    Ok(matches.iter().map(|m| m.to_value()).collect())
}
