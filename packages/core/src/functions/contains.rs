//! `contains()` function

use crate::error::JlibResult;
use crate::matcher::extract_matches;
use crate::pattern::Pattern;

/// Whether `subject` contains `pattern`
///
/// A matcher is driven with a limit of one, so at most one match is computed.
///
/// # Errors
///
/// Propagates matcher failures and contract violations.
pub fn contains(subject: &str, pattern: &Pattern) -> JlibResult<bool> {
    match pattern {
        Pattern::Literal(s) => Ok(subject.contains(s.as_str())),
        Pattern::Matcher(matcher) => {
            let matches = extract_matches(matcher.as_ref(), subject, Some(1))?;
            Ok(!matches.is_empty())
        }
    }
}
