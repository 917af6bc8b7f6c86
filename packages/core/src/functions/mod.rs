//! String function implementations
//!
//! - `contains`, `split`, `matching`: consumers of the matcher protocol
//! - `replace`, `expand`: the replacement engine and `$` token expansion
//! - `text`: substring, padding, trimming, joining, string conversion
//! - `encoding`: base64 and URL codecs
//! - `number`: radix formatting and decimal format options

pub mod contains;
pub mod encoding;
pub mod expand;
pub mod matching;
pub mod number;
pub mod replace;
pub mod split;
pub mod text;

pub use contains::contains;
pub use encoding::{
    base64_decode, base64_encode, decode_url, encode_url, encode_url_component,
};
pub use expand::expand_replacement;
pub use matching::match_pattern;
pub use number::{DecimalFormat, DecimalFormatter, format_base, format_number};
pub use replace::replace;
pub use split::split;
pub use text::{join, pad, string, substring, substring_after, substring_before, trim};

use crate::error::{JlibError, JlibResult};
use crate::matcher::MatchRecord;

/// Validate an optional limit argument
///
/// `message` names the offending argument, e.g. "third argument of function
/// split".
pub(crate) fn check_limit(limit: Option<i64>, message: &str) -> JlibResult<Option<usize>> {
    match limit {
        None => Ok(None),
        Some(n) if n < 0 => Err(JlibError::argument(format!(
            "{message} must evaluate to a positive number"
        ))),
        Some(n) => Ok(Some(usize::try_from(n).unwrap_or(usize::MAX))),
    }
}

/// Byte spans of match records, whose offsets are in characters
///
/// Records are ordered and non-overlapping, so a single forward walk over the
/// subject converts all of them.
pub(crate) fn byte_spans(subject: &str, records: &[MatchRecord]) -> Vec<(usize, usize)> {
    let mut boundaries = subject
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(subject.len()))
        .peekable();
    let mut index = 0;
    let mut to_byte = |target: usize| -> usize {
        while index < target && boundaries.next().is_some() {
            index += 1;
        }
        boundaries.peek().copied().unwrap_or(subject.len())
    };

    records
        .iter()
        .map(|r| {
            let start = to_byte(r.start);
            (start, to_byte(r.end))
        })
        .collect()
}

/// Byte position of the `n`th character, or the length when `n` is past the end
pub(crate) fn byte_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}
