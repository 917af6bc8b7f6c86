//! `$` token expansion in literal replacement strings
//!
//! - `$$` is a literal `$`
//! - `$0` is the full matched text
//! - `$N` is captured group `N` (1-based); for a run of digits the longest
//!   prefix naming an existing group wins
//! - any other `$` is kept as is

use crate::matcher::MatchRecord;

/// Expand the `$` tokens of `template` against one match
#[must_use]
pub fn expand_replacement(template: &str, record: &MatchRecord) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        result.push_str(&rest[..pos]);
        rest = &rest[pos + 1..];

        match rest.as_bytes().first() {
            Some(b'$') => {
                result.push('$');
                rest = &rest[1..];
            }
            Some(b'0') => {
                result.push_str(&record.value);
                rest = &rest[1..];
            }
            Some(b) if b.is_ascii_digit() => {
                let run = rest.bytes().take_while(u8::is_ascii_digit).count();
                match group_reference(&rest[..run], &record.groups) {
                    Some((consumed, group)) => {
                        result.push_str(group);
                        rest = &rest[consumed..];
                    }
                    // No prefix names a group: the digits stay as plain text
                    None => result.push('$'),
                }
            }
            _ => result.push('$'),
        }
    }

    result.push_str(rest);
    result
}

/// Longest prefix of `digits` that is a valid 1-based group index
fn group_reference<'a>(digits: &str, groups: &'a [String]) -> Option<(usize, &'a str)> {
    (1..=digits.len()).rev().find_map(|len| {
        let index: usize = digits[..len].parse().ok()?;
        let group = groups.get(index.checked_sub(1)?)?;
        Some((len, group.as_str()))
    })
}
