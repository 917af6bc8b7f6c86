//! Matcher protocol driver
//!
//! Drains a matcher into an ordered list of validated match records, calling
//! one continuation at a time and never more often than the limit requires.

use serde_json::Value;

use super::types::{Continuation, MatchCandidate, MatchRecord, Matcher};
use crate::error::{JlibError, JlibResult};

/// Collect the matches of `matcher` over `subject`
///
/// With `limit = None` every match is collected. With `Some(0)` the matcher is
/// called once and nothing is collected. With `Some(n)` at most `n` records
/// are collected and no continuation is called after the `n`th.
///
/// # Errors
///
/// Returns `JlibError::MatcherContract` if the matcher yields a malformed
/// result, and propagates any error the matcher itself reports. Records
/// collected before the failure are discarded.
pub fn extract_matches(
    matcher: &dyn Matcher,
    subject: &str,
    limit: Option<usize>,
) -> JlibResult<Vec<MatchRecord>> {
    let mut step = matcher.find(subject)?;

    if limit == Some(0) {
        log::trace!("Match limit is zero, skipping enumeration");
        return Ok(Vec::new());
    }

    let subject_len = subject.chars().count();
    let mut records: Vec<MatchRecord> = Vec::new();

    while let Some(candidate) = step {
        let previous_end = records.last().map_or(0, |r| r.end);
        let (record, next) = validate_candidate(candidate, subject_len, previous_end)?;
        records.push(record);

        if limit.is_some_and(|max| records.len() >= max) {
            log::trace!("Match limit of {} reached", records.len());
            break;
        }

        step = next.advance()?;
    }

    log::debug!("Matcher produced {} match(es)", records.len());
    Ok(records)
}

/// Check a candidate's fields and spans, splitting off its continuation
fn validate_candidate(
    candidate: MatchCandidate,
    subject_len: usize,
    previous_end: usize,
) -> JlibResult<(MatchRecord, Box<dyn Continuation>)> {
    let MatchCandidate { fields, next } = candidate;

    let Some(Value::String(value)) = fields.get("match") else {
        return Err(JlibError::matcher_contract(
            "match function must return an object with a string value named 'match'",
        ));
    };

    let start = offset_field(fields.get("start"), "start")?;
    let end = offset_field(fields.get("end"), "end")?;

    let Some(Value::Array(items)) = fields.get("groups") else {
        return Err(JlibError::matcher_contract(
            "match function must return an object with a string array value named 'groups'",
        ));
    };
    let groups = items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            _ => Err(JlibError::matcher_contract(
                "match function must return an object with a string array value named 'groups'",
            )),
        })
        .collect::<JlibResult<Vec<_>>>()?;

    let Some(next) = next else {
        return Err(JlibError::matcher_contract(
            "match function must return an object with a callable value named 'next'",
        ));
    };

    if start > end || end > subject_len {
        return Err(JlibError::matcher_contract(format!(
            "match span [{start}, {end}) is outside the subject of length {subject_len}"
        )));
    }

    if start < previous_end {
        return Err(JlibError::matcher_contract(format!(
            "match at {start} overlaps the previous match ending at {previous_end}"
        )));
    }

    let record = MatchRecord {
        value: value.clone(),
        start,
        end,
        groups,
    };

    Ok((record, next))
}

fn offset_field(field: Option<&Value>, name: &str) -> JlibResult<usize> {
    let Some(Value::Number(n)) = field else {
        return Err(JlibError::matcher_contract(format!(
            "match function must return an object with a number value named '{name}'"
        )));
    };

    if let Some(offset) = n.as_u64() {
        return usize::try_from(offset).map_err(|_| {
            JlibError::matcher_contract(format!("'{name}' offset {offset} is out of range"))
        });
    }

    // Whole floats are accepted as offsets; a host may store every number as f64
    match n.as_f64() {
        Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 => Ok(f as usize),
        _ => Err(JlibError::matcher_contract(format!(
            "'{name}' must be a non-negative integer, got {n}"
        ))),
    }
}
