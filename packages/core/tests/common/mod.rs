//! Shared test helpers: scripted matchers with call counters

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use jlib_core::{JlibResult, MatchCandidate, MatchRecord, Matcher, Pattern};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn record(value: &str, start: usize, end: usize, groups: &[&str]) -> MatchRecord {
    MatchRecord {
        value: value.to_string(),
        start,
        end,
        groups: groups.iter().map(|g| (*g).to_string()).collect(),
    }
}

/// Matcher replaying a fixed list of matches and counting every call it
/// answers (the initial `find` and each continuation)
#[derive(Clone)]
pub struct Scripted {
    matches: Rc<Vec<MatchRecord>>,
    calls: Rc<Cell<usize>>,
}

impl Scripted {
    pub fn new(matches: Vec<MatchRecord>) -> Self {
        Self {
            matches: Rc::new(matches),
            calls: Rc::new(Cell::new(0)),
        }
    }

    /// Matches at the given character spans of `subject`, without groups
    pub fn spans(subject: &str, spans: &[(usize, usize)]) -> Self {
        let chars: Vec<char> = subject.chars().collect();
        Self::new(
            spans
                .iter()
                .map(|&(start, end)| MatchRecord {
                    value: chars[start..end].iter().collect(),
                    start,
                    end,
                    groups: Vec::new(),
                })
                .collect(),
        )
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn pattern(&self) -> Pattern {
        Pattern::Matcher(Rc::new(self.clone()))
    }
}

impl Matcher for Scripted {
    fn find(&self, _subject: &str) -> JlibResult<Option<MatchCandidate>> {
        Ok(step(Rc::clone(&self.matches), 0, Rc::clone(&self.calls)))
    }
}

fn step(matches: Rc<Vec<MatchRecord>>, index: usize, calls: Rc<Cell<usize>>) -> Option<MatchCandidate> {
    calls.set(calls.get() + 1);
    let m = matches.get(index)?;
    let candidate = MatchCandidate::from_parts(&m.value, m.start, m.end, m.groups.clone());
    let rest = Rc::clone(&matches);
    Some(candidate.with_next(move || -> JlibResult<Option<MatchCandidate>> {
        Ok(step(rest, index + 1, calls))
    }))
}

/// Matcher whose `index`th candidate is altered by `corrupt`
pub fn corrupted(
    subject: &str,
    spans: &[(usize, usize)],
    index: usize,
    corrupt: fn(MatchCandidate) -> MatchCandidate,
) -> Pattern {
    let scripted = Scripted::spans(subject, spans);
    let records = Rc::clone(&scripted.matches);
    Pattern::Matcher(Rc::new(move |_subject: &str| -> JlibResult<Option<MatchCandidate>> {
        Ok(corrupt_step(Rc::clone(&records), 0, index, corrupt))
    }))
}

fn corrupt_step(
    matches: Rc<Vec<MatchRecord>>,
    position: usize,
    index: usize,
    corrupt: fn(MatchCandidate) -> MatchCandidate,
) -> Option<MatchCandidate> {
    let m = matches.get(position)?;
    let mut candidate = MatchCandidate::from_parts(&m.value, m.start, m.end, m.groups.clone());
    let rest = Rc::clone(&matches);
    candidate = candidate.with_next(move || -> JlibResult<Option<MatchCandidate>> {
        Ok(corrupt_step(rest, position + 1, index, corrupt))
    });
    if position == index {
        candidate = corrupt(candidate);
    }
    Some(candidate)
}
