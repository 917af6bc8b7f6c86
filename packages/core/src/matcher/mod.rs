//! Matcher protocol
//!
//! A matcher is a lazily evaluated sequence of matches over a subject string.
//! The first call receives the subject; every match it yields carries a
//! single-use continuation producing the next one. This module provides:
//! - `types`: the capability traits and the match record types
//! - `driver`: draining a matcher into validated, bounded match records
//! - `regex_cache` / `regex_matcher`: a matcher backed by the `regex` crate

pub mod driver;
pub mod regex_cache;
pub mod regex_matcher;
pub mod types;

pub use driver::extract_matches;
pub use regex_cache::{REGEX_CACHE, RegexCache};
pub use regex_matcher::RegexMatcher;
pub use types::{Continuation, MatchCandidate, MatchRecord, Matcher, Replacer};
