//! Matcher capability backed by the `regex` crate
//!
//! Offsets are reported in characters. Unmatched capture groups are reported
//! as empty strings. After an empty match the next match may not be another
//! empty match at the same position, so enumeration always terminates.

use regex::Regex;

use super::regex_cache::{REGEX_CACHE, RegexCache};
use super::types::{Continuation, MatchCandidate, Matcher};
use crate::config::MatcherConfig;
use crate::error::{JlibError, JlibResult};

/// Compiled regex usable as a pattern argument
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
}

impl RegexMatcher {
    /// Compile `pattern` with default flags through the global cache
    ///
    /// # Errors
    ///
    /// Returns `JlibError::InvalidPattern` if the pattern does not compile.
    pub fn new(pattern: &str) -> JlibResult<Self> {
        Self::with_cache(pattern, &MatcherConfig::default(), &REGEX_CACHE)
    }

    /// Compile `pattern` with explicit settings through the global cache
    ///
    /// # Errors
    ///
    /// Returns `JlibError::Configuration` for an invalid configuration and
    /// `JlibError::InvalidPattern` if the pattern does not compile.
    pub fn with_config(pattern: &str, config: &MatcherConfig) -> JlibResult<Self> {
        Self::with_cache(pattern, config, &REGEX_CACHE)
    }

    /// Compile `pattern` through a caller-owned cache
    ///
    /// # Errors
    ///
    /// Same as [`RegexMatcher::with_config`].
    pub fn with_cache(pattern: &str, config: &MatcherConfig, cache: &RegexCache) -> JlibResult<Self> {
        config.validate()?;
        let regex = cache.get_or_compile(pattern, config)?;
        Ok(Self { regex })
    }

    /// Compile a regex literal's body and flags, as in `/ab+c/i`
    ///
    /// # Errors
    ///
    /// Returns `JlibError::InvalidPattern` for unknown flags or a bad pattern.
    pub fn from_literal(pattern: &str, flags: &str) -> JlibResult<Self> {
        let config = MatcherConfig::from_flags(flags).map_err(|flag| {
            JlibError::invalid_pattern(format!("unknown regex flag '{flag}' in /{pattern}/{flags}"))
        })?;
        Self::with_config(pattern, &config)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Matcher for RegexMatcher {
    fn find(&self, subject: &str) -> JlibResult<Option<MatchCandidate>> {
        RegexCursor::new(self.regex.clone(), subject).search()
    }
}

/// Search position within an owned copy of the subject
struct RegexCursor {
    regex: Regex,
    subject: String,
    at: usize,
    last_end: Option<usize>,
    counted_bytes: usize,
    counted_chars: usize,
}

impl RegexCursor {
    fn new(regex: Regex, subject: &str) -> Self {
        Self {
            regex,
            subject: subject.to_string(),
            at: 0,
            last_end: None,
            counted_bytes: 0,
            counted_chars: 0,
        }
    }

    fn search(mut self) -> JlibResult<Option<MatchCandidate>> {
        loop {
            if self.at > self.subject.len() {
                return Ok(None);
            }

            let Some(caps) = self.regex.captures_at(&self.subject, self.at) else {
                return Ok(None);
            };
            let Some(whole) = caps.get(0) else {
                return Ok(None);
            };
            let (start_byte, end_byte) = (whole.start(), whole.end());

            if start_byte == end_byte && self.last_end == Some(end_byte) {
                self.at = next_boundary(&self.subject, end_byte);
                continue;
            }

            let value = whole.as_str().to_string();
            let groups = caps
                .iter()
                .skip(1)
                .map(|group| group.map_or_else(String::new, |m| m.as_str().to_string()))
                .collect();

            let start = self.char_offset(start_byte);
            let end = self.char_offset(end_byte);
            self.at = end_byte;
            self.last_end = Some(end_byte);

            return Ok(Some(
                MatchCandidate::from_parts(&value, start, end, groups).with_next(self),
            ));
        }
    }

    /// Character offset of `byte`; offsets are requested in increasing order
    fn char_offset(&mut self, byte: usize) -> usize {
        self.counted_chars += self.subject[self.counted_bytes..byte].chars().count();
        self.counted_bytes = byte;
        self.counted_chars
    }
}

impl Continuation for RegexCursor {
    fn advance(self: Box<Self>) -> JlibResult<Option<MatchCandidate>> {
        (*self).search()
    }
}

fn next_boundary(s: &str, byte: usize) -> usize {
    byte + s[byte..].chars().next().map_or(1, char::len_utf8)
}
