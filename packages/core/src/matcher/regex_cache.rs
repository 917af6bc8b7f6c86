//! Compiled regex cache for the regex-backed matcher
//!
//! Compiling a pattern is far more expensive than running it, and query
//! expressions tend to reuse the same regex literal across many input
//! documents.

use std::collections::HashMap;
use std::sync::RwLock;

use regex::{Regex, RegexBuilder};

use crate::config::MatcherConfig;
use crate::error::{JlibError, JlibResult};

/// Bounded cache of compiled patterns keyed by pattern text and flags
pub struct RegexCache {
    cache: RwLock<HashMap<CacheKey, Regex>>,
    capacity: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    pattern: String,
    case_insensitive: bool,
    multi_line: bool,
    size_limit: usize,
}

impl CacheKey {
    fn new(pattern: &str, config: &MatcherConfig) -> Self {
        Self {
            pattern: pattern.to_string(),
            case_insensitive: config.case_insensitive,
            multi_line: config.multi_line,
            size_limit: config.size_limit,
        }
    }
}

impl RegexCache {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
            capacity,
        }
    }

    /// Cache sized from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `JlibError::Configuration` if the configuration is invalid.
    pub fn from_config(config: &MatcherConfig) -> JlibResult<Self> {
        config.validate()?;
        Ok(Self::new(config.cache_capacity))
    }

    /// Get compiled regex from cache or compile and cache if not present
    ///
    /// # Errors
    ///
    /// Returns `JlibError::InvalidPattern` if the pattern does not compile.
    pub fn get_or_compile(&self, pattern: &str, config: &MatcherConfig) -> JlibResult<Regex> {
        let key = CacheKey::new(pattern, config);

        // Try read lock first for fast path
        if let Ok(cache) = self.cache.read()
            && let Some(regex) = cache.get(&key)
        {
            log::trace!("Regex cache hit for pattern {pattern:?}");
            return Ok(regex.clone());
        }

        let regex = RegexBuilder::new(pattern)
            .case_insensitive(config.case_insensitive)
            .multi_line(config.multi_line)
            .size_limit(config.size_limit)
            .build()
            .map_err(|e| JlibError::invalid_pattern(format!("{pattern}: {e}")))?;

        if let Ok(mut cache) = self.cache.write() {
            if cache.len() < self.capacity {
                cache.insert(key, regex.clone());
            } else {
                log::debug!("Regex cache full ({} entries), not caching {pattern:?}", self.capacity);
            }
        }

        Ok(regex)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.read().map_or(0, |cache| cache.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RegexCache {
    fn default() -> Self {
        Self::new(MatcherConfig::default().cache_capacity)
    }
}

lazy_static::lazy_static! {
    pub static ref REGEX_CACHE: RegexCache = RegexCache::default();
}
