//! Matcher configuration
//!
//! Settings for the regex-backed matcher adapter. Flags correspond to the
//! query language's `/pattern/i` and `/pattern/m` regex literal flags.

use serde::{Deserialize, Serialize};

/// Upper bound for the compiled program size of a single pattern (256 MiB)
const MAX_SIZE_LIMIT: usize = 256 * 1024 * 1024;

/// Upper bound for the number of cached compiled patterns
const MAX_CACHE_CAPACITY: usize = 4096;

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid size limit: {0}")]
    InvalidSizeLimit(String),

    #[error("Invalid cache capacity: {0}")]
    InvalidCacheCapacity(String),
}

/// Regex matcher configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// `i` flag
    pub case_insensitive: bool,
    /// `m` flag: `^` and `$` match at line boundaries
    pub multi_line: bool,
    /// Compiled program size limit in bytes
    pub size_limit: usize,
    /// Number of compiled patterns kept by a [`crate::matcher::RegexCache`]
    pub cache_capacity: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            multi_line: false,
            size_limit: 10 * 1024 * 1024,
            cache_capacity: 32,
        }
    }
}

impl MatcherConfig {
    #[must_use]
    pub fn case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = enabled;
        self
    }

    #[must_use]
    pub fn multi_line(mut self, enabled: bool) -> Self {
        self.multi_line = enabled;
        self
    }

    #[must_use]
    pub fn size_limit(mut self, bytes: usize) -> Self {
        self.size_limit = bytes;
        self
    }

    #[must_use]
    pub fn cache_capacity(mut self, entries: usize) -> Self {
        self.cache_capacity = entries;
        self
    }

    /// Build a configuration from regex literal flags such as `"im"`
    ///
    /// # Errors
    ///
    /// Returns the first flag character that is neither `i` nor `m`.
    pub fn from_flags(flags: &str) -> Result<Self, char> {
        let mut config = Self::default();
        for flag in flags.chars() {
            match flag {
                'i' => config.case_insensitive = true,
                'm' => config.multi_line = true,
                other => return Err(other),
            }
        }
        Ok(config)
    }

    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidSizeLimit` - if the size limit is zero or exceeds 256 MiB
    /// - `InvalidCacheCapacity` - if the cache capacity is zero or exceeds 4096
    pub fn validate(&self) -> ConfigResult<()> {
        if self.size_limit == 0 {
            return Err(ConfigurationError::InvalidSizeLimit(
                "size_limit cannot be zero".to_string(),
            ));
        }

        if self.size_limit > MAX_SIZE_LIMIT {
            return Err(ConfigurationError::InvalidSizeLimit(format!(
                "size_limit cannot exceed {MAX_SIZE_LIMIT} bytes"
            )));
        }

        if self.cache_capacity == 0 {
            return Err(ConfigurationError::InvalidCacheCapacity(
                "cache_capacity cannot be zero".to_string(),
            ));
        }

        if self.cache_capacity > MAX_CACHE_CAPACITY {
            return Err(ConfigurationError::InvalidCacheCapacity(format!(
                "cache_capacity cannot exceed {MAX_CACHE_CAPACITY} entries"
            )));
        }

        Ok(())
    }
}
