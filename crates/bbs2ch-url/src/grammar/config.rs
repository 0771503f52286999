use crate::error::{Result, UrlError};

/// Shortest thread key accepted by default.
pub const DEFAULT_THREAD_KEY_MIN_DIGITS: usize = 9;
/// Longest thread key accepted by default.
pub const DEFAULT_THREAD_KEY_MAX_DIGITS: usize = 10;

/// Configuration for the grammar matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherConfig {
    /// Inclusive digit-length window for thread keys, as `(min, max)`.
    pub thread_key_digits: (usize, usize),
    /// Run the generic URI syntax check before the grammar.
    pub check_syntax: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            thread_key_digits: (DEFAULT_THREAD_KEY_MIN_DIGITS, DEFAULT_THREAD_KEY_MAX_DIGITS),
            check_syntax: true,
        }
    }
}

impl MatcherConfig {
    /// Create a new matcher configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the accepted thread key length, e.g. `(10, 11)` for the newer key format.
    pub fn with_thread_key_digits(mut self, min: usize, max: usize) -> Self {
        self.thread_key_digits = (min, max);
        self
    }

    /// Enable or disable the generic URI syntax check.
    pub fn with_syntax_check(mut self, enabled: bool) -> Self {
        self.check_syntax = enabled;
        self
    }

    /// Checks that the configuration can produce a usable grammar.
    ///
    /// # Errors
    ///
    /// Returns `UrlError::InvalidConfig` for an empty or zero-length digit window.
    pub fn validate(&self) -> Result<()> {
        let (min, max) = self.thread_key_digits;
        if min == 0 {
            return Err(UrlError::InvalidConfig(
                "thread key must be at least one digit long".into(),
            ));
        }
        if min > max {
            return Err(UrlError::InvalidConfig(format!(
                "thread key digit window {min}..={max} is empty"
            )));
        }
        Ok(())
    }
}
