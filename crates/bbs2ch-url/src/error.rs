use thiserror::Error;

/// Errors reported by the strict matching entry points.
///
/// The lenient `parse` / `is_valid` functions collapse all of these into
/// "no match"; `try_parse` keeps them apart.
#[derive(Debug, Error)]
pub enum UrlError {
    /// The candidate string is empty or contains only whitespace.
    #[error("input is empty or whitespace-only")]
    EmptyInput,

    /// The candidate is not a well-formed URI.
    #[error("malformed URI {input:?}: {source}")]
    Malformed {
        /// The rejected candidate.
        input: String,
        /// Why the generic URI parser refused it.
        #[source]
        source: url::ParseError,
    },

    /// The candidate is a URI, but not one of the 2ch URL shapes.
    #[error("not a 2ch URL: {input:?}")]
    Mismatch {
        /// The rejected candidate.
        input: String,
    },

    /// The grammar pattern failed to compile (only reachable with a custom config).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),

    /// The matcher configuration is unusable.
    #[error("invalid matcher config: {0}")]
    InvalidConfig(String),
}

/// Result type alias for bbs2ch-url operations.
pub type Result<T> = std::result::Result<T, UrlError>;
