//! Error types for rss-filter.

use thiserror::Error;

/// Common error type for rss-filter.
#[derive(Error, Debug)]
pub enum RssFilterError {
    /// The `url` query parameter is missing or empty.
    #[error("missing 'url' parameter")]
    MissingUrl,

    /// A query parameter names a field that cannot be filtered on.
    #[error("invalid filter field: {0}")]
    InvalidField(String),

    /// The source feed could not be fetched or parsed.
    ///
    /// The message is surfaced to the caller as-is.
    #[error("{0}")]
    Fetch(String),

    /// The output document could not be serialized.
    #[error("XML encoding error: {0}")]
    Encoding(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl RssFilterError {
    /// Whether this error was caused by the request itself rather than by
    /// the upstream feed or this service.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RssFilterError::MissingUrl | RssFilterError::InvalidField(_)
        )
    }
}

/// Result type alias for rss-filter operations.
pub type Result<T> = std::result::Result<T, RssFilterError>;
