//! Error types for pagemeta.
//!
//! This module defines the error types returned by fetch and extraction
//! operations.

/// Error type for fetch and extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The remote content could not be retrieved (network failure).
    #[error("failed to retrieve content: {0}")]
    Fetch(String),

    /// The fetch succeeded but the response body was empty.
    #[error("there was no content to parse")]
    EmptyContent,

    /// HTML parsing failed.
    #[error("HTML parsing failed: {0}")]
    Parse(String),

    /// The input URL is not a valid absolute URL.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Result type alias for fetch and extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
