//! Typed errors for the traversal engine.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors produced by a [`Page`](crate::traits::page::Page) capability
/// implementation.
///
/// The page layer is abstract (a real implementation wraps a browser or an
/// HTTP client), so causes are carried as strings rather than concrete
/// backend error types.
#[derive(Debug, Error)]
pub enum PageError {
    /// Navigation to a URL failed
    #[error("navigation failed for {url}: {reason}")]
    Navigation { url: String, reason: String },

    /// The load-complete condition was never observed
    #[error("page load failed: {0}")]
    Load(String),

    /// A selector query failed during evaluation
    #[error("selector query failed for `{selector}`: {reason}")]
    Query { selector: String, reason: String },

    /// Reading text or an attribute from an element handle failed
    #[error("element read failed: {0}")]
    Element(String),
}

/// Errors that can occur while walking listings.
///
/// A `WalkError` is item-level or run-level depending on where it is
/// caught: the walker catches consumer errors per item, the traversal
/// controller catches everything else once at the top.
#[derive(Debug, Error)]
pub enum WalkError {
    /// The underlying page capability failed
    #[error("page error: {0}")]
    Page(#[from] PageError),

    /// A seed or base URL could not be parsed
    #[error("invalid URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Errors from the shared coordination store.
#[derive(Debug, Error)]
pub enum SignalError {
    /// Backend write failed
    #[error("signal store error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for page operations.
pub type PageResult<T> = std::result::Result<T, PageError>;

/// Result type alias for walk operations.
pub type WalkResult<T> = std::result::Result<T, WalkError>;

/// Result type alias for coordination-store operations.
pub type SignalResult<T> = std::result::Result<T, SignalError>;
