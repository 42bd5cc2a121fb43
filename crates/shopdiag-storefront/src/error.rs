//! Internal error types for Storefront operations.
//!
//! These errors are mapped to the core `TransportError` at the port
//! boundary; only client construction returns them directly.

use thiserror::Error;

/// Result type alias for Storefront operations.
pub type StorefrontResult<T> = Result<T, StorefrontError>;

/// Errors related to Storefront API operations.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// API request failed with an HTTP error status.
    #[error("Storefront API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The GraphQL response carried an `errors` array.
    #[error("{}", messages.join("; "))]
    Query {
        /// The `message` of each reported error
        messages: Vec<String>,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from Storefront API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// No store domain was configured.
    #[error("Store domain is not configured")]
    MissingStoreDomain,

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
