//! Query transport port trait and its error type.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors from query transport operations.
///
/// These are domain-level errors. Implementation-specific errors (HTTP,
/// JSON decoding) are mapped to these by the adapter.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The service could not be reached.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The service answered with a non-success HTTP status.
    #[error("Request failed with status {status}: {message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Endpoint or body excerpt
        message: String,
    },

    /// The access token was missing or rejected.
    #[error("Unauthorized ({status}): check the storefront access token")]
    Unauthorized {
        /// HTTP status code (401 or 403)
        status: u16,
    },

    /// API rate limit exceeded.
    #[error("Rate limit exceeded, try again later")]
    RateLimited,

    /// The remote service rejected or could not satisfy the query.
    #[error("{}", messages.join("; "))]
    Query {
        /// One message per error reported by the service
        messages: Vec<String>,
    },

    /// The response did not have the expected shape.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// The transport is misconfigured.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Port trait for executing queries against the catalog service.
///
/// # Design
///
/// - `document` is the full query text, `variables` a JSON object
/// - The returned value is the `data` member of the response
/// - No retries: one call is one attempt
/// - Deadlines are the implementation's responsibility
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueryTransport: Send + Sync {
    /// Execute a query document with the given variables.
    async fn query(&self, document: &str, variables: Value) -> TransportResult<Value>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    // Verify the trait is object-safe
    fn _assert_object_safe(_: Arc<dyn QueryTransport>) {}

    #[test]
    fn test_query_error_joins_messages() {
        let err = TransportError::Query {
            messages: vec![
                "Field 'colection' doesn't exist on type 'QueryRoot'".to_string(),
                "Variable $handle is not used".to_string(),
            ],
        };
        assert_eq!(
            err.to_string(),
            "Field 'colection' doesn't exist on type 'QueryRoot'; Variable $handle is not used"
        );
    }

    #[test]
    fn test_error_display() {
        let err = TransportError::Http {
            status: 502,
            message: "https://shop.example/api/2024-10/graphql.json".to_string(),
        };
        assert!(err.to_string().contains("502"));

        let err = TransportError::Unauthorized { status: 401 };
        assert!(err.to_string().contains("access token"));
    }
}
