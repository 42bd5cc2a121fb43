//! Port trait implementation for `StorefrontClient`.
//!
//! This module implements the core-owned `QueryTransport` trait and maps
//! internal errors to `TransportError`.

use std::error::Error as _;

use async_trait::async_trait;
use serde_json::Value;
use shopdiag_core::ports::{QueryTransport, TransportError, TransportResult};

use crate::client::StorefrontClient;
use crate::error::StorefrontError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `StorefrontError` to core `TransportError`.
fn map_error(err: StorefrontError) -> TransportError {
    match err {
        StorefrontError::ApiRequestFailed { status, url } => match status {
            401 | 403 => TransportError::Unauthorized { status },
            429 => TransportError::RateLimited,
            _ => TransportError::Http {
                status,
                message: url,
            },
        },
        StorefrontError::Query { messages } => TransportError::Query { messages },
        StorefrontError::InvalidResponse { message } => TransportError::InvalidResponse { message },
        StorefrontError::MissingStoreDomain => TransportError::Configuration {
            message: StorefrontError::MissingStoreDomain.to_string(),
        },
        StorefrontError::Network(e) => TransportError::Network {
            message: describe_network_error(&e),
        },
        StorefrontError::InvalidUrl(e) => TransportError::Configuration {
            message: e.to_string(),
        },
        StorefrontError::JsonParse(e) => TransportError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

/// Flatten a reqwest error and its sources into one line.
///
/// reqwest's own message is often just "error sending request"; the cause
/// (DNS failure, refused connection, TLS) is further down the chain.
fn describe_network_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        return "request timed out".to_string();
    }

    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !parts.iter().any(|part| part.contains(&text)) {
            parts.push(text);
        }
        source = cause.source();
    }
    parts.join(": ")
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> QueryTransport for StorefrontClient<B> {
    async fn query(&self, document: &str, variables: Value) -> TransportResult<Value> {
        self.execute(document, &variables).await.map_err(map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::StorefrontClient;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use crate::models::StorefrontConfig;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    fn client(backend: FakeBackend) -> StorefrontClient<FakeBackend> {
        let config = StorefrontConfig {
            endpoint: url::Url::parse("https://demo.myshopify.com/api/2024-10/graphql.json")
                .unwrap(),
            token: None,
            timeout: Duration::from_secs(30),
            user_agent: "test".to_string(),
        };
        StorefrontClient::with_backend(config, backend)
    }

    #[test]
    fn test_map_error_unauthorized() {
        for status in [401, 403] {
            let err = StorefrontError::ApiRequestFailed {
                status,
                url: "https://demo.myshopify.com/api/2024-10/graphql.json".to_string(),
            };
            assert!(matches!(
                map_error(err),
                TransportError::Unauthorized { status: s } if s == status
            ));
        }
    }

    #[test]
    fn test_map_error_429() {
        let err = StorefrontError::ApiRequestFailed {
            status: 429,
            url: "https://example.com".to_string(),
        };
        assert!(matches!(map_error(err), TransportError::RateLimited));
    }

    #[test]
    fn test_map_error_other_status() {
        let err = StorefrontError::ApiRequestFailed {
            status: 502,
            url: "https://example.com".to_string(),
        };
        match map_error(err) {
            TransportError::Http { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "https://example.com");
            }
            other => panic!("Expected Http, got {other:?}"),
        }
    }

    #[test]
    fn test_map_error_json_parse_is_invalid_response() {
        let err = serde_json::from_str::<Value>("<html>maintenance</html>").unwrap_err();
        assert!(matches!(
            map_error(StorefrontError::JsonParse(err)),
            TransportError::InvalidResponse { .. }
        ));
    }

    #[test]
    fn test_map_error_configuration() {
        assert!(matches!(
            map_error(StorefrontError::MissingStoreDomain),
            TransportError::Configuration { .. }
        ));
    }

    #[test]
    fn test_query_through_port() {
        let backend = FakeBackend::new().with_response(
            "TestConnection",
            CannedResponse::Json(json!({"data": {"shop": {"id": "1", "name": "Demo"}}})),
        );
        let transport: Arc<dyn QueryTransport> = Arc::new(client(backend));

        let data = tokio_test::block_on(
            transport.query("query TestConnection { shop { id name } }", json!({})),
        )
        .unwrap();
        assert_eq!(data["shop"]["name"], "Demo");
    }

    #[tokio::test]
    async fn test_graphql_errors_surface_as_query_error() {
        let backend = FakeBackend::new().with_response(
            "GetCollections",
            CannedResponse::Json(json!({"errors": [{"message": "Field 'colections' doesn't exist"}]})),
        );
        let transport = client(backend);

        let err = transport
            .query("query GetCollections { colections { id } }", json!({}))
            .await
            .unwrap_err();

        match err {
            TransportError::Query { messages } => {
                assert_eq!(messages, vec!["Field 'colections' doesn't exist"]);
            }
            other => panic!("Expected Query, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_http_status_surfaces_through_port() {
        let backend = FakeBackend::new().with_response("TestConnection", CannedResponse::Status(401));
        let err = client(backend)
            .query("query TestConnection { shop { id } }", json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Unauthorized { status: 401 }));
    }
}
