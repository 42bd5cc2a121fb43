//! Internal request/response types for the Storefront GraphQL endpoint.
//!
//! These types are internal to `shopdiag-storefront`. Consumers only see the
//! `data` payload as a `serde_json::Value`.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the Storefront client.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Fully built GraphQL endpoint
    pub endpoint: Url,
    /// Storefront access token
    pub token: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

// ============================================================================
// GraphQL envelope
// ============================================================================

/// Body of a GraphQL POST.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: &'a Value,
}

/// A GraphQL response. Either member may be absent.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// One entry of the `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default)]
    pub extensions: Option<Value>,
}

impl GraphQlError {
    /// Error code from `extensions.code`, e.g. `THROTTLED`.
    pub fn code(&self) -> Option<&str> {
        self.extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .and_then(Value::as_str)
    }
}

/// Operation name of a query document, for logging.
pub fn operation_name(document: &str) -> &str {
    document
        .split_whitespace()
        .skip_while(|token| *token != "query" && *token != "mutation")
        .nth(1)
        .and_then(|name| name.split(['(', '{']).next())
        .filter(|name| !name.is_empty())
        .unwrap_or("anonymous")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serialization() {
        let variables = json!({"handle": "summer-sale"});
        let request = GraphQlRequest {
            query: "query Q { shop { id } }",
            variables: &variables,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"query": "query Q { shop { id } }", "variables": {"handle": "summer-sale"}})
        );
    }

    #[test]
    fn test_response_with_errors() {
        let response: GraphQlResponse = serde_json::from_value(json!({
            "errors": [{
                "message": "Throttled",
                "extensions": {"code": "THROTTLED"}
            }]
        }))
        .unwrap();

        assert!(response.data.is_none());
        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].code(), Some("THROTTLED"));
    }

    #[test]
    fn test_response_with_data_only() {
        let response: GraphQlResponse =
            serde_json::from_value(json!({"data": {"shop": {"name": "Demo"}}})).unwrap();
        assert!(response.errors.is_empty());
        assert_eq!(response.data.unwrap()["shop"]["name"], "Demo");
    }

    #[test]
    fn test_operation_name() {
        assert_eq!(operation_name("query TestConnection {\n shop { id } }"), "TestConnection");
        assert_eq!(
            operation_name("query GetCollectionDetails($handle: String!) { x }"),
            "GetCollectionDetails"
        );
        assert_eq!(operation_name("{ shop { id } }"), "anonymous");
    }
}
