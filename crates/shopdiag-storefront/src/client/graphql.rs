//! GraphQL execution for the Storefront client.

use serde_json::Value;
use tracing::debug;

use crate::error::{StorefrontError, StorefrontResult};
use crate::http::HttpBackend;
use crate::models::{GraphQlRequest, GraphQlResponse, operation_name};

use super::StorefrontClient;

impl<B: HttpBackend> StorefrontClient<B> {
    /// Execute one query and return its `data` member.
    ///
    /// A response with a non-empty `errors` array is a failure even if it
    /// also carries partial data.
    pub(crate) async fn execute(&self, document: &str, variables: &Value) -> StorefrontResult<Value> {
        let operation = operation_name(document);
        debug!(operation = %operation, endpoint = %self.config.endpoint, "Executing storefront query");

        let request = GraphQlRequest {
            query: document,
            variables,
        };
        let response: GraphQlResponse = self
            .backend
            .post_json(&self.config.endpoint, &request)
            .await?;

        if !response.errors.is_empty() {
            let codes: Vec<&str> = response.errors.iter().filter_map(|e| e.code()).collect();
            debug!(operation = %operation, ?codes, "Storefront query returned errors");
            return Err(StorefrontError::Query {
                messages: response.errors.into_iter().map(|e| e.message).collect(),
            });
        }

        response.data.ok_or_else(|| StorefrontError::InvalidResponse {
            message: format!("Response to {operation} has neither data nor errors"),
        })
    }
}
