//! HTTP backend abstraction for the Storefront API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest and makes exactly one request per call.

use crate::error::{StorefrontError, StorefrontResult};
use crate::models::{GraphQlResponse, StorefrontConfig};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::trace;
use url::Url;

/// Header carrying the public Storefront access token.
pub const STOREFRONT_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can POST JSON and decode a JSON reply.
///
/// This is an implementation detail - external code should use the
/// `QueryTransport` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// POST `body` as JSON to `url` and deserialize the response.
    async fn post_json<B, T>(&self, url: &Url, body: &B) -> StorefrontResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// The request timeout comes from the client configuration. Bodies are
/// decoded by [`decode_body`].
pub struct ReqwestBackend {
    client: reqwest::Client,
    auth_token: Option<String>,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &StorefrontConfig) -> StorefrontResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            auth_token: config.token.clone(),
        })
    }

    /// Build a request with the access token header, if configured.
    fn build_request(&self, url: &Url) -> reqwest::RequestBuilder {
        let mut request = self
            .client
            .post(url.as_str())
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(ref token) = self.auth_token {
            request = request.header(STOREFRONT_TOKEN_HEADER, token);
        }
        request
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn post_json<B, T>(&self, url: &Url, body: &B) -> StorefrontResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let response = self.build_request(url).json(body).send().await?;
        let status = response.status();
        trace!(%status, %url, "Storefront response received");

        let text = response.text().await?;
        decode_body(status.as_u16(), url, &text)
    }
}

/// Decode a response body.
///
/// Error statuses keep the service's own `errors[].message` when the body
/// carries them; otherwise they become [`StorefrontError::ApiRequestFailed`].
/// A success body that is not the expected JSON is a
/// [`StorefrontError::JsonParse`].
pub(crate) fn decode_body<T: DeserializeOwned>(
    status: u16,
    url: &Url,
    text: &str,
) -> StorefrontResult<T> {
    if !(200..300).contains(&status) {
        let messages: Vec<String> = serde_json::from_str::<GraphQlResponse>(text)
            .map(|body| body.errors.into_iter().map(|e| e.message).collect())
            .unwrap_or_default();
        if messages.is_empty() {
            return Err(StorefrontError::ApiRequestFailed {
                status,
                url: url.to_string(),
            });
        }
        return Err(StorefrontError::Query { messages });
    }

    Ok(serde_json::from_str(text)?)
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
