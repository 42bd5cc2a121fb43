//! Storefront client for executing GraphQL queries.
//!
//! This module provides the main client interface for interacting with
//! the Storefront API.

mod graphql;

use crate::config::StorefrontClientConfig;
use crate::error::StorefrontResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::StorefrontConfig;
use crate::url::build_endpoint;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default Storefront client using the reqwest HTTP backend.
pub type DefaultStorefrontClient = StorefrontClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the Storefront GraphQL API.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultStorefrontClient` for production code.
pub struct StorefrontClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: StorefrontConfig,
}

impl DefaultStorefrontClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails when the store domain is missing or does not form a valid URL.
    pub fn new(config: &StorefrontClientConfig) -> StorefrontResult<Self> {
        let internal_config = Self::to_internal_config(config)?;
        let backend = ReqwestBackend::new(&internal_config)?;
        Ok(Self {
            backend,
            config: internal_config,
        })
    }

    fn to_internal_config(config: &StorefrontClientConfig) -> StorefrontResult<StorefrontConfig> {
        Ok(StorefrontConfig {
            endpoint: build_endpoint(&config.store_domain, &config.api_version)?,
            token: config
                .token
                .as_deref()
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(str::to_string),
            timeout: config.timeout,
            user_agent: config.user_agent.clone(),
        })
    }
}

impl<B: HttpBackend> StorefrontClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: StorefrontConfig, backend: B) -> Self {
        Self { backend, config }
    }

    /// The GraphQL endpoint this client posts to.
    pub fn endpoint(&self) -> &url::Url {
        &self.config.endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorefrontError;
    use std::time::Duration;

    pub fn test_config() -> StorefrontConfig {
        StorefrontConfig {
            endpoint: url::Url::parse("https://demo.myshopify.com/api/2024-10/graphql.json")
                .unwrap(),
            token: Some("token".to_string()),
            timeout: Duration::from_secs(30),
            user_agent: "test".to_string(),
        }
    }

    #[test]
    fn test_default_client_creation() {
        let config = StorefrontClientConfig::new()
            .with_store_domain("demo.myshopify.com")
            .with_api_version("2025-01");
        let client = DefaultStorefrontClient::new(&config).unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://demo.myshopify.com/api/2025-01/graphql.json"
        );
    }

    #[test]
    fn test_request_token_is_trimmed() {
        let config = StorefrontClientConfig::new()
            .with_store_domain(" demo.myshopify.com ")
            .with_token(" shpat_abc ");
        let internal = DefaultStorefrontClient::to_internal_config(&config).unwrap();
        assert_eq!(internal.token.as_deref(), Some("shpat_abc"));
        assert_eq!(
            internal.endpoint.as_str(),
            "https://demo.myshopify.com/api/2024-10/graphql.json"
        );

        let blank = StorefrontClientConfig::new()
            .with_store_domain("demo.myshopify.com")
            .with_token("   ");
        let internal = DefaultStorefrontClient::to_internal_config(&blank).unwrap();
        assert!(internal.token.is_none());
    }

    #[test]
    fn test_client_requires_domain() {
        let result = DefaultStorefrontClient::new(&StorefrontClientConfig::new());
        assert!(matches!(result, Err(StorefrontError::MissingStoreDomain)));
    }
}
