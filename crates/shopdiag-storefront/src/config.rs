//! Public configuration for the Storefront client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config is derived from this.

use std::fmt;
use std::time::Duration;

/// Storefront API version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "2024-10";

/// Configuration for the Storefront client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use shopdiag_storefront::StorefrontClientConfig;
/// use std::time::Duration;
///
/// let config = StorefrontClientConfig::new()
///     .with_store_domain("demo.myshopify.com")
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Clone)]
pub struct StorefrontClientConfig {
    /// Store domain, with or without a scheme
    pub(crate) store_domain: String,
    /// API version segment of the endpoint path
    pub(crate) api_version: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Storefront access token
    pub(crate) token: Option<String>,
}

impl Default for StorefrontClientConfig {
    fn default() -> Self {
        Self {
            store_domain: String::new(),
            api_version: DEFAULT_API_VERSION.to_string(),
            user_agent: concat!("shopdiag-storefront/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            token: None,
        }
    }
}

impl fmt::Debug for StorefrontClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorefrontClientConfig")
            .field("store_domain", &self.store_domain)
            .field("api_version", &self.api_version)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl StorefrontClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the store domain, e.g. `demo.myshopify.com`.
    #[must_use]
    pub fn with_store_domain(mut self, domain: impl Into<String>) -> Self {
        self.store_domain = domain.into();
        self
    }

    /// Set the API version.
    ///
    /// Defaults to [`DEFAULT_API_VERSION`].
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the Storefront access token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set an optional access token. Empty tokens are treated as absent.
    #[must_use]
    pub fn with_optional_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }
}
