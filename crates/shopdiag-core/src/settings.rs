//! Resolved configuration consumed by the diagnostics service.
//!
//! Loading these values (flags, environment, `.env`) is the caller's job.

use std::fmt;

/// Default number of collections listed by the collections probe.
pub const DEFAULT_COLLECTIONS_LIMIT: u32 = 20;

/// Default number of products fetched by the detail probe.
pub const DEFAULT_PRODUCTS_LIMIT: u32 = 10;

/// Page size ceiling enforced by the Storefront API.
const MAX_PAGE_SIZE: u32 = 250;

/// Store connection settings.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct StoreSettings {
    /// Store domain, e.g. `demo.myshopify.com`
    pub store_domain: String,
    /// Storefront API access token
    pub storefront_token: Option<String>,
}

impl StoreSettings {
    pub fn new(store_domain: impl Into<String>, storefront_token: Option<String>) -> Self {
        Self {
            store_domain: store_domain.into(),
            storefront_token,
        }
    }
}

// The token must never reach logs.
impl fmt::Debug for StoreSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreSettings")
            .field("store_domain", &self.store_domain)
            .field(
                "storefront_token",
                &self.storefront_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Tunables for the probe set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticsOptions {
    pub collections_limit: u32,
    pub products_limit: u32,
}

impl Default for DiagnosticsOptions {
    fn default() -> Self {
        Self {
            collections_limit: DEFAULT_COLLECTIONS_LIMIT,
            products_limit: DEFAULT_PRODUCTS_LIMIT,
        }
    }
}

impl DiagnosticsOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            collections_limit: DEFAULT_COLLECTIONS_LIMIT,
            products_limit: DEFAULT_PRODUCTS_LIMIT,
        }
    }

    /// Set the collection page size, clamped to `1..=250`.
    #[must_use]
    pub fn with_collections_limit(mut self, limit: u32) -> Self {
        self.collections_limit = limit.clamp(1, MAX_PAGE_SIZE);
        self
    }

    /// Set the product page size, clamped to `1..=250`.
    #[must_use]
    pub fn with_products_limit(mut self, limit: u32) -> Self {
        self.products_limit = limit.clamp(1, MAX_PAGE_SIZE);
        self
    }
}
