//! Endpoint construction for the Storefront API.

use crate::error::{StorefrontError, StorefrontResult};
use url::Url;

/// Build `https://{domain}/api/{version}/graphql.json`.
///
/// The domain may be given with a scheme and trailing slashes. An explicit
/// `http://` scheme is kept so local mock servers can be targeted.
pub fn build_endpoint(store_domain: &str, api_version: &str) -> StorefrontResult<Url> {
    let trimmed = store_domain.trim();

    let (scheme, rest) = if let Some(rest) = trimmed.strip_prefix("http://") {
        ("http", rest)
    } else {
        ("https", trimmed.strip_prefix("https://").unwrap_or(trimmed))
    };
    let host = rest.trim_end_matches('/');

    if host.is_empty() {
        return Err(StorefrontError::MissingStoreDomain);
    }

    let version = api_version.trim().trim_matches('/');
    let url = Url::parse(&format!("{scheme}://{host}/api/{version}/graphql.json"))?;
    Ok(url)
}
