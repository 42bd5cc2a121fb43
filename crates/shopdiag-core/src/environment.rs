//! Non-sensitive facts about the configured store connection.

use serde::Serialize;

use crate::settings::StoreSettings;

/// What the report may say about the configuration.
///
/// Holds the token's length, never its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentSnapshot {
    pub store_domain: String,
    pub has_token: bool,
    pub token_length: usize,
}

impl EnvironmentSnapshot {
    /// Read the settings once and keep only derived values.
    ///
    /// `token_length` counts characters, not bytes. An empty token is
    /// reported the same as a missing one.
    pub fn capture(settings: &StoreSettings) -> Self {
        let token_length = settings
            .storefront_token
            .as_deref()
            .map_or(0, |token| token.chars().count());

        Self {
            store_domain: settings.store_domain.clone(),
            has_token: token_length > 0,
            token_length,
        }
    }
}
