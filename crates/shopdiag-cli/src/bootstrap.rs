//! CLI bootstrap - the composition root.
//!
//! This module is the only place where the Storefront adapter is wired to
//! the core diagnostics service. Handlers receive a [`CliConfig`] and ask
//! for a transport when they need one.

use std::sync::Arc;
use std::time::Duration;

use shopdiag_core::{QueryTransport, StoreSettings};
use shopdiag_storefront::{DefaultStorefrontClient, StorefrontClientConfig};

use crate::error::CliError;
use crate::parser::Cli;

/// Resolved configuration for one CLI invocation.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Store domain and token, as loaded from flags or environment.
    pub settings: StoreSettings,
    /// Storefront API version.
    pub api_version: String,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl CliConfig {
    /// Build the configuration from parsed arguments.
    ///
    /// Domain and token are kept exactly as configured, so the reported
    /// environment facts describe the real values. Only an empty token
    /// counts as no token.
    pub fn from_cli(cli: &Cli) -> Self {
        let store_domain = cli.store_domain.clone().unwrap_or_default();
        let token = cli.token.clone().filter(|t| !t.is_empty());

        Self {
            settings: StoreSettings::new(store_domain, token),
            api_version: cli.api_version.trim().to_string(),
            timeout: Duration::from_secs(cli.timeout_secs.max(1)),
        }
    }

    fn client_config(&self) -> StorefrontClientConfig {
        StorefrontClientConfig::new()
            .with_store_domain(self.settings.store_domain.clone())
            .with_api_version(self.api_version.clone())
            .with_timeout(self.timeout)
            .with_user_agent(concat!("shopdiag/", env!("CARGO_PKG_VERSION")))
            .with_optional_token(self.settings.storefront_token.clone())
    }
}

/// Build the transport the diagnostics service talks through.
///
/// # Errors
///
/// Returns [`CliError::Config`] when the store domain is missing or does
/// not form a valid endpoint URL.
pub fn build_transport(config: &CliConfig) -> Result<Arc<dyn QueryTransport>, CliError> {
    let client = DefaultStorefrontClient::new(&config.client_config())?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use shopdiag_core::EnvironmentSnapshot;

    #[test]
    fn test_from_cli_keeps_values_as_configured() {
        let cli = Cli::parse_from([
            "shopdiag",
            "--store-domain",
            "  demo.myshopify.com ",
            "--token",
            " abc ",
            "env",
        ]);
        let config = CliConfig::from_cli(&cli);
        assert_eq!(config.settings.store_domain, "  demo.myshopify.com ");
        assert_eq!(config.settings.storefront_token.as_deref(), Some(" abc "));
        assert_eq!(config.timeout, Duration::from_secs(30));

        let env = EnvironmentSnapshot::capture(&config.settings);
        assert!(env.has_token);
        assert_eq!(env.token_length, 5);
    }

    #[test]
    fn test_from_cli_whitespace_token_is_present() {
        let cli = Cli::parse_from(["shopdiag", "--token", "   ", "env"]);
        let env = EnvironmentSnapshot::capture(&CliConfig::from_cli(&cli).settings);
        assert!(env.has_token);
        assert_eq!(env.token_length, 3);
    }

    #[test]
    fn test_from_cli_empty_token_is_absent() {
        let cli = Cli::parse_from(["shopdiag", "--token", "", "env"]);
        let config = CliConfig::from_cli(&cli);
        assert!(config.settings.storefront_token.is_none());
    }

    #[test]
    fn test_build_transport_accepts_padded_domain() {
        let config = CliConfig {
            settings: StoreSettings::new("  demo.myshopify.com ", Some(" token ".to_string())),
            api_version: "2024-10".to_string(),
            timeout: Duration::from_secs(5),
        };
        assert!(build_transport(&config).is_ok());
    }

    #[test]
    fn test_build_transport_requires_domain() {
        let config = CliConfig {
            settings: StoreSettings::default(),
            api_version: "2024-10".to_string(),
            timeout: Duration::from_secs(5),
        };
        let Err(err) = build_transport(&config) else {
            panic!("expected a configuration error");
        };
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_build_transport_with_domain() {
        let config = CliConfig {
            settings: StoreSettings::new("demo.myshopify.com", Some("token".to_string())),
            api_version: "2024-10".to_string(),
            timeout: Duration::from_secs(5),
        };
        assert!(build_transport(&config).is_ok());
    }
}
