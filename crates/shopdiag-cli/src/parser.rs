//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options. Store
//! settings fall back to the `PUBLIC_*` environment variables.

use clap::Parser;
use shopdiag_storefront::DEFAULT_API_VERSION;

use crate::commands::Commands;

/// Command-line interface for storefront connectivity diagnostics.
#[derive(Parser)]
#[command(name = "shopdiag")]
#[command(about = "Check connectivity to a Storefront API and inspect its catalog")]
#[command(version)]
pub struct Cli {
    /// Store domain, e.g. demo.myshopify.com
    #[arg(long = "store-domain", env = "PUBLIC_STORE_DOMAIN", global = true)]
    pub store_domain: Option<String>,

    /// Storefront API access token
    #[arg(
        long = "token",
        env = "PUBLIC_STOREFRONT_API_TOKEN",
        global = true,
        hide_env_values = true
    )]
    pub token: Option<String>,

    /// Storefront API version
    #[arg(
        long = "api-version",
        env = "PUBLIC_STOREFRONT_API_VERSION",
        global = true,
        default_value = DEFAULT_API_VERSION
    )]
    pub api_version: String,

    /// HTTP request timeout in seconds
    #[arg(long = "timeout", value_name = "SECONDS", global = true, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
