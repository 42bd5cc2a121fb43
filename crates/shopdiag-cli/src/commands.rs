//! Subcommand definitions.

use clap::{Args, Subcommand, ValueEnum};
use shopdiag_core::settings::{DEFAULT_COLLECTIONS_LIMIT, DEFAULT_PRODUCTS_LIMIT};

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Probe the store and print a diagnostic report
    Check(CheckArgs),
    /// Print the configuration facts a report would include, without probing
    Env,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Also fetch this collection (by handle) with its products
    #[arg(short = 'c', long = "collection", value_name = "HANDLE")]
    pub collection: Option<String>,

    /// Number of collections to list
    #[arg(long = "collections-limit", default_value_t = DEFAULT_COLLECTIONS_LIMIT)]
    pub collections_limit: u32,

    /// Number of products to fetch for --collection
    #[arg(long = "products-limit", default_value_t = DEFAULT_PRODUCTS_LIMIT)]
    pub products_limit: u32,

    /// Output format
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Human-readable summary
    Text,
}
