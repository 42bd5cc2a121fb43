#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type alias - DefaultStorefrontClient is meant to
// be used through the QueryTransport trait, not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultStorefrontClient;

// Configuration
pub use config::{DEFAULT_API_VERSION, StorefrontClientConfig};

// Errors surfaced by client construction
pub use error::StorefrontError;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio as _;
#[cfg(test)]
use tokio_test as _;
