#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod environment;
pub mod ports;
pub mod queries;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    CollectionDetail, CollectionDetails, CollectionSummary, DiagnosticReport, Image, Money,
    PageInfo, PriceRange, Probe, ProbeFailure, ProbeOutcome, ProbeResults, ProductConnection,
    ProductSummary, ReportError, Shop,
};
pub use environment::EnvironmentSnapshot;
pub use ports::{QueryTransport, TransportError, TransportResult};
pub use services::{Aggregator, DetailFetcher, DiagnosticsService, ProbeRunner, ReportBuilder};
pub use settings::{DiagnosticsOptions, StoreSettings};

// Silence unused dev-dependency warnings
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio_test as _;
