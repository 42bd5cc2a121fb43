//! Domain types for storefront diagnostics.

mod catalog;
mod probe;
mod report;

pub use catalog::{
    CollectionDetail, CollectionSummary, Image, Money, PageInfo, PriceRange, ProductConnection,
    ProductSummary, Shop,
};
pub use probe::{Probe, ProbeFailure, ProbeOutcome, ProbeResults};
pub use report::{CollectionDetails, DiagnosticReport, ReportError};
