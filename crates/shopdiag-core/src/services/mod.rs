//! Services that run probes and assemble reports.
//!
//! All of them talk to the catalog through `Arc<dyn QueryTransport>`.

mod aggregator;
mod detail;
mod diagnostics;
mod probe_runner;
mod report_builder;

pub use aggregator::Aggregator;
pub use detail::DetailFetcher;
pub use diagnostics::DiagnosticsService;
pub use probe_runner::ProbeRunner;
pub use report_builder::ReportBuilder;
