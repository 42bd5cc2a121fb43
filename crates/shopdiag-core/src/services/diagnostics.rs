//! Diagnostics service - runs the full probe sequence for one request.

use std::sync::Arc;

use tracing::{error, info};

use super::{Aggregator, DetailFetcher, ProbeRunner, ReportBuilder};
use crate::domain::{CollectionDetails, DiagnosticReport};
use crate::environment::EnvironmentSnapshot;
use crate::ports::QueryTransport;
use crate::queries::mandatory_probes;
use crate::settings::{DiagnosticsOptions, StoreSettings};

/// Produces a [`DiagnosticReport`] per request. Never returns an error.
pub struct DiagnosticsService {
    aggregator: Aggregator,
    detail: DetailFetcher,
    env: EnvironmentSnapshot,
    options: DiagnosticsOptions,
}

impl DiagnosticsService {
    /// Create a new diagnostics service.
    ///
    /// The settings are read once here; only the derived
    /// [`EnvironmentSnapshot`] is kept.
    pub fn new(
        transport: Arc<dyn QueryTransport>,
        settings: &StoreSettings,
        options: DiagnosticsOptions,
    ) -> Self {
        let runner = ProbeRunner::new(transport);
        Self {
            aggregator: Aggregator::new(runner.clone()),
            detail: DetailFetcher::new(runner, options),
            env: EnvironmentSnapshot::capture(settings),
            options,
        }
    }

    pub const fn environment(&self) -> &EnvironmentSnapshot {
        &self.env
    }

    /// Run the mandatory probes, then the detail probe if `handle` is set.
    ///
    /// The detail probe is skipped when a mandatory probe failed, since the
    /// failed report has no place for it.
    pub async fn run(&self, handle: Option<&str>) -> DiagnosticReport {
        let results = self
            .aggregator
            .run_all(mandatory_probes(&self.options))
            .await;

        let details = if results.is_success() {
            self.detail.fetch(handle).await
        } else {
            CollectionDetails::NotRequested
        };

        let report = match ReportBuilder::build(&results, details, self.env.clone()) {
            Ok(report) => report,
            Err(err) => {
                error!(error = %err, "Could not assemble report");
                DiagnosticReport::failed(err.to_string(), Vec::new(), self.env.clone())
            }
        };

        info!(
            success = report.success,
            collections = report.collections.len(),
            store_domain = %self.env.store_domain,
            "Diagnostics completed"
        );
        report
    }
}
