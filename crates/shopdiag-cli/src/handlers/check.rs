//! Check command handler.
//!
//! Runs the diagnostics and prints the report. A store that cannot be
//! configured still gets a report: a failed one, with the same `env` facts.

use std::sync::Arc;

use shopdiag_core::{
    DiagnosticReport, DiagnosticsOptions, DiagnosticsService, EnvironmentSnapshot, QueryTransport,
};
use tracing::{debug, warn};

use crate::bootstrap::{CliConfig, build_transport};
use crate::commands::CheckArgs;
use crate::error::CliError;
use crate::presentation::render;

/// Execute the check command.
///
/// Returns whether the report was successful.
pub async fn execute(config: &CliConfig, args: &CheckArgs) -> Result<bool, CliError> {
    let report = match build_transport(config) {
        Ok(transport) => diagnose(transport, config, args).await,
        Err(err) => {
            warn!(error = %err, "Store connection is not configured");
            DiagnosticReport::failed(
                err.to_string(),
                Vec::new(),
                EnvironmentSnapshot::capture(&config.settings),
            )
        }
    };

    println!("{}", render(&report, args.format)?);
    Ok(report.success)
}

/// Run the diagnostics over an already built transport.
pub async fn diagnose(
    transport: Arc<dyn QueryTransport>,
    config: &CliConfig,
    args: &CheckArgs,
) -> DiagnosticReport {
    let options = DiagnosticsOptions::new()
        .with_collections_limit(args.collections_limit)
        .with_products_limit(args.products_limit);
    debug!(?options, settings = ?config.settings, "Running diagnostics");

    DiagnosticsService::new(transport, &config.settings, options)
        .run(args.collection.as_deref())
        .await
}
