//! Concurrent fan-out over the mandatory probe set.

use std::time::Instant;

use futures_util::future::join_all;
use tracing::{debug, warn};

use super::ProbeRunner;
use crate::domain::{Probe, ProbeFailure, ProbeOutcome, ProbeResults};

/// Runs a set of probes concurrently and waits for all of them.
///
/// Every probe gets its own tokio task. A failing or panicking probe
/// does not cancel its siblings, and results come back in declaration
/// order whatever order the tasks finish in.
#[derive(Clone)]
pub struct Aggregator {
    runner: ProbeRunner,
}

impl Aggregator {
    pub const fn new(runner: ProbeRunner) -> Self {
        Self { runner }
    }

    /// Run all probes and join on every one of them.
    pub async fn run_all(&self, probes: Vec<Probe>) -> ProbeResults {
        let started = Instant::now();
        let names: Vec<String> = probes.iter().map(|probe| probe.name.clone()).collect();

        let handles: Vec<_> = probes
            .into_iter()
            .map(|probe| {
                let runner = self.runner.clone();
                tokio::spawn(async move { runner.run(&probe).await })
            })
            .collect();

        let joined = join_all(handles).await;

        let results: ProbeResults = names
            .into_iter()
            .zip(joined)
            .map(|(name, joined)| {
                let outcome = joined.unwrap_or_else(|err| {
                    warn!(probe = %name, error = %err, "Probe task did not complete");
                    ProbeOutcome::Failure(ProbeFailure::new(
                        &name,
                        format!("Probe '{name}' did not complete: {err}"),
                    ))
                });
                (name, outcome)
            })
            .collect();

        debug!(
            probes = results.len(),
            success = results.is_success(),
            elapsed = ?started.elapsed(),
            "Probe set completed"
        );
        results
    }
}
