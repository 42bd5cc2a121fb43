//! Runs a single probe against the transport.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use crate::domain::{Probe, ProbeFailure, ProbeOutcome};
use crate::ports::QueryTransport;

/// Executes one probe and turns every error into a [`ProbeOutcome::Failure`].
#[derive(Clone)]
pub struct ProbeRunner {
    transport: Arc<dyn QueryTransport>,
}

impl ProbeRunner {
    pub fn new(transport: Arc<dyn QueryTransport>) -> Self {
        Self { transport }
    }

    /// Run the probe. One round trip, no retries.
    pub async fn run(&self, probe: &Probe) -> ProbeOutcome {
        let started = Instant::now();
        debug!(probe = %probe.name, "Running probe");

        match self
            .transport
            .query(&probe.document, probe.variables.clone())
            .await
        {
            Ok(data) => {
                debug!(probe = %probe.name, elapsed = ?started.elapsed(), "Probe succeeded");
                ProbeOutcome::Success(data)
            }
            Err(err) => {
                warn!(probe = %probe.name, elapsed = ?started.elapsed(), error = %err, "Probe failed");
                ProbeOutcome::Failure(ProbeFailure::from_error(&probe.name, &err))
            }
        }
    }
}
