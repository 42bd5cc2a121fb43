//! Merges probe outcomes into a [`DiagnosticReport`].

use serde::de::DeserializeOwned;

use crate::domain::{
    CollectionDetails, CollectionSummary, DiagnosticReport, ProbeResults, ReportError, Shop,
};
use crate::environment::EnvironmentSnapshot;
use crate::queries::{COLLECTIONS_PROBE, SHOP_PROBE};

/// Pure merge of outcomes, detail and environment. No I/O.
pub struct ReportBuilder;

impl ReportBuilder {
    /// Build the report.
    ///
    /// If any mandatory probe failed, the report is failed with the first
    /// failure in declaration order and `details` is dropped. Otherwise the
    /// shop and collection payloads are decoded; a payload that does not
    /// decode is a [`ReportError`].
    pub fn build(
        results: &ProbeResults,
        details: CollectionDetails,
        env: EnvironmentSnapshot,
    ) -> Result<DiagnosticReport, ReportError> {
        if let Some(failure) = results.first_failure() {
            return Ok(DiagnosticReport::failed(
                failure.message.clone(),
                failure.chain.clone(),
                env,
            ));
        }

        let shop: Option<Shop> = decode(results, SHOP_PROBE, "/shop")?;
        let collections: Vec<CollectionSummary> =
            decode(results, COLLECTIONS_PROBE, "/collections/nodes")?;

        Ok(DiagnosticReport {
            success: true,
            shop,
            collections,
            collection_details: details,
            env,
            error: None,
            stack: Vec::new(),
        })
    }
}

fn decode<T: DeserializeOwned>(
    results: &ProbeResults,
    probe: &str,
    pointer: &str,
) -> Result<T, ReportError> {
    let data = results
        .get(probe)
        .and_then(|outcome| outcome.data())
        .ok_or_else(|| ReportError::MissingOutcome {
            probe: probe.to_string(),
        })?;

    let value = data
        .pointer(pointer)
        .ok_or_else(|| ReportError::MalformedPayload {
            probe: probe.to_string(),
            message: format!("missing '{pointer}'"),
        })?;

    T::deserialize(value).map_err(|err| ReportError::MalformedPayload {
        probe: probe.to_string(),
        message: err.to_string(),
    })
}
