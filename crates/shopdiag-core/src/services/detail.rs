//! The optional collection-detail probe.

use serde_json::Value;
use tracing::debug;

use super::ProbeRunner;
use crate::domain::{CollectionDetail, CollectionDetails, ProbeOutcome};
use crate::queries::collection_detail_probe;
use crate::settings::DiagnosticsOptions;

/// Fetches one collection by handle.
///
/// Whatever happens here is reported inline and never fails the report.
#[derive(Clone)]
pub struct DetailFetcher {
    runner: ProbeRunner,
    options: DiagnosticsOptions,
}

impl DetailFetcher {
    pub const fn new(runner: ProbeRunner, options: DiagnosticsOptions) -> Self {
        Self { runner, options }
    }

    /// Fetch the collection for `handle`.
    ///
    /// A missing or blank handle issues no probe and yields
    /// [`CollectionDetails::NotRequested`]. Any other handle is sent as given.
    pub async fn fetch(&self, handle: Option<&str>) -> CollectionDetails {
        let Some(handle) = handle.filter(|h| !h.trim().is_empty()) else {
            return CollectionDetails::NotRequested;
        };

        let probe = collection_detail_probe(handle, &self.options);
        match self.runner.run(&probe).await {
            ProbeOutcome::Success(data) => decode_detail(handle, data),
            ProbeOutcome::Failure(failure) => CollectionDetails::Failed {
                message: failure.message,
            },
        }
    }
}

fn decode_detail(handle: &str, mut data: Value) -> CollectionDetails {
    match data.get_mut("collection").map(Value::take) {
        None => CollectionDetails::Failed {
            message: "Response is missing the 'collection' field".to_string(),
        },
        Some(Value::Null) => {
            debug!(handle = %handle, "Collection not found");
            CollectionDetails::NotFound {
                handle: handle.to_string(),
            }
        }
        Some(collection) => match serde_json::from_value::<CollectionDetail>(collection) {
            Ok(detail) => CollectionDetails::Found(Box::new(detail)),
            Err(err) => CollectionDetails::Failed {
                message: format!("Malformed collection payload: {err}"),
            },
        },
    }
}
