//! The diagnostic report and its wire shape.

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use thiserror::Error;

use super::catalog::{CollectionDetail, CollectionSummary, Shop};
use crate::environment::EnvironmentSnapshot;

/// Outcome of the optional collection-detail probe.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionDetails {
    /// No handle was supplied; no probe was issued.
    NotRequested,
    Found(Box<CollectionDetail>),
    /// The probe succeeded but the service has no collection with this handle.
    NotFound { handle: String },
    /// The probe failed or its payload could not be decoded.
    Failed { message: String },
}

impl CollectionDetails {
    /// The `{error}` text this outcome serializes with, if any.
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::NotRequested | Self::Found(_) => None,
            Self::NotFound { handle } => Some(format!("Collection '{handle}' not found")),
            Self::Failed { message } => Some(message.clone()),
        }
    }

    pub fn detail(&self) -> Option<&CollectionDetail> {
        match self {
            Self::Found(detail) => Some(detail.as_ref()),
            _ => None,
        }
    }
}

impl Serialize for CollectionDetails {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::NotRequested => serializer.serialize_none(),
            Self::Found(detail) => detail.serialize(serializer),
            Self::NotFound { .. } | Self::Failed { .. } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", &self.error_message())?;
                map.end()
            }
        }
    }
}

/// Errors raised while assembling a report from probe outcomes.
///
/// These indicate a malformed mandatory payload; the diagnostics service
/// turns them into a failed report rather than propagating them.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("No outcome recorded for mandatory probe '{probe}'")]
    MissingOutcome { probe: String },

    #[error("Malformed '{probe}' payload: {message}")]
    MalformedPayload { probe: String, message: String },
}

/// One complete diagnostic run.
///
/// `success` is true iff every mandatory probe succeeded. The detail
/// probe never affects it.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticReport {
    pub success: bool,
    pub shop: Option<Shop>,
    pub collections: Vec<CollectionSummary>,
    pub collection_details: CollectionDetails,
    pub env: EnvironmentSnapshot,
    /// Set only when `success` is false
    pub error: Option<String>,
    /// Error followed by its causes; set only when `success` is false
    pub stack: Vec<String>,
}

impl DiagnosticReport {
    /// A failed report carrying only the error and the environment.
    pub fn failed(message: impl Into<String>, stack: Vec<String>, env: EnvironmentSnapshot) -> Self {
        let message = message.into();
        let stack = if stack.is_empty() {
            vec![message.clone()]
        } else {
            stack
        };
        Self {
            success: false,
            shop: None,
            collections: Vec::new(),
            collection_details: CollectionDetails::NotRequested,
            env,
            error: Some(message),
            stack,
        }
    }
}

impl Serialize for DiagnosticReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.success {
            let mut state = serializer.serialize_struct("DiagnosticReport", 5)?;
            state.serialize_field("success", &true)?;
            state.serialize_field("shop", &self.shop)?;
            state.serialize_field("collections", &self.collections)?;
            state.serialize_field("collectionDetails", &self.collection_details)?;
            state.serialize_field("env", &self.env)?;
            state.end()
        } else {
            let mut state = serializer.serialize_struct("DiagnosticReport", 4)?;
            state.serialize_field("success", &false)?;
            state.serialize_field("error", &self.error)?;
            state.serialize_field("stack", &self.stack)?;
            state.serialize_field("env", &self.env)?;
            state.end()
        }
    }
}
