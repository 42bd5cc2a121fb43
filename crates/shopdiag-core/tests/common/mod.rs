//! Shared fakes for the diagnostics integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};
use shopdiag_core::{QueryTransport, TransportError, TransportResult};

/// How the fake answers one operation.
#[derive(Clone)]
pub enum Canned {
    Data(Value),
    Network(String),
    Query(String),
}

/// A transport that answers by operation name, optionally after a delay.
///
/// The detail operation is answered from a per-handle table; unknown
/// handles get `{"collection": null}` the way the Storefront API does.
#[derive(Default)]
pub struct FakeTransport {
    operations: Mutex<HashMap<String, (Canned, Duration)>>,
    collections: Mutex<HashMap<String, Value>>,
    calls: AtomicUsize,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A reachable store with two collections.
    pub fn healthy() -> Self {
        Self::new()
            .with_operation(
                "TestConnection",
                Canned::Data(json!({"shop": {"id": "gid://shopify/Shop/1", "name": "Demo Store"}})),
            )
            .with_operation(
                "GetCollections",
                Canned::Data(json!({"collections": {"nodes": [
                    collection_summary("summer-sale", "Summer Sale"),
                    collection_summary("frontpage", "Home page"),
                ]}})),
            )
            .with_collection("summer-sale", collection_detail("summer-sale"))
    }

    pub fn with_operation(self, operation: &str, canned: Canned) -> Self {
        self.with_delayed_operation(operation, canned, Duration::ZERO)
    }

    pub fn with_delayed_operation(self, operation: &str, canned: Canned, delay: Duration) -> Self {
        self.operations
            .lock()
            .unwrap()
            .insert(operation.to_string(), (canned, delay));
        self
    }

    pub fn with_collection(self, handle: &str, detail: Value) -> Self {
        self.collections
            .lock()
            .unwrap()
            .insert(handle.to_string(), detail);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QueryTransport for FakeTransport {
    async fn query(&self, document: &str, variables: Value) -> TransportResult<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let operation = document
            .split_whitespace()
            .nth(1)
            .and_then(|name| name.split('(').next())
            .unwrap_or_default()
            .to_string();

        let entry = self.operations.lock().unwrap().get(&operation).cloned();
        let (canned, delay) = match entry {
            Some(entry) => entry,
            None if operation == "GetCollectionDetails" => {
                let handle = variables["handle"].as_str().unwrap_or_default();
                let collection = self
                    .collections
                    .lock()
                    .unwrap()
                    .get(handle)
                    .cloned()
                    .unwrap_or(Value::Null);
                (Canned::Data(json!({ "collection": collection })), Duration::ZERO)
            }
            None => {
                return Err(TransportError::Query {
                    messages: vec![format!("Unknown operation {operation}")],
                });
            }
        };

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        match canned {
            Canned::Data(value) => Ok(value),
            Canned::Network(message) => Err(TransportError::Network { message }),
            Canned::Query(message) => Err(TransportError::Query {
                messages: vec![message],
            }),
        }
    }
}

pub fn collection_summary(handle: &str, title: &str) -> Value {
    json!({
        "id": format!("gid://shopify/Collection/{handle}"),
        "title": title,
        "handle": handle,
        "description": ""
    })
}

pub fn collection_detail(handle: &str) -> Value {
    json!({
        "id": format!("gid://shopify/Collection/{handle}"),
        "title": "Summer Sale",
        "handle": handle,
        "description": "Seasonal picks",
        "products": {
            "nodes": [{
                "id": "gid://shopify/Product/1",
                "title": "Linen Shirt",
                "handle": "linen-shirt",
                "featuredImage": {"url": "https://cdn.example/linen.png", "altText": "Linen shirt"},
                "priceRange": {
                    "minVariantPrice": {"amount": "29.0", "currencyCode": "EUR"},
                    "maxVariantPrice": {"amount": "29.0", "currencyCode": "EUR"}
                }
            }],
            "pageInfo": {"hasNextPage": false, "hasPreviousPage": false}
        }
    })
}
