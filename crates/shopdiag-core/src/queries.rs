//! Storefront query documents and the probes built from them.

use crate::domain::Probe;
use crate::settings::DiagnosticsOptions;

/// Name of the shop probe in [`crate::ProbeResults`].
pub const SHOP_PROBE: &str = "shop";

/// Name of the collections probe in [`crate::ProbeResults`].
pub const COLLECTIONS_PROBE: &str = "collections";

/// Name of the collection-detail probe.
pub const COLLECTION_DETAIL_PROBE: &str = "collectionDetails";

pub const SHOP_QUERY: &str = r"query TestConnection {
  shop {
    name
    id
  }
}";

pub const COLLECTIONS_QUERY: &str = r"query GetCollections($first: Int!) {
  collections(first: $first) {
    nodes {
      id
      title
      handle
      description
    }
  }
}";

pub const COLLECTION_DETAIL_QUERY: &str = r"query GetCollectionDetails($handle: String!, $first: Int!) {
  collection(handle: $handle) {
    id
    title
    handle
    description
    products(first: $first) {
      nodes {
        id
        title
        handle
        featuredImage {
          url
          altText
        }
        priceRange {
          minVariantPrice {
            amount
            currencyCode
          }
          maxVariantPrice {
            amount
            currencyCode
          }
        }
      }
      pageInfo {
        hasNextPage
        hasPreviousPage
      }
    }
  }
}";

/// The probes whose failure fails the whole report, in declaration order.
pub fn mandatory_probes(options: &DiagnosticsOptions) -> Vec<Probe> {
    vec![
        Probe::new(SHOP_PROBE, SHOP_QUERY),
        Probe::new(COLLECTIONS_PROBE, COLLECTIONS_QUERY)
            .with_variable("first", options.collections_limit),
    ]
}

/// The optional probe for one collection's detail.
pub fn collection_detail_probe(handle: &str, options: &DiagnosticsOptions) -> Probe {
    Probe::new(COLLECTION_DETAIL_PROBE, COLLECTION_DETAIL_QUERY)
        .with_variable("handle", handle)
        .with_variable("first", options.products_limit)
}
