//! Port definitions for the catalog query transport.
//!
//! The core only depends on these traits; the HTTP implementation lives in
//! `shopdiag-storefront`.

mod transport;

pub use transport::{QueryTransport, TransportError, TransportResult};

#[cfg(test)]
pub use transport::MockQueryTransport;
