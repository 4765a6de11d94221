//! Transport layer for the tangle client SDK.
//!
//! The [`Broker`] trait is the only seam the command layer sees: one
//! command in, one raw JSON result (or a transport error) out. The
//! [`HttpBroker`] implementation speaks the node's JSON-over-HTTP
//! convention. Call order is preserved when the caller awaits
//! sequentially; no retries happen at this layer.

pub mod broker;
pub mod error;
pub mod http;

pub use broker::Broker;
pub use error::{TransportError, TransportResult};
pub use http::{HttpBroker, HttpBrokerBuilder};
