//! Client-side command layer for a tangle node.
//!
//! Validates and shapes structured remote calls, splits oversized bulk
//! requests into size-bounded batches, and runs the local attachment
//! pipeline that seals an ordered bundle of records through a
//! proof-of-work engine when the caller opts out of delegating that work
//! to the node.
//!
//! # Key Types
//!
//! - [`Client`] — Configured handle exposing the operation surface
//! - [`AttachmentStrategy`] — Delegate sealing to the node, or run it
//!   locally through an injected [`tangle_crypto::PowEngine`]
//! - [`AttachmentPipeline`] — The bundle-chaining state machine

pub mod api;
pub mod attach;
pub mod client;
pub mod dispatch;
pub mod error;

pub use attach::AttachmentPipeline;
pub use client::{AttachmentStrategy, Client, ClientBuilder, DEFAULT_BATCH_SIZE};
pub use error::{ApiError, ApiResult};
