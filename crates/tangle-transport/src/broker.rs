use async_trait::async_trait;
use serde_json::Value;
use tangle_commands::Command;

use crate::error::TransportResult;

/// Request/response seam between the command layer and a node.
///
/// Implementations must preserve call order when invoked sequentially;
/// the batch dispatcher relies on that to reassemble chunked results.
#[async_trait]
pub trait Broker: Send + Sync {
    /// Dispatch one command and return the node's raw JSON payload.
    async fn send(&self, command: &Command) -> TransportResult<Value>;
}
