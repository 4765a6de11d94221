//! Batched command dispatch.
//!
//! Commands whose primary collection exceeds the configured batch size
//! are split into contiguous chunks, one transport call per chunk, issued
//! and awaited in order, and their responses merged so callers observe
//! one logical response. Any chunk failure fails the whole operation;
//! no partial merge is ever returned.

use serde::de::DeserializeOwned;
use tangle_commands::{Command, MergeBatch};
use tangle_transport::Broker;
use tracing::debug;

use crate::error::{ApiError, ApiResult};

pub(crate) struct BatchDispatcher<'a, B: Broker> {
    broker: &'a B,
    batch_size: usize,
}

impl<'a, B: Broker> BatchDispatcher<'a, B> {
    pub(crate) fn new(broker: &'a B, batch_size: usize) -> Self {
        // `chunks()` requires a non-zero size.
        Self {
            broker,
            batch_size: batch_size.max(1),
        }
    }

    /// Single-shot dispatch with typed decoding.
    pub(crate) async fn send<R: DeserializeOwned>(&self, command: &Command) -> ApiResult<R> {
        let payload = self.broker.send(command).await?;
        serde_json::from_value(payload).map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }

    /// Chunk-and-merge dispatch. Falls back to a single call when the
    /// command carries no batchable collection or the collection fits.
    pub(crate) async fn send_batched<R>(&self, command: Command) -> ApiResult<R>
    where
        R: DeserializeOwned + MergeBatch,
    {
        let chunks = match command.batch_items() {
            Some(items) if items.len() > self.batch_size => items
                .chunks(self.batch_size)
                .map(|chunk| chunk.to_vec())
                .collect::<Vec<_>>(),
            _ => return self.send(&command).await,
        };

        debug!(
            command = command.name(),
            chunks = chunks.len(),
            batch_size = self.batch_size,
            "splitting oversized request"
        );

        let mut parts = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            let sub_command = command.with_batch_items(chunk);
            parts.push(self.send(&sub_command).await?);
        }
        Ok(R::merge(parts))
    }
}
