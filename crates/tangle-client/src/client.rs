//! Client configuration and construction.

use std::sync::Arc;
use std::time::Duration;

use tangle_crypto::PowEngine;
use tangle_transport::{Broker, HttpBroker};

use crate::error::ApiResult;

/// Default maximum item count per transport call.
pub const DEFAULT_BATCH_SIZE: usize = 500;

const DEFAULT_HOST: &str = "http://localhost";
const DEFAULT_PORT: u16 = 14265;

/// How `attachToTangle` performs proof-of-work.
///
/// The local branch is only reachable when an engine has been injected;
/// there is no nullable collaborator to check at call time.
#[derive(Clone)]
pub enum AttachmentStrategy {
    /// Send the command to the node and let it seal the bundle.
    Delegate,
    /// Seal the bundle locally through the injected engine.
    Local(Arc<dyn PowEngine>),
}

/// Configured handle to one node.
///
/// Holds only immutable configuration; concurrent calls on the same
/// instance share no mutable state.
pub struct Client<B: Broker> {
    pub(crate) broker: B,
    pub(crate) batch_size: usize,
    pub(crate) attachment: AttachmentStrategy,
}

impl<B: Broker> Client<B> {
    /// Wrap an existing broker with explicit settings.
    ///
    /// A zero batch size is meaningless (no chunk could ever carry an
    /// item) and is clamped to 1.
    pub fn with_broker(broker: B, batch_size: usize, attachment: AttachmentStrategy) -> Self {
        Self {
            broker,
            batch_size: batch_size.max(1),
            attachment,
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }
}

impl Client<HttpBroker> {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }
}

/// Builder for a [`Client`] over HTTP.
pub struct ClientBuilder {
    host: String,
    port: u16,
    provider: Option<String>,
    token: Option<String>,
    timeout: Option<Duration>,
    batch_size: usize,
    attachment: AttachmentStrategy,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            provider: None,
            token: None,
            timeout: None,
            batch_size: DEFAULT_BATCH_SIZE,
            attachment: AttachmentStrategy::Delegate,
        }
    }
}

impl ClientBuilder {
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Full node URI; overrides host/port.
    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Inject a proof-of-work engine; `attachToTangle` then seals
    /// bundles locally instead of delegating to the node.
    pub fn local_pow(mut self, engine: Arc<dyn PowEngine>) -> Self {
        self.attachment = AttachmentStrategy::Local(engine);
        self
    }

    pub fn build(self) -> ApiResult<Client<HttpBroker>> {
        let provider = self
            .provider
            .unwrap_or_else(|| format!("{}:{}", self.host.trim_end_matches('/'), self.port));
        let mut broker = HttpBroker::builder(provider);
        if let Some(token) = self.token {
            broker = broker.token(token);
        }
        if let Some(timeout) = self.timeout {
            broker = broker.timeout(timeout);
        }
        Ok(Client::with_broker(
            broker.build()?,
            self.batch_size,
            self.attachment,
        ))
    }
}
