//! JSON-over-HTTP broker.
//!
//! Commands are POSTed to the provider URI as JSON with the
//! `X-IOTA-API-Version` header. Node-reported failures (an `error` or
//! `exception` field in the payload) surface as [`TransportError::Node`].

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tangle_commands::Command;
use tracing::{debug, warn};

use crate::broker::Broker;
use crate::error::{TransportError, TransportResult};

const API_VERSION_HEADER: &str = "X-IOTA-API-Version";
const API_VERSION: &str = "1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// HTTP transport to a single node.
pub struct HttpBroker {
    client: reqwest::Client,
    provider: String,
    token: Option<String>,
}

impl HttpBroker {
    /// Broker with default settings (120 s timeout, no auth token).
    pub fn new(provider: impl Into<String>) -> TransportResult<Self> {
        HttpBrokerBuilder::new(provider).build()
    }

    pub fn builder(provider: impl Into<String>) -> HttpBrokerBuilder {
        HttpBrokerBuilder::new(provider)
    }

    /// The node URI commands are dispatched to.
    pub fn provider(&self) -> &str {
        &self.provider
    }
}

#[async_trait]
impl Broker for HttpBroker {
    async fn send(&self, command: &Command) -> TransportResult<Value> {
        debug!(command = command.name(), provider = %self.provider, "dispatching");

        let mut request = self
            .client
            .post(&self.provider)
            .header(API_VERSION_HEADER, API_VERSION)
            .json(command);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {token}"));
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        let payload: Value = serde_json::from_str(&body)
            .map_err(|e| TransportError::MalformedResponse(e.to_string()))?;

        if let Some(message) = node_failure(&payload) {
            warn!(command = command.name(), %message, "node rejected command");
            return Err(TransportError::Node {
                command: command.name().to_string(),
                message,
            });
        }
        if !status.is_success() {
            return Err(TransportError::BadStatus {
                status: status.as_u16(),
            });
        }
        Ok(payload)
    }
}

fn node_failure(payload: &Value) -> Option<String> {
    for key in ["error", "exception"] {
        if let Some(message) = payload.get(key).and_then(Value::as_str) {
            return Some(message.to_string());
        }
    }
    None
}

/// Builder for [`HttpBroker`].
pub struct HttpBrokerBuilder {
    provider: String,
    token: Option<String>,
    timeout: Duration,
}

impl HttpBrokerBuilder {
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Bearer token sent as `Authorization: token <token>`.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> TransportResult<HttpBroker> {
        let client = reqwest::Client::builder().timeout(self.timeout).build()?;
        Ok(HttpBroker {
            client,
            provider: self.provider,
            token: self.token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let broker = HttpBroker::new("http://localhost:14265").unwrap();
        assert_eq!(broker.provider(), "http://localhost:14265");
        assert!(broker.token.is_none());
    }

    #[test]
    fn builder_with_token_and_timeout() {
        let broker = HttpBroker::builder("http://localhost:14265")
            .token("secret")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(broker.token.as_deref(), Some("secret"));
    }

    #[test]
    fn node_failure_detected_in_payload() {
        let payload = serde_json::json!({"error": "invalid addresses input"});
        assert_eq!(
            node_failure(&payload).as_deref(),
            Some("invalid addresses input")
        );
        let payload = serde_json::json!({"exception": "internal"});
        assert_eq!(node_failure(&payload).as_deref(), Some("internal"));
        let payload = serde_json::json!({"hashes": []});
        assert!(node_failure(&payload).is_none());
    }
}
