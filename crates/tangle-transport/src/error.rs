use thiserror::Error;

/// Errors surfaced by a broker. Opaque to the command layer and
/// propagated verbatim; retry policy belongs to the caller, not here.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("node rejected {command}: {message}")]
    Node { command: String, message: String },

    #[error("unexpected status {status} from node")]
    BadStatus { status: u16 },

    #[error("malformed node response: {0}")]
    MalformedResponse(String),
}

pub type TransportResult<T> = Result<T, TransportError>;
