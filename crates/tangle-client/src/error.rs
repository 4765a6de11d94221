use thiserror::Error;

/// Errors surfaced by the command layer.
///
/// Validation and ordering failures are detected before any network or
/// proof-of-work activity; engine and transport failures carry the
/// offending position or the node's message. Nothing is retried here.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid search criteria: {0}")]
    InvalidSearchCriteria(String),

    #[error("invalid trytes provided for {0}")]
    InvalidTrytes(&'static str),

    #[error("invalid attached trytes provided for {0}")]
    InvalidAttachedTrytes(&'static str),

    #[error("invalid hash provided as {role}: {value}")]
    InvalidHash { role: &'static str, value: String },

    #[error("invalid neighbor uri: {0}")]
    InvalidUri(String),

    #[error("invalid depth: {0}")]
    InvalidDepth(u64),

    #[error("bundle out of order: the first record must have currentIndex == lastIndex, got {current} of {last}")]
    BundleOrder { current: u64, last: u64 },

    #[error("proof of work failed on record {position}: {reason}")]
    Pow { position: usize, reason: String },

    #[error("malformed node response: {0}")]
    MalformedResponse(String),

    #[error("transport error: {0}")]
    Transport(#[from] tangle_transport::TransportError),

    #[error("record codec error: {0}")]
    Type(#[from] tangle_types::TypeError),
}

pub type ApiResult<T> = Result<T, ApiError>;
