use thiserror::Error;

/// Errors from proof-of-work sealing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PowError {
    #[error("invalid difficulty {0}: must be between 1 and 81")]
    InvalidDifficulty(u8),

    #[error("record codec error: {0}")]
    Codec(#[from] tangle_types::TypeError),

    #[error("proof of work engine failed: {0}")]
    Engine(String),
}

pub type PowResult<T> = Result<T, PowError>;
