use thiserror::Error;

/// Errors produced by codec and type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid tryte character: {0:?}")]
    InvalidTryte(char),

    #[error("invalid trit value: {0}")]
    InvalidTrit(i8),

    #[error("invalid length: expected {expected} trytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("value does not fit the {field} field: {value}")]
    ValueOutOfRange { field: &'static str, value: i128 },

    #[error("record index out of range: currentIndex {current} exceeds lastIndex {last}")]
    IndexRange { current: i64, last: i64 },

    #[error("negative record index: {0}")]
    NegativeIndex(i64),
}

pub type TypeResult<T> = Result<T, TypeError>;
