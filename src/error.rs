use thiserror::Error;

pub type FreqTabResult<T, E = FreqTabError> = Result<T, E>;

#[derive(Debug, Error)]
pub enum FreqTabError {
    #[error("key of {len} bytes exceeds the {max} byte bucket limit")]
    KeyTooLong { len: usize, max: usize },

    #[error("probe sequence exhausted after {attempts} attempts around slot {home}")]
    InsertionExhausted { attempts: usize, home: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
