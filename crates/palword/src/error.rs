use thiserror::Error;

/// High-level error type shared across palword components.
#[derive(Debug, Error)]
pub enum PalwordError {
    #[error("no word found on input")]
    MissingWord,
    #[error("word exceeds the {limit}-byte limit")]
    WordTooLong { limit: usize },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
