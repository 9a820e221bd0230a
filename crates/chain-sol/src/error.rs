use thiserror::Error;

/// Solana key and address errors.
#[derive(Debug, Error)]
pub enum SolError {
    #[error("invalid seed length: expected {expected} bytes, got {actual}")]
    InvalidSeedLength { expected: usize, actual: usize },

    #[error("invalid secret key: {0}")]
    InvalidSecretKey(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),
}
