use thiserror::Error;

/// Errors from the entropy source.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(String),
}
