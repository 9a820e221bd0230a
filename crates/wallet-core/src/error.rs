use thiserror::Error;

use crate::types::Chain;

#[derive(Debug, Error)]
pub enum WalletError {
    /// The OS random source failed. Fatal: no session can start.
    #[error("Entropy source unavailable: {0}")]
    EntropySourceUnavailable(String),

    /// Derived bytes did not fit the chain's key input. Indicates a bug in
    /// the derivation layer.
    #[error("Invalid key material for {chain}: {reason}")]
    InvalidKeyMaterial { chain: Chain, reason: String },

    #[error("Unsupported chain: {0}")]
    UnsupportedChain(String),

    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    #[error("Invalid seed: {0}")]
    InvalidSeed(String),

    #[error("Invalid derivation path: {0}")]
    InvalidPath(String),

    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("No wallet at position {0}")]
    WalletNotFound(usize),

    #[error("Derivation index space exhausted")]
    IndexExhausted,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<crypto_utils::CryptoError> for WalletError {
    fn from(e: crypto_utils::CryptoError) -> Self {
        match e {
            crypto_utils::CryptoError::EntropyUnavailable(msg) => {
                WalletError::EntropySourceUnavailable(msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_error_maps_to_fatal_variant() {
        let err: WalletError =
            crypto_utils::CryptoError::EntropyUnavailable("no getrandom".into()).into();
        assert!(matches!(err, WalletError::EntropySourceUnavailable(_)));
        assert_eq!(err.to_string(), "Entropy source unavailable: no getrandom");
    }

    #[test]
    fn display_invalid_key_material() {
        let err = WalletError::InvalidKeyMaterial {
            chain: Chain::Solana,
            reason: "expected 32 bytes, got 16".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid key material for Solana: expected 32 bytes, got 16"
        );
    }

    #[test]
    fn display_wallet_not_found() {
        assert_eq!(
            WalletError::WalletNotFound(4).to_string(),
            "No wallet at position 4"
        );
    }
}
