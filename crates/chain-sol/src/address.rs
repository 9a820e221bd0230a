//! Solana address encoding.
//!
//! An address is the Base58 text of a 32-byte Ed25519 public key, with no
//! hashing step.

use crate::error::SolError;

/// Base58-encode a 32-byte Ed25519 public key.
pub fn pubkey_to_address(pubkey: &[u8; 32]) -> String {
    bs58::encode(pubkey).into_string()
}

/// Decode an address back to its 32 public key bytes.
pub fn address_to_pubkey(address: &str) -> Result<[u8; 32], SolError> {
    let bytes = bs58::decode(address)
        .into_vec()
        .map_err(|e| SolError::InvalidAddress(format!("base58 decode failed: {e}")))?;

    bytes.try_into().map_err(|v: Vec<u8>| {
        SolError::InvalidAddress(format!("expected 32 bytes, got {}", v.len()))
    })
}

/// True if `address` is Base58 text of exactly 32 bytes.
pub fn validate_address(address: &str) -> bool {
    address_to_pubkey(address).is_ok()
}
