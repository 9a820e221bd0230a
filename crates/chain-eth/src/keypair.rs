use std::fmt;

use k256::ecdsa::SigningKey;
use zeroize::Zeroizing;

use crate::address::pubkey_to_eth_address;
use crate::error::EthError;

pub const PRIVATE_KEY_LENGTH: usize = 32;

/// A secp256k1 key pair with Ethereum address rendering.
pub struct EthKeypair {
    signing_key: SigningKey,
    address: String,
}

impl EthKeypair {
    /// Build from a 32-byte big-endian scalar. Zero and values at or above
    /// the curve order are rejected.
    pub fn from_private_key_bytes(bytes: &[u8]) -> Result<Self, EthError> {
        if bytes.len() != PRIVATE_KEY_LENGTH {
            return Err(EthError::InvalidPrivateKey(format!(
                "expected {PRIVATE_KEY_LENGTH} bytes, got {}",
                bytes.len()
            )));
        }
        let signing_key = SigningKey::from_slice(bytes)
            .map_err(|_| EthError::InvalidPrivateKey("scalar out of range".into()))?;

        let address = pubkey_to_eth_address(&uncompressed_pubkey(&signing_key)?)?;
        Ok(Self {
            signing_key,
            address,
        })
    }

    /// Import a `0x`-prefixed (or bare) 64-hex-digit private key.
    pub fn from_private_key_hex(key_hex: &str) -> Result<Self, EthError> {
        let trimmed = key_hex.trim();
        let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        let bytes = Zeroizing::new(
            hex::decode(digits)
                .map_err(|e| EthError::InvalidPrivateKey(format!("hex decode failed: {e}")))?,
        );
        Self::from_private_key_bytes(&bytes)
    }

    /// EIP-55 checksummed address.
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn private_key_bytes(&self) -> Zeroizing<[u8; PRIVATE_KEY_LENGTH]> {
        Zeroizing::new(self.signing_key.to_bytes().into())
    }

    /// `0x` followed by 64 lowercase hex digits.
    pub fn private_key_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(format!(
            "0x{}",
            hex::encode(self.private_key_bytes().as_slice())
        ))
    }
}

fn uncompressed_pubkey(signing_key: &SigningKey) -> Result<[u8; 65], EthError> {
    signing_key
        .verifying_key()
        .to_encoded_point(false)
        .as_bytes()
        .try_into()
        .map_err(|_| EthError::InvalidPublicKey("invalid uncompressed public key".into()))
}

impl fmt::Debug for EthKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EthKeypair")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}
