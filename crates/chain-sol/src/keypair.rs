use std::fmt;

use ed25519_dalek::SigningKey;
use zeroize::Zeroizing;

use crate::address::pubkey_to_address;
use crate::error::SolError;

/// Length of the Ed25519 seed a key pair is expanded from.
pub const SEED_LENGTH: usize = 32;
/// Length of the exported secret key (`seed || public key`).
pub const SECRET_KEY_LENGTH: usize = 64;
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// An Ed25519 key pair in Solana's conventions.
///
/// The signing key zeroizes itself on drop.
pub struct SolKeypair {
    signing_key: SigningKey,
}

impl SolKeypair {
    /// Expand a 32-byte Ed25519 seed into a key pair.
    pub fn from_seed_bytes(seed: &[u8]) -> Result<Self, SolError> {
        let seed: &[u8; SEED_LENGTH] =
            seed.try_into().map_err(|_| SolError::InvalidSeedLength {
                expected: SEED_LENGTH,
                actual: seed.len(),
            })?;
        Ok(Self {
            signing_key: SigningKey::from_bytes(seed),
        })
    }

    /// Import a 64-byte secret key. The trailing 32 bytes must be the public
    /// key of the leading seed.
    pub fn from_secret_key_bytes(bytes: &[u8]) -> Result<Self, SolError> {
        let bytes: &[u8; SECRET_KEY_LENGTH] = bytes.try_into().map_err(|_| {
            SolError::InvalidSecretKey(format!(
                "expected {SECRET_KEY_LENGTH} bytes, got {}",
                bytes.len()
            ))
        })?;
        let signing_key = SigningKey::from_keypair_bytes(bytes)
            .map_err(|_| SolError::InvalidSecretKey("public half does not match seed".into()))?;
        Ok(Self { signing_key })
    }

    /// Import the hex form produced by [`SolKeypair::secret_key_hex`].
    pub fn from_secret_key_hex(secret_hex: &str) -> Result<Self, SolError> {
        let bytes = Zeroizing::new(
            hex::decode(secret_hex.trim())
                .map_err(|e| SolError::InvalidSecretKey(format!("hex decode failed: {e}")))?,
        );
        Self::from_secret_key_bytes(&bytes)
    }

    pub fn public_key_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Base58 address of the public key.
    pub fn address(&self) -> String {
        pubkey_to_address(&self.public_key_bytes())
    }

    /// The 64-byte secret key, `seed || public key`.
    pub fn secret_key_bytes(&self) -> Zeroizing<[u8; SECRET_KEY_LENGTH]> {
        Zeroizing::new(self.signing_key.to_keypair_bytes())
    }

    /// Lowercase hex of the 64-byte secret key (128 characters).
    pub fn secret_key_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.secret_key_bytes().as_slice()))
    }
}

impl fmt::Debug for SolKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SolKeypair")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}
