use std::fmt;

use zeroize::Zeroizing;

use crate::error::WalletError;
use crate::mnemonic::ZeroizingMnemonic;

/// Length of a BIP-39 seed.
pub const SEED_LENGTH: usize = 64;

/// Master seed bytes, zeroized on drop.
///
/// Normally the 64-byte BIP-39 output. Raw seeds between 16 and 64 bytes
/// (the BIP-32 bounds) are accepted so published HD test vectors can be fed
/// in directly.
#[derive(Clone)]
pub struct Seed {
    bytes: Zeroizing<Vec<u8>>,
}

impl Seed {
    /// PBKDF2-HMAC-SHA512 over the NFKD phrase, salt `"mnemonic" + passphrase`,
    /// 2048 rounds.
    pub fn from_mnemonic(mnemonic: &ZeroizingMnemonic, passphrase: &str) -> Self {
        let seed = Zeroizing::new(mnemonic.inner().to_seed(passphrase));
        Self {
            bytes: Zeroizing::new(seed.to_vec()),
        }
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, WalletError> {
        let bytes = Zeroizing::new(bytes);
        if !(16..=SEED_LENGTH).contains(&bytes.len()) {
            return Err(WalletError::InvalidSeed(format!(
                "seed must be 16 to {SEED_LENGTH} bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed({} bytes, [REDACTED])", self.bytes.len())
    }
}

/// Parse `phrase` and expand it to a seed in one step.
pub fn mnemonic_to_seed(phrase: &str, passphrase: &str) -> Result<Seed, WalletError> {
    let mnemonic = ZeroizingMnemonic::parse(phrase)?;
    Ok(mnemonic.to_seed(passphrase))
}
