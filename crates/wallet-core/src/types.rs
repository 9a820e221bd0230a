use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WalletError;

/// Chains the generator can derive wallets for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Solana,
    Ethereum,
}

impl Chain {
    pub const ALL: [Chain; 2] = [Chain::Solana, Chain::Ethereum];

    /// SLIP-0044 coin type
    pub fn coin_type(&self) -> u32 {
        match self {
            Chain::Solana => 501,
            Chain::Ethereum => 60,
        }
    }

    /// Signing curve, which also picks the HD scheme (SLIP-0010 vs BIP-32)
    pub fn curve(&self) -> CurveType {
        match self {
            Chain::Solana => CurveType::Ed25519,
            Chain::Ethereum => CurveType::Secp256k1,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Chain::Solana => "Solana",
            Chain::Ethereum => "Ethereum",
        }
    }

    /// Native token symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Chain::Solana => "SOL",
            Chain::Ethereum => "ETH",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Chain {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solana" | "sol" => Ok(Chain::Solana),
            "ethereum" | "eth" => Ok(Chain::Ethereum),
            _ => Err(WalletError::UnsupportedChain(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveType {
    Secp256k1,
    Ed25519,
}

/// A derived wallet as handed to the display layer.
///
/// `public_key` is the chain address (Base58 for Solana, EIP-55 hex for
/// Ethereum). `private_key` is hex: the 64-byte secret key for Solana,
/// `0x` + 32 bytes for Ethereum. Masking it on screen is the caller's job.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletInfo {
    pub path: String,
    pub public_key: String,
    pub private_key: String,
}

impl fmt::Debug for WalletInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletInfo")
            .field("path", &self.path)
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

impl Drop for WalletInfo {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        self.private_key.zeroize();
    }
}
