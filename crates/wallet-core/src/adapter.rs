use chain_eth::EthKeypair;
use chain_sol::SolKeypair;

use crate::derivation_path::DerivationPath;
use crate::error::WalletError;
use crate::hd_derivation::{self, KeyMaterial};
use crate::seed::Seed;
use crate::types::{Chain, WalletInfo};

/// Per-chain path convention, derivation scheme and key/address encoding.
///
/// The registry only ever talks to this trait, so it carries no
/// chain-specific branches of its own.
pub trait ChainAdapter: Send + Sync {
    fn chain(&self) -> Chain;

    /// Standard wallet path at `index`.
    fn derivation_path(&self, index: u32) -> Result<DerivationPath, WalletError>;

    fn derive_key_material(
        &self,
        seed: &Seed,
        path: &DerivationPath,
    ) -> Result<KeyMaterial, WalletError>;

    /// Turn derived bytes into the displayable triple. Checks the input
    /// length itself, so it can be driven with arbitrary bytes in tests.
    fn to_wallet_info(
        &self,
        path: &DerivationPath,
        key_material: &[u8],
    ) -> Result<WalletInfo, WalletError>;

    fn validate_address(&self, address: &str) -> bool;

    fn derive_wallet(&self, seed: &Seed, index: u32) -> Result<WalletInfo, WalletError> {
        let path = self.derivation_path(index)?;
        let key = self.derive_key_material(seed, &path)?;
        self.to_wallet_info(key.path(), key.as_bytes())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SolanaAdapter;

#[derive(Debug, Clone, Copy, Default)]
pub struct EthereumAdapter;

static SOLANA: SolanaAdapter = SolanaAdapter;
static ETHEREUM: EthereumAdapter = EthereumAdapter;

/// The adapter for `chain`.
pub fn adapter_for(chain: Chain) -> &'static dyn ChainAdapter {
    match chain {
        Chain::Solana => &SOLANA,
        Chain::Ethereum => &ETHEREUM,
    }
}

fn check_length(chain: Chain, key_material: &[u8], expected: usize) -> Result<(), WalletError> {
    if key_material.len() != expected {
        return Err(WalletError::InvalidKeyMaterial {
            chain,
            reason: format!("expected {expected} bytes, got {}", key_material.len()),
        });
    }
    Ok(())
}

impl ChainAdapter for SolanaAdapter {
    fn chain(&self) -> Chain {
        Chain::Solana
    }

    fn derivation_path(&self, index: u32) -> Result<DerivationPath, WalletError> {
        DerivationPath::solana(index)
    }

    fn derive_key_material(
        &self,
        seed: &Seed,
        path: &DerivationPath,
    ) -> Result<KeyMaterial, WalletError> {
        hd_derivation::derive_ed25519(seed, path)
    }

    /// The 32 bytes are an Ed25519 seed; the exported private key is the
    /// 64-byte `seed || public key` in hex.
    fn to_wallet_info(
        &self,
        path: &DerivationPath,
        key_material: &[u8],
    ) -> Result<WalletInfo, WalletError> {
        check_length(Chain::Solana, key_material, chain_sol::SEED_LENGTH)?;
        let keypair =
            SolKeypair::from_seed_bytes(key_material).map_err(|e| WalletError::InvalidKeyMaterial {
                chain: Chain::Solana,
                reason: e.to_string(),
            })?;

        Ok(WalletInfo {
            path: path.to_string(),
            public_key: keypair.address(),
            private_key: keypair.secret_key_hex().as_str().to_owned(),
        })
    }

    fn validate_address(&self, address: &str) -> bool {
        chain_sol::validate_address(address)
    }
}

impl ChainAdapter for EthereumAdapter {
    fn chain(&self) -> Chain {
        Chain::Ethereum
    }

    fn derivation_path(&self, index: u32) -> Result<DerivationPath, WalletError> {
        DerivationPath::ethereum(index)
    }

    fn derive_key_material(
        &self,
        seed: &Seed,
        path: &DerivationPath,
    ) -> Result<KeyMaterial, WalletError> {
        hd_derivation::derive_secp256k1(seed, path)
    }

    /// The 32 bytes are the secp256k1 private scalar.
    fn to_wallet_info(
        &self,
        path: &DerivationPath,
        key_material: &[u8],
    ) -> Result<WalletInfo, WalletError> {
        check_length(Chain::Ethereum, key_material, chain_eth::PRIVATE_KEY_LENGTH)?;
        let keypair = EthKeypair::from_private_key_bytes(key_material).map_err(|e| {
            WalletError::InvalidKeyMaterial {
                chain: Chain::Ethereum,
                reason: e.to_string(),
            }
        })?;

        Ok(WalletInfo {
            path: path.to_string(),
            public_key: keypair.address().to_owned(),
            private_key: keypair.private_key_hex().as_str().to_owned(),
        })
    }

    fn validate_address(&self, address: &str) -> bool {
        chain_eth::validate_address(address).unwrap_or(false)
    }
}

/// Stateless form of `addWallet`: derive the wallet at `index` for `chain`.
pub fn derive_wallet(chain: Chain, seed: &Seed, index: u32) -> Result<WalletInfo, WalletError> {
    adapter_for(chain).derive_wallet(seed, index)
}

/// Convert raw key material for `chain` into a [`WalletInfo`].
pub fn to_wallet_info(
    chain: Chain,
    path: &DerivationPath,
    key_material: &[u8],
) -> Result<WalletInfo, WalletError> {
    adapter_for(chain).to_wallet_info(path, key_material)
}

/// Check an address string against `chain`'s encoding.
pub fn validate_address(address: &str, chain: Chain) -> bool {
    adapter_for(chain).validate_address(address)
}
