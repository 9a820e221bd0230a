//! HD wallet generation for Solana and Ethereum.
//!
//! A [`Session`] owns one BIP-39 mnemonic and the seed it expands to, and
//! derives wallets from it at increasing indices:
//!
//! - Solana: SLIP-0010 Ed25519 at `m/44'/501'/{i}'/0'`
//! - Ethereum: BIP-32 secp256k1 at `m/44'/60'/0'/0/{i}`
//!
//! Chain-specific behaviour lives behind [`ChainAdapter`]; the session and
//! registry never branch on the chain themselves.

pub mod adapter;
pub mod config;
pub mod derivation_path;
pub mod error;
pub mod hd_derivation;
pub mod mnemonic;
pub mod registry;
pub mod seed;
pub mod session;
pub mod types;

pub use adapter::{adapter_for, derive_wallet, to_wallet_info, validate_address, ChainAdapter};
pub use config::GeneratorConfig;
pub use derivation_path::{ChildIndex, DerivationPath};
pub use error::WalletError;
pub use hd_derivation::{derive_for_chain, KeyMaterial};
pub use mnemonic::{generate_mnemonic, validate_mnemonic, WordCount, ZeroizingMnemonic};
pub use registry::WalletRegistry;
pub use seed::{mnemonic_to_seed, Seed};
pub use session::Session;
pub use types::{Chain, CurveType, WalletInfo};
