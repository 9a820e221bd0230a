//! Ethereum key pairs and addresses for the wallet generator.
//!
//! - secp256k1 key pairs from 32-byte private scalars
//! - Keccak-256 address derivation with EIP-55 checksum casing

pub mod address;
pub mod error;
pub mod keypair;

pub use address::{checksum_address, pubkey_to_eth_address, validate_address};
pub use error::EthError;
pub use keypair::{EthKeypair, PRIVATE_KEY_LENGTH};
