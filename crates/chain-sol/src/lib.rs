//! Solana key pairs and addresses for the wallet generator.
//!
//! A Solana wallet is an Ed25519 key pair. The 32-byte seed produced by
//! SLIP-0010 derivation is expanded into a 64-byte secret key
//! (`seed || public key`, the layout `solana-keygen` and browser wallets
//! import), and the address is the Base58 encoding of the public key.

pub mod address;
pub mod error;
pub mod keypair;

pub use address::{address_to_pubkey, pubkey_to_address, validate_address};
pub use error::SolError;
pub use keypair::{SolKeypair, PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH, SEED_LENGTH};
