//! # crypto-utils
//!
//! Secure random generation and zeroize-on-drop containers for the key
//! material handled by the wallet generator.

pub mod error;
pub mod random;
pub mod zeroizing;

pub use error::CryptoError;
pub use zeroizing::{SecretBytes, SecretString};
