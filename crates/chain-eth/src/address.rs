use sha3::{Digest, Keccak256};

use crate::error::EthError;

/// Ethereum address of an uncompressed secp256k1 public key (65 bytes,
/// `0x04` prefix): the last 20 bytes of Keccak-256 over the 64-byte X||Y,
/// rendered with EIP-55 casing.
pub fn pubkey_to_eth_address(uncompressed_pubkey: &[u8; 65]) -> Result<String, EthError> {
    if uncompressed_pubkey[0] != 0x04 {
        return Err(EthError::InvalidPublicKey(
            "uncompressed key must start with 0x04".into(),
        ));
    }

    let hash = Keccak256::digest(&uncompressed_pubkey[1..]);

    let mut addr_bytes = [0u8; 20];
    addr_bytes.copy_from_slice(&hash[12..]);

    Ok(checksum_address(&addr_bytes))
}

/// EIP-55 mixed-case rendering of a raw 20-byte address, `0x`-prefixed.
pub fn checksum_address(addr_bytes: &[u8; 20]) -> String {
    let lower = hex::encode(addr_bytes);
    let hash = Keccak256::digest(lower.as_bytes());

    let mut checksummed = String::with_capacity(42);
    checksummed.push_str("0x");

    for (i, c) in lower.chars().enumerate() {
        let byte = hash[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            checksummed.push(c.to_ascii_uppercase());
        } else {
            checksummed.push(c);
        }
    }

    checksummed
}

/// Parse a `0x`-prefixed, 40-hex-digit address into raw bytes. Casing is
/// not checked here; see [`validate_address`].
pub fn parse_address(address: &str) -> Result<[u8; 20], EthError> {
    let hex_part = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| EthError::InvalidAddress("address must start with 0x".into()))?;

    if hex_part.len() != 40 {
        return Err(EthError::InvalidAddress(format!(
            "expected 40 hex characters, got {}",
            hex_part.len()
        )));
    }

    let mut bytes = [0u8; 20];
    hex::decode_to_slice(hex_part, &mut bytes)
        .map_err(|_| EthError::InvalidAddress("address contains non-hex characters".into()))?;
    Ok(bytes)
}

/// Validate an address string.
///
/// Malformed input is an error. All-lower or all-upper hex carries no
/// checksum and is accepted; mixed case must match EIP-55 exactly.
pub fn validate_address(address: &str) -> Result<bool, EthError> {
    let bytes = parse_address(address)?;
    let hex_part = &address[2..];

    let is_all_lower = !hex_part.chars().any(|c| c.is_ascii_uppercase());
    let is_all_upper = !hex_part.chars().any(|c| c.is_ascii_lowercase());
    if is_all_lower || is_all_upper {
        return Ok(true);
    }

    Ok(checksum_address(&bytes)[2..] == *hex_part)
}
