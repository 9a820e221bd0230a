//! Typed BIP-32 derivation paths.
//!
//! - Solana: `m/44'/501'/{index}'/0'`, every level hardened (SLIP-0010)
//! - Ethereum: `m/44'/60'/0'/0/{index}`, change and index non-hardened (BIP-44)

use std::fmt;
use std::str::FromStr;

use crate::error::WalletError;
use crate::types::Chain;

/// Offset added to hardened indices (2^31).
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

const BIP44_PURPOSE: u32 = 44;

/// One path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildIndex {
    Normal(u32),
    /// Stored without the offset, rendered with `'`.
    Hardened(u32),
}

impl ChildIndex {
    pub fn normal(index: u32) -> Result<Self, WalletError> {
        check_range(index).map(ChildIndex::Normal)
    }

    pub fn hardened(index: u32) -> Result<Self, WalletError> {
        check_range(index).map(ChildIndex::Hardened)
    }

    pub fn is_hardened(&self) -> bool {
        matches!(self, ChildIndex::Hardened(_))
    }

    /// Index without the hardened offset.
    pub fn index(&self) -> u32 {
        match self {
            ChildIndex::Normal(i) | ChildIndex::Hardened(i) => *i,
        }
    }

    /// The 32-bit value serialized into the HMAC input.
    pub fn to_u32(&self) -> u32 {
        match self {
            ChildIndex::Normal(i) => *i,
            ChildIndex::Hardened(i) => *i | HARDENED_OFFSET,
        }
    }
}

fn check_range(index: u32) -> Result<u32, WalletError> {
    if index >= HARDENED_OFFSET {
        return Err(WalletError::InvalidPath(format!(
            "index {index} is outside 0..2^31"
        )));
    }
    Ok(index)
}

impl fmt::Display for ChildIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildIndex::Normal(i) => write!(f, "{i}"),
            ChildIndex::Hardened(i) => write!(f, "{i}'"),
        }
    }
}

impl FromStr for ChildIndex {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (digits, hardened) = match s.strip_suffix(['\'', 'h', 'H']) {
            Some(digits) => (digits, true),
            None => (s, false),
        };
        let index: u32 = digits
            .parse()
            .map_err(|_| WalletError::InvalidPath(format!("invalid path component {s:?}")))?;
        if hardened {
            ChildIndex::hardened(index)
        } else {
            ChildIndex::normal(index)
        }
    }
}

/// A path from the master key, e.g. `m/44'/60'/0'/0/0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DerivationPath {
    segments: Vec<ChildIndex>,
}

impl DerivationPath {
    pub fn new(segments: Vec<ChildIndex>) -> Self {
        Self { segments }
    }

    /// `m/44'/501'/{index}'/0'`
    pub fn solana(index: u32) -> Result<Self, WalletError> {
        Ok(Self::new(vec![
            ChildIndex::Hardened(BIP44_PURPOSE),
            ChildIndex::Hardened(Chain::Solana.coin_type()),
            ChildIndex::hardened(index)?,
            ChildIndex::Hardened(0),
        ]))
    }

    /// `m/44'/60'/0'/0/{index}`
    pub fn ethereum(index: u32) -> Result<Self, WalletError> {
        Ok(Self::new(vec![
            ChildIndex::Hardened(BIP44_PURPOSE),
            ChildIndex::Hardened(Chain::Ethereum.coin_type()),
            ChildIndex::Hardened(0),
            ChildIndex::Normal(0),
            ChildIndex::normal(index)?,
        ]))
    }

    /// Standard wallet path for `chain` at `index`.
    pub fn for_chain(chain: Chain, index: u32) -> Result<Self, WalletError> {
        match chain {
            Chain::Solana => Self::solana(index),
            Chain::Ethereum => Self::ethereum(index),
        }
    }

    pub fn segments(&self) -> &[ChildIndex] {
        &self.segments
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChildIndex> {
        self.segments.iter()
    }

    /// Number of segments below the master key.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_fully_hardened(&self) -> bool {
        self.segments.iter().all(ChildIndex::is_hardened)
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for DerivationPath {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let rest = match s {
            "m" | "M" => return Ok(Self::default()),
            _ => s
                .strip_prefix("m/")
                .or_else(|| s.strip_prefix("M/"))
                .ok_or_else(|| WalletError::InvalidPath("path must start with m/".into()))?,
        };

        let segments = rest
            .split('/')
            .map(ChildIndex::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(segments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn solana_path_renders_fully_hardened() {
        let path = DerivationPath::solana(0).unwrap();
        assert_eq!(path.to_string(), "m/44'/501'/0'/0'");
        assert!(path.is_fully_hardened());
        assert_eq!(DerivationPath::solana(7).unwrap().to_string(), "m/44'/501'/7'/0'");
    }

    #[test]
    fn ethereum_path_ends_non_hardened() {
        let path = DerivationPath::ethereum(0).unwrap();
        assert_eq!(path.to_string(), "m/44'/60'/0'/0/0");
        assert!(!path.is_fully_hardened());
        assert_eq!(path.depth(), 5);
        assert_eq!(DerivationPath::ethereum(3).unwrap().to_string(), "m/44'/60'/0'/0/3");
    }

    #[test]
    fn parse_accepts_h_and_apostrophe() {
        let a: DerivationPath = "m/44'/60'/0'/0/0".parse().unwrap();
        let b: DerivationPath = "m/44h/60H/0'/0/0".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a, DerivationPath::ethereum(0).unwrap());
    }

    #[test]
    fn parse_display_roundtrip() {
        for text in ["m/44'/501'/12'/0'", "m/0", "m/0'/1/2'/2/1000000000"] {
            let path: DerivationPath = text.parse().unwrap();
            assert_eq!(path.to_string(), text);
        }
    }

    #[test]
    fn parse_master_only() {
        let path: DerivationPath = "m".parse().unwrap();
        assert_eq!(path.depth(), 0);
        assert_eq!(path.to_string(), "m");
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in ["", "44'/0'", "m/", "m/abc", "m/1//2", "m/-1", "m/2147483648"] {
            assert!(bad.parse::<DerivationPath>().is_err(), "{bad:?} should fail");
        }
    }

    #[test]
    fn hardened_raw_value() {
        assert_eq!(ChildIndex::Hardened(44).to_u32(), 0x8000_002c);
        assert_eq!(ChildIndex::Normal(44).to_u32(), 44);
        assert_eq!(ChildIndex::Hardened(44).index(), 44);
    }

    #[test]
    fn index_range_is_checked() {
        assert!(DerivationPath::solana(HARDENED_OFFSET).is_err());
        assert!(DerivationPath::ethereum(HARDENED_OFFSET - 1).is_ok());
    }

    #[test]
    fn chain_paths_do_not_collide() {
        for i in 0..5 {
            assert_ne!(
                DerivationPath::for_chain(Chain::Solana, i).unwrap(),
                DerivationPath::for_chain(Chain::Ethereum, i).unwrap()
            );
        }
    }

    fn child_index() -> impl Strategy<Value = ChildIndex> {
        (0..HARDENED_OFFSET, any::<bool>()).prop_map(|(index, hardened)| {
            if hardened {
                ChildIndex::Hardened(index)
            } else {
                ChildIndex::Normal(index)
            }
        })
    }

    proptest! {
        #[test]
        fn display_parses_back(segments in proptest::collection::vec(child_index(), 0..8)) {
            let path = DerivationPath::new(segments);
            let reparsed: DerivationPath = path.to_string().parse().unwrap();
            prop_assert_eq!(reparsed, path);
        }
    }
}
