use bip32::{ChildNumber, XPrv};
use crypto_utils::SecretBytes;
use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::Zeroize;

use crate::derivation_path::{ChildIndex, DerivationPath};
use crate::error::WalletError;
use crate::seed::Seed;
use crate::types::{Chain, CurveType};

type HmacSha512 = Hmac<Sha512>;

/// SLIP-0010 master key domain for Ed25519.
const ED25519_SEED_KEY: &[u8] = b"ed25519 seed";

/// Length of derived key material for both supported curves.
pub const KEY_MATERIAL_LENGTH: usize = 32;

/// 32 derived bytes plus the path that produced them. Zeroized on drop.
#[derive(Debug, Clone)]
pub struct KeyMaterial {
    bytes: SecretBytes<KEY_MATERIAL_LENGTH>,
    path: DerivationPath,
}

impl KeyMaterial {
    pub fn as_bytes(&self) -> &[u8; KEY_MATERIAL_LENGTH] {
        self.bytes.as_bytes()
    }

    pub fn path(&self) -> &DerivationPath {
        &self.path
    }
}

/// A SLIP-0010 Ed25519 node: private key and chain code.
pub struct Slip10Node {
    key: SecretBytes<32>,
    chain_code: SecretBytes<32>,
}

impl Slip10Node {
    /// `I = HMAC-SHA512("ed25519 seed", seed)`
    pub fn master(seed: &[u8]) -> Result<Self, WalletError> {
        let mac = HmacSha512::new_from_slice(ED25519_SEED_KEY)
            .map_err(|e| WalletError::DerivationFailed(e.to_string()))?;
        Ok(Self::split(mac, seed))
    }

    /// `I = HMAC-SHA512(chain_code, 0x00 || key || ser32(index + 2^31))`
    ///
    /// Ed25519 has no public derivation, so normal segments are refused.
    pub fn derive_child(&self, child: ChildIndex) -> Result<Self, WalletError> {
        if !child.is_hardened() {
            return Err(WalletError::DerivationFailed(format!(
                "ed25519 supports hardened segments only, got {child}"
            )));
        }
        let mut mac = HmacSha512::new_from_slice(self.chain_code.as_bytes())
            .map_err(|e| WalletError::DerivationFailed(e.to_string()))?;
        mac.update(&[0x00]);
        mac.update(self.key.as_bytes());
        Ok(Self::split(mac, &child.to_u32().to_be_bytes()))
    }

    pub fn key(&self) -> &[u8; 32] {
        self.key.as_bytes()
    }

    pub fn chain_code(&self) -> &[u8; 32] {
        self.chain_code.as_bytes()
    }

    fn split(mut mac: HmacSha512, data: &[u8]) -> Self {
        mac.update(data);
        let mut output = mac.finalize().into_bytes();

        let mut key = SecretBytes::<32>::zeroed();
        let mut chain_code = SecretBytes::<32>::zeroed();
        key.as_mut_bytes().copy_from_slice(&output[..32]);
        chain_code.as_mut_bytes().copy_from_slice(&output[32..]);
        output.as_mut_slice().zeroize();

        Self { key, chain_code }
    }
}

/// SLIP-0010 derivation down `path`; every segment must be hardened.
pub fn derive_ed25519(seed: &Seed, path: &DerivationPath) -> Result<KeyMaterial, WalletError> {
    let mut node = Slip10Node::master(seed.as_bytes())?;
    for segment in path.iter() {
        node = node.derive_child(*segment)?;
    }

    Ok(KeyMaterial {
        bytes: node.key.clone(),
        path: path.clone(),
    })
}

/// BIP-32 derivation down `path` on secp256k1, mixing hardened and normal
/// segments.
pub fn derive_secp256k1(seed: &Seed, path: &DerivationPath) -> Result<KeyMaterial, WalletError> {
    let mut xprv =
        XPrv::new(seed.as_bytes()).map_err(|e| WalletError::DerivationFailed(e.to_string()))?;

    for segment in path.iter() {
        let child = ChildNumber::new(segment.index(), segment.is_hardened())
            .map_err(|e| WalletError::InvalidPath(e.to_string()))?;
        xprv = xprv
            .derive_child(child)
            .map_err(|e| WalletError::DerivationFailed(e.to_string()))?;
    }

    Ok(KeyMaterial {
        bytes: SecretBytes::from_array(xprv.to_bytes()),
        path: path.clone(),
    })
}

/// Derive with the scheme that matches `chain`'s curve.
pub fn derive_for_chain(
    chain: Chain,
    seed: &Seed,
    path: &DerivationPath,
) -> Result<KeyMaterial, WalletError> {
    match chain.curve() {
        CurveType::Ed25519 => derive_ed25519(seed, path),
        CurveType::Secp256k1 => derive_secp256k1(seed, path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::mnemonic_to_seed;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn test_seed() -> Seed {
        mnemonic_to_seed(TEST_MNEMONIC, "").unwrap()
    }

    fn slip10_vector_seed() -> Seed {
        Seed::from_bytes(hex::decode("000102030405060708090a0b0c0d0e0f").unwrap()).unwrap()
    }

    #[test]
    fn slip10_ed25519_vector1_master() {
        let master = Slip10Node::master(slip10_vector_seed().as_bytes()).unwrap();
        assert_eq!(
            hex::encode(master.key()),
            "2b4be7f19ee27bbf30c667b642d5f4aa69fd169872f8fc3059c08ebae2eb19e7"
        );
        assert_eq!(
            hex::encode(master.chain_code()),
            "90046a93de5380a72b5e45010748567d5ea02bbf6522f979e05c0d8d8ca9fffb"
        );
    }

    #[test]
    fn slip10_ed25519_vector1_first_hardened_child() {
        let path: DerivationPath = "m/0'".parse().unwrap();
        let key = derive_ed25519(&slip10_vector_seed(), &path).unwrap();
        assert_eq!(
            hex::encode(key.as_bytes()),
            "68e0fe46dfb67e368c75379acec591dad19df3cde26e63b93a8e704f1dade7a3"
        );
    }

    #[test]
    fn ed25519_refuses_normal_segments() {
        let path = DerivationPath::ethereum(0).unwrap();
        assert!(matches!(
            derive_ed25519(&test_seed(), &path),
            Err(WalletError::DerivationFailed(_))
        ));
    }

    #[test]
    fn bip44_eth_known_private_key() {
        let key = derive_secp256k1(&test_seed(), &DerivationPath::ethereum(0).unwrap()).unwrap();
        assert_eq!(
            hex::encode(key.as_bytes()),
            "1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727"
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        let seed = test_seed();
        for chain in Chain::ALL {
            let path = DerivationPath::for_chain(chain, 4).unwrap();
            let a = derive_for_chain(chain, &seed, &path).unwrap();
            let b = derive_for_chain(chain, &seed, &path).unwrap();
            assert_eq!(a.as_bytes(), b.as_bytes());
            assert_eq!(a.path(), &path);
        }
    }

    #[test]
    fn chains_derive_disjoint_material() {
        let seed = test_seed();
        for i in 0..3 {
            let sol = derive_for_chain(Chain::Solana, &seed, &DerivationPath::solana(i).unwrap())
                .unwrap();
            let eth =
                derive_for_chain(Chain::Ethereum, &seed, &DerivationPath::ethereum(i).unwrap())
                    .unwrap();
            assert_ne!(sol.as_bytes(), eth.as_bytes());
        }
    }

    #[test]
    fn indices_derive_distinct_keys() {
        let seed = test_seed();
        let k0 = derive_ed25519(&seed, &DerivationPath::solana(0).unwrap()).unwrap();
        let k1 = derive_ed25519(&seed, &DerivationPath::solana(1).unwrap()).unwrap();
        assert_ne!(k0.as_bytes(), k1.as_bytes());
    }

    #[test]
    fn master_path_returns_master_key() {
        let seed = slip10_vector_seed();
        let master = Slip10Node::master(seed.as_bytes()).unwrap();
        let derived = derive_ed25519(&seed, &"m".parse().unwrap()).unwrap();
        assert_eq!(derived.as_bytes(), master.key());
    }
}
