//! Cross-crate integration tests exercising the full pipeline:
//! mnemonic -> seed -> path -> key material -> wallet -> registry.
//!
//! These go through the public API of wallet_core only, so regressions at
//! the crate boundaries (chain-sol, chain-eth, crypto-utils) show up here.

use wallet_core::*;

const TEST_MNEMONIC: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

fn test_seed() -> Seed {
    mnemonic_to_seed(TEST_MNEMONIC, "").unwrap()
}

fn restore(chain: Chain, wallets: u32) -> Session {
    let config = GeneratorConfig::default().with_initial_wallets(wallets);
    Session::restore(chain, TEST_MNEMONIC, &config).unwrap()
}

// ─── SOL: mnemonic -> seed -> SLIP-0010 -> Base58 ───────────────────

#[test]
fn sol_first_wallet_shape() {
    let wallet = derive_wallet(Chain::Solana, &test_seed(), 0).unwrap();

    assert_eq!(wallet.path, "m/44'/501'/0'/0'");
    assert!((32..=44).contains(&wallet.public_key.len()));
    assert!(chain_sol::validate_address(&wallet.public_key));
    assert_eq!(wallet.private_key.len(), 128);
    assert!(wallet.private_key.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn sol_known_address() {
    let session = restore(Chain::Solana, 1);
    assert_eq!(
        session.wallets()[0].public_key,
        "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk"
    );
}

#[test]
fn sol_private_key_imports_back() {
    let wallet = derive_wallet(Chain::Solana, &test_seed(), 5).unwrap();
    let keypair = chain_sol::SolKeypair::from_secret_key_hex(&wallet.private_key).unwrap();
    assert_eq!(keypair.address(), wallet.public_key);
}

// ─── ETH: mnemonic -> seed -> BIP-32 -> EIP-55 ──────────────────────

#[test]
fn eth_known_wallet() {
    let session = restore(Chain::Ethereum, 1);
    let wallet = &session.wallets()[0];

    assert_eq!(wallet.path, "m/44'/60'/0'/0/0");
    assert_eq!(wallet.public_key, "0x9858EfFD232B4033E47d90003D41EC34EcaEda94");
    assert_eq!(
        wallet.private_key,
        "0x1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727"
    );
}

#[test]
fn eth_private_key_imports_back() {
    let wallet = derive_wallet(Chain::Ethereum, &test_seed(), 7).unwrap();
    let keypair = chain_eth::EthKeypair::from_private_key_hex(&wallet.private_key).unwrap();
    assert_eq!(keypair.address(), wallet.public_key);
    assert!(chain_eth::validate_address(&wallet.public_key).unwrap());
}

// ─── Registry behaviour through a session ───────────────────────────

#[test]
fn delete_does_not_renumber() {
    let mut session = restore(Chain::Solana, 3);
    session.delete_wallet(1).unwrap();

    let wallet = session.add_wallet().unwrap();
    assert_eq!(wallet.path, "m/44'/501'/3'/0'");

    let paths: Vec<_> = session.wallets().iter().map(|w| w.path.as_str()).collect();
    assert_eq!(
        paths,
        vec!["m/44'/501'/0'/0'", "m/44'/501'/2'/0'", "m/44'/501'/3'/0'"]
    );
}

#[test]
fn surviving_wallets_keep_their_keys() {
    let mut session = restore(Chain::Ethereum, 3);
    let before = session.wallets()[2].clone();
    session.delete_wallet(0).unwrap();
    assert_eq!(session.wallets()[1], before);
}

#[test]
fn clear_then_add_continues_counter() {
    let mut session = restore(Chain::Ethereum, 2);
    session.clear_wallets();
    assert!(session.wallets().is_empty());

    let wallet = session.add_wallet().unwrap();
    assert_eq!(wallet.path, "m/44'/60'/0'/0/2");
}

#[test]
fn cleared_wallets_can_be_rederived() {
    let mut session = restore(Chain::Solana, 3);
    let before: Vec<WalletInfo> = session.wallets().to_vec();
    session.clear_wallets();

    let seed = test_seed();
    for (i, wallet) in before.iter().enumerate() {
        assert_eq!(&derive_wallet(Chain::Solana, &seed, i as u32).unwrap(), wallet);
    }
}

#[test]
fn registry_matches_stateless_derivation() {
    let session = restore(Chain::Solana, 4);
    let seed = test_seed();
    for (i, wallet) in session.wallets().iter().enumerate() {
        let expected = derive_wallet(Chain::Solana, &seed, i as u32).unwrap();
        assert_eq!(wallet, &expected);
    }
}

// ─── Cross-chain: same mnemonic, different wallets ──────────────────

#[test]
fn same_mnemonic_produces_different_wallets_per_chain() {
    let sol = restore(Chain::Solana, 3);
    let eth = restore(Chain::Ethereum, 3);

    for (s, e) in sol.wallets().iter().zip(eth.wallets()) {
        assert_ne!(s.public_key, e.public_key);
        assert!(!validate_address(&s.public_key, Chain::Ethereum));
        assert!(!validate_address(&e.public_key, Chain::Solana));
    }
}

#[test]
fn out_of_range_scalar_is_invalid_key_material() {
    let path = DerivationPath::ethereum(0).unwrap();
    let result = to_wallet_info(Chain::Ethereum, &path, &[0xff; 32]);
    assert!(matches!(result, Err(WalletError::InvalidKeyMaterial { .. })));
}

// ─── Fresh sessions ─────────────────────────────────────────────────

#[test]
fn start_then_add_derives_index_zero() {
    let mut session = Session::start(Chain::Solana, &GeneratorConfig::default()).unwrap();
    assert!(session.wallets().is_empty());

    let wallet = session.add_wallet().unwrap();
    assert_eq!(wallet.path, "m/44'/501'/0'/0'");
    assert!((32..=44).contains(&wallet.public_key.len()));
    assert_eq!(wallet.private_key.len(), 128);
}

#[test]
fn fresh_session_restores_to_same_wallets() {
    let config = GeneratorConfig::default().with_initial_wallets(2);
    let original = Session::start(Chain::Ethereum, &config).unwrap();
    let restored =
        Session::restore(Chain::Ethereum, original.mnemonic_phrase(), &config).unwrap();
    assert_eq!(original.wallets(), restored.wallets());
}

#[test]
fn generated_phrases_validate() {
    for words in [12, 15, 18, 21, 24] {
        let mnemonic = generate_mnemonic(WordCount::try_from(words).unwrap()).unwrap();
        assert_eq!(mnemonic.word_count(), words);
        assert!(validate_mnemonic(mnemonic.as_str()));
    }
}

#[test]
fn unknown_chain_tag_is_rejected_before_derivation() {
    assert!(matches!(
        "dogecoin".parse::<Chain>(),
        Err(WalletError::UnsupportedChain(_))
    ));
}
