use tracing::info;

use crate::adapter::{adapter_for, ChainAdapter};
use crate::config::GeneratorConfig;
use crate::error::WalletError;
use crate::mnemonic::{generate_mnemonic, ZeroizingMnemonic};
use crate::registry::WalletRegistry;
use crate::seed::Seed;
use crate::types::{Chain, WalletInfo};

/// One generation session: a chain, a mnemonic, the seed it expands to and
/// the wallets derived so far.
///
/// The mnemonic and seed never change after construction. All mutation goes
/// through `&mut self`, so index assignment and append cannot interleave.
/// Secrets are zeroized when the session is dropped.
pub struct Session {
    chain: Chain,
    adapter: &'static dyn ChainAdapter,
    mnemonic: ZeroizingMnemonic,
    seed: Seed,
    registry: WalletRegistry,
}

impl Session {
    /// Fresh mnemonic from OS entropy, then `config.initial_wallets` wallets.
    pub fn start(chain: Chain, config: &GeneratorConfig) -> Result<Self, WalletError> {
        let mnemonic = generate_mnemonic(config.word_count)?;
        let session = Self::open(chain, mnemonic, config)?;
        info!(
            chain = %chain,
            words = config.word_count.words(),
            wallets = session.registry.len(),
            "session started"
        );
        Ok(session)
    }

    /// Rebuild a session from an existing phrase. Wallet paths restart at
    /// index 0, so the same phrase yields the same wallets.
    pub fn restore(
        chain: Chain,
        phrase: &str,
        config: &GeneratorConfig,
    ) -> Result<Self, WalletError> {
        let mnemonic = ZeroizingMnemonic::parse(phrase)?;
        let session = Self::open(chain, mnemonic, config)?;
        info!(
            chain = %chain,
            words = session.mnemonic.word_count(),
            wallets = session.registry.len(),
            "session restored"
        );
        Ok(session)
    }

    fn open(
        chain: Chain,
        mnemonic: ZeroizingMnemonic,
        config: &GeneratorConfig,
    ) -> Result<Self, WalletError> {
        let seed = mnemonic.to_seed(config.passphrase.as_str());
        let mut session = Self {
            chain,
            adapter: adapter_for(chain),
            mnemonic,
            seed,
            registry: WalletRegistry::new(),
        };
        session.add_wallets(config.initial_wallets)?;
        Ok(session)
    }

    pub fn add_wallet(&mut self) -> Result<&WalletInfo, WalletError> {
        self.registry.add(self.adapter, &self.seed)
    }

    /// Add `count` wallets. Stops at the first failure; wallets added before
    /// it are kept.
    pub fn add_wallets(&mut self, count: u32) -> Result<&[WalletInfo], WalletError> {
        let start = self.registry.len();
        for _ in 0..count {
            self.registry.add(self.adapter, &self.seed)?;
        }
        Ok(&self.registry.wallets()[start..])
    }

    pub fn delete_wallet(&mut self, position: usize) -> Result<WalletInfo, WalletError> {
        self.registry.delete_at(position)
    }

    pub fn clear_wallets(&mut self) {
        self.registry.clear();
    }

    pub fn wallets(&self) -> &[WalletInfo] {
        self.registry.wallets()
    }

    pub fn next_index(&self) -> u32 {
        self.registry.next_index()
    }

    pub fn chain(&self) -> Chain {
        self.chain
    }

    /// The phrase for the display layer's reveal and copy actions.
    pub fn mnemonic_phrase(&self) -> &str {
        self.mnemonic.as_str()
    }

    pub fn validate_address(&self, address: &str) -> bool {
        self.adapter.validate_address(address)
    }

    /// End the session, dropping (and zeroizing) the mnemonic, seed and
    /// every wallet.
    pub fn end(self) {
        info!(chain = %self.chain, wallets = self.registry.len(), "session ended");
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("chain", &self.chain)
            .field("mnemonic", &self.mnemonic)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
