use tracing::debug;

use crate::adapter::ChainAdapter;
use crate::derivation_path::HARDENED_OFFSET;
use crate::error::WalletError;
use crate::seed::Seed;
use crate::types::WalletInfo;

/// Ordered wallets for one session, in creation order.
///
/// `next_index` only moves forward: deleting or clearing never frees a
/// derivation index, so two different wallets never share a path within a
/// session.
#[derive(Debug, Default)]
pub struct WalletRegistry {
    wallets: Vec<WalletInfo>,
    next_index: u32,
}

impl WalletRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the wallet at `next_index`, append it and advance the counter.
    /// On failure the registry is unchanged.
    pub fn add(
        &mut self,
        adapter: &dyn ChainAdapter,
        seed: &Seed,
    ) -> Result<&WalletInfo, WalletError> {
        let index = self.next_index;
        if index >= HARDENED_OFFSET {
            return Err(WalletError::IndexExhausted);
        }

        let wallet = adapter.derive_wallet(seed, index)?;
        debug!(
            chain = %adapter.chain(),
            path = %wallet.path,
            address = %wallet.public_key,
            "wallet added"
        );

        self.next_index = index + 1;
        self.wallets.push(wallet);
        self.wallets
            .last()
            .ok_or_else(|| WalletError::Internal("wallet missing after append".into()))
    }

    /// Remove the wallet at display `position`. Remaining wallets keep
    /// their original paths.
    pub fn delete_at(&mut self, position: usize) -> Result<WalletInfo, WalletError> {
        if position >= self.wallets.len() {
            return Err(WalletError::WalletNotFound(position));
        }
        let removed = self.wallets.remove(position);
        debug!(position, path = %removed.path, "wallet deleted");
        Ok(removed)
    }

    /// Drop every visible wallet. The index counter is kept.
    pub fn clear(&mut self) {
        debug!(count = self.wallets.len(), "wallets cleared");
        self.wallets.clear();
    }

    pub fn wallets(&self) -> &[WalletInfo] {
        &self.wallets
    }

    pub fn get(&self, position: usize) -> Option<&WalletInfo> {
        self.wallets.get(position)
    }

    pub fn len(&self) -> usize {
        self.wallets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }

    /// Index the next `add` will derive.
    pub fn next_index(&self) -> u32 {
        self.next_index
    }
}
