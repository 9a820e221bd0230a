use std::fmt;

use crypto_utils::SecretString;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::WalletError;
use crate::mnemonic::WordCount;

/// Environment variable overriding [`GeneratorConfig::word_count`].
pub const ENV_WORD_COUNT: &str = "WALLET_GEN_WORD_COUNT";
/// Environment variable overriding [`GeneratorConfig::passphrase`].
pub const ENV_PASSPHRASE: &str = "WALLET_GEN_PASSPHRASE";

/// Session generation settings.
#[derive(Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub word_count: WordCount,

    /// Optional BIP-39 passphrase ("25th word"). Never serialized.
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "deserialize_passphrase"
    )]
    pub passphrase: SecretString,

    /// Wallets derived as soon as a session starts. Zero by default, so
    /// the first `add_wallet` after `start` derives index 0.
    #[serde(default)]
    pub initial_wallets: u32,
}

fn deserialize_passphrase<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            word_count: WordCount::default(),
            passphrase: SecretString::default(),
            initial_wallets: 0,
        }
    }
}

impl fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("word_count", &self.word_count)
            .field("passphrase", &self.passphrase)
            .field("initial_wallets", &self.initial_wallets)
            .finish()
    }
}

impl GeneratorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, WalletError> {
        serde_json::from_str(json).map_err(|e| WalletError::InvalidConfig(e.to_string()))
    }

    /// Defaults overridden by `WALLET_GEN_*` variables.
    pub fn from_env() -> Result<Self, WalletError> {
        Self::default().merge_env(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`. Split out from [`Self::from_env`] so
    /// tests don't have to touch the process environment.
    pub fn merge_env<F>(mut self, lookup: F) -> Result<Self, WalletError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_WORD_COUNT) {
            let words: usize = raw.trim().parse().map_err(|_| {
                WalletError::InvalidConfig(format!("{ENV_WORD_COUNT} is not a number: {raw:?}"))
            })?;
            self.word_count = WordCount::try_from(words)?;
        }
        if let Some(passphrase) = lookup(ENV_PASSPHRASE) {
            self.passphrase = SecretString::from(passphrase);
        }
        Ok(self)
    }

    pub fn with_word_count(mut self, word_count: WordCount) -> Self {
        self.word_count = word_count;
        self
    }

    pub fn with_passphrase(mut self, passphrase: impl Into<SecretString>) -> Self {
        self.passphrase = passphrase.into();
        self
    }

    pub fn with_initial_wallets(mut self, count: u32) -> Self {
        self.initial_wallets = count;
        self
    }
}
