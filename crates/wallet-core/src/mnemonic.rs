use std::fmt;

use bip39::{Language, Mnemonic};
use crypto_utils::random::try_random_secret;
use crypto_utils::SecretString;
use serde::{Deserialize, Serialize};

use crate::error::WalletError;
use crate::seed::Seed;

/// Supported BIP-39 phrase lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum WordCount {
    /// 128 bits of entropy
    #[default]
    Twelve,
    Fifteen,
    Eighteen,
    TwentyOne,
    /// 256 bits of entropy
    TwentyFour,
}

impl WordCount {
    pub fn words(&self) -> usize {
        match self {
            WordCount::Twelve => 12,
            WordCount::Fifteen => 15,
            WordCount::Eighteen => 18,
            WordCount::TwentyOne => 21,
            WordCount::TwentyFour => 24,
        }
    }

    /// Entropy size in bytes: 4 bytes per 3 words.
    pub fn entropy_bytes(&self) -> usize {
        self.words() / 3 * 4
    }
}

impl TryFrom<usize> for WordCount {
    type Error = WalletError;

    fn try_from(words: usize) -> Result<Self, Self::Error> {
        match words {
            12 => Ok(WordCount::Twelve),
            15 => Ok(WordCount::Fifteen),
            18 => Ok(WordCount::Eighteen),
            21 => Ok(WordCount::TwentyOne),
            24 => Ok(WordCount::TwentyFour),
            n => Err(WalletError::InvalidConfig(format!(
                "word count must be 12, 15, 18, 21 or 24, got {n}"
            ))),
        }
    }
}

impl From<WordCount> for usize {
    fn from(count: WordCount) -> Self {
        count.words()
    }
}

/// Generate a fresh English BIP-39 phrase from OS entropy.
///
/// Fails only with [`WalletError::EntropySourceUnavailable`]; there is no
/// weaker fallback source.
pub fn generate_mnemonic(word_count: WordCount) -> Result<ZeroizingMnemonic, WalletError> {
    let entropy = try_random_secret::<32>()?;
    let mnemonic = Mnemonic::from_entropy_in(
        Language::English,
        &entropy.as_bytes()[..word_count.entropy_bytes()],
    )
    .map_err(|e| WalletError::Internal(e.to_string()))?;

    Ok(ZeroizingMnemonic::from_inner(mnemonic))
}

/// True if `phrase` is a well-formed English BIP-39 phrase with a valid
/// checksum.
pub fn validate_mnemonic(phrase: &str) -> bool {
    ZeroizingMnemonic::parse(phrase).is_ok()
}

/// The 2048-word English list, for autocomplete in phrase entry.
pub fn word_list() -> &'static [&'static str] {
    Language::English.word_list()
}

pub fn is_valid_word(word: &str) -> bool {
    Language::English.find_word(word).is_some()
}

/// A checksummed English phrase, zeroized on drop.
#[derive(Clone)]
pub struct ZeroizingMnemonic {
    inner: Mnemonic,
    phrase: SecretString,
}

impl ZeroizingMnemonic {
    fn from_inner(inner: Mnemonic) -> Self {
        let phrase = SecretString::new(inner.to_string());
        Self { inner, phrase }
    }

    /// Parse user input. Whitespace runs collapse to single spaces and case
    /// is folded before word lookup; unknown words, a bad word count or a
    /// bad checksum are rejected.
    pub fn parse(phrase: &str) -> Result<Self, WalletError> {
        let normalized = SecretString::new(
            phrase
                .split_whitespace()
                .map(str::to_lowercase)
                .collect::<Vec<_>>()
                .join(" "),
        );
        let mnemonic = Mnemonic::parse_in(Language::English, normalized.as_str())
            .map_err(|e| WalletError::InvalidMnemonic(e.to_string()))?;

        Ok(Self::from_inner(mnemonic))
    }

    pub fn as_str(&self) -> &str {
        self.phrase.as_str()
    }

    pub fn words(&self) -> Vec<&str> {
        self.phrase.split(' ').collect()
    }

    pub fn word_count(&self) -> usize {
        self.phrase.split(' ').count()
    }

    /// Expand to the 64-byte BIP-39 seed. Costs 2048 PBKDF2 rounds; cache
    /// the result rather than calling this per wallet.
    pub fn to_seed(&self, passphrase: &str) -> Seed {
        Seed::from_mnemonic(self, passphrase)
    }

    pub(crate) fn inner(&self) -> &Mnemonic {
        &self.inner
    }
}

impl fmt::Debug for ZeroizingMnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZeroizingMnemonic")
            .field("words", &self.word_count())
            .finish_non_exhaustive()
    }
}
