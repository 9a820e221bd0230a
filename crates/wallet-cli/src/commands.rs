//! CLI command definitions and handlers.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::debug;
use wallet_core::{validate_mnemonic, Chain, GeneratorConfig, Session, WordCount};

use crate::output;

/// Generate Solana and Ethereum HD wallets from a BIP-39 mnemonic.
#[derive(Parser, Debug)]
#[command(name = "wallet-gen")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a new mnemonic and derive wallets from it.
    New {
        #[command(flatten)]
        wallet: WalletArgs,

        /// Number of mnemonic words (12, 15, 18, 21, or 24).
        #[arg(short, long)]
        words: Option<usize>,
    },

    /// Re-derive wallets from an existing mnemonic.
    Restore {
        #[command(flatten)]
        wallet: WalletArgs,

        /// BIP-39 mnemonic phrase.
        #[arg(short = 'm', long)]
        phrase: String,
    },

    /// Check a mnemonic phrase without deriving anything.
    Validate {
        /// BIP-39 mnemonic phrase.
        #[arg(short = 'm', long)]
        phrase: String,
    },
}

#[derive(Args, Debug)]
pub struct WalletArgs {
    /// Target chain.
    #[arg(long, value_enum)]
    pub chain: CliChain,

    /// Number of wallets to derive.
    #[arg(short, long, default_value = "1")]
    pub count: u32,

    /// BIP-39 passphrase (overrides WALLET_GEN_PASSPHRASE).
    #[arg(short, long)]
    pub passphrase: Option<String>,

    /// Print private keys in full instead of masked.
    #[arg(long)]
    pub reveal: bool,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// CLI-facing chain selector, mapped onto [`Chain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliChain {
    #[value(alias = "sol")]
    Solana,
    #[value(alias = "eth")]
    Ethereum,
}

impl From<CliChain> for Chain {
    fn from(chain: CliChain) -> Self {
        match chain {
            CliChain::Solana => Chain::Solana,
            CliChain::Ethereum => Chain::Ethereum,
        }
    }
}

impl WalletArgs {
    /// Environment config with command-line options applied on top.
    fn config(&self, words: Option<usize>) -> Result<GeneratorConfig> {
        let mut config = GeneratorConfig::from_env().context("invalid environment config")?;
        if let Some(words) = words {
            config = config.with_word_count(WordCount::try_from(words)?);
        }
        config = config.with_initial_wallets(self.count);
        if let Some(passphrase) = &self.passphrase {
            config = config.with_passphrase(passphrase.as_str());
        }
        Ok(config)
    }
}

impl Commands {
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::New { wallet, words } => {
                let config = wallet.config(words)?;
                debug!(?config, "generating new session");
                let session = Session::start(wallet.chain.into(), &config)?;
                output::print_session(&session, wallet.reveal, wallet.json)?;
                session.end();
            }
            Commands::Restore { wallet, phrase } => {
                let config = wallet.config(None)?;
                let session = Session::restore(wallet.chain.into(), &phrase, &config)
                    .context("could not restore from phrase")?;
                output::print_session(&session, wallet.reveal, wallet.json)?;
                session.end();
            }
            Commands::Validate { phrase } => {
                if !validate_mnemonic(&phrase) {
                    bail!("invalid mnemonic phrase");
                }
                println!("valid");
            }
        }
        Ok(())
    }
}
