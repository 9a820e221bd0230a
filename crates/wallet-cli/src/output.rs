//! Text and JSON rendering of a session.

use anyhow::Result;
use serde::Serialize;
use wallet_core::{Chain, Session, WalletInfo};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionOutput<'a> {
    chain: Chain,
    mnemonic: &'a str,
    wallets: Vec<WalletOutput<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WalletOutput<'a> {
    path: &'a str,
    public_key: &'a str,
    private_key: String,
}

/// Hide all but the first and last four characters.
pub fn mask(secret: &str) -> String {
    if secret.len() <= 12 {
        return "*".repeat(secret.len());
    }
    format!("{}{}{}", &secret[..4], "*".repeat(8), &secret[secret.len() - 4..])
}

fn wallet_output(wallet: &WalletInfo, reveal: bool) -> WalletOutput<'_> {
    WalletOutput {
        path: &wallet.path,
        public_key: &wallet.public_key,
        private_key: if reveal {
            wallet.private_key.clone()
        } else {
            mask(&wallet.private_key)
        },
    }
}

pub fn print_session(session: &Session, reveal: bool, json: bool) -> Result<()> {
    if json {
        let out = SessionOutput {
            chain: session.chain(),
            mnemonic: session.mnemonic_phrase(),
            wallets: session
                .wallets()
                .iter()
                .map(|w| wallet_output(w, reveal))
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Chain:    {}", session.chain());
    println!("Mnemonic: {}", session.mnemonic_phrase());
    println!();
    for (position, wallet) in session.wallets().iter().enumerate() {
        let out = wallet_output(wallet, reveal);
        println!("[{position}] {}", out.path);
        println!("    Address:     {}", out.public_key);
        println!("    Private Key: {}", out.private_key);
    }
    if !reveal {
        println!();
        println!("Private keys are masked; pass --reveal to print them.");
    }
    Ok(())
}
