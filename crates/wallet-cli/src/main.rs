//! wallet-gen: generate Solana and Ethereum HD wallets from the terminal.

mod commands;
mod output;

use clap::Parser;
use commands::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so stdout stays machine-readable with --json.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
