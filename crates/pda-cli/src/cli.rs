use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::seed::Seed;

/// Derive program derived addresses.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// Path to a TOML file defining program aliases
    #[arg(short, long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = Output::Text)]
    pub(crate) output: Output,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Single derivation attempt; fails if the address lands on the curve
    Derive {
        /// Owning program: alias or Base58 public key
        #[arg(short, long)]
        program: String,

        /// Seed as `hex:<digits>`, `b58:<base58>`, `utf8:<text>` or plain text
        #[arg(short, long = "seed")]
        seeds: Vec<Seed>,
    },
    /// Canonical bump search
    Find {
        /// Owning program: alias or Base58 public key
        #[arg(short, long)]
        program: String,

        /// Seed as `hex:<digits>`, `b58:<base58>`, `utf8:<text>` or plain text
        #[arg(short, long = "seed")]
        seeds: Vec<Seed>,
    },
    /// Associated token account of a wallet for a mint
    Associated {
        /// Wallet public key
        #[arg(short, long)]
        wallet: String,

        /// Token mint public key
        #[arg(short, long)]
        mint: String,

        /// Token program: alias or Base58 public key
        #[arg(short, long, default_value = "token")]
        token_program: String,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub(crate) enum Output {
    Text,
    Json,
}
