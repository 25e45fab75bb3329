use eyre::WrapErr;
use program_address::{
    create_program_address, find_associated_token_address_with_program_id, find_program_address,
    Bump, PublicKey,
};

use crate::cli::{Command, Output};
use crate::config::Config;
use crate::seed::Seed;

/// Result of a command: an address and, for searches, its bump.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Derived {
    pub(crate) address: PublicKey,
    pub(crate) bump: Option<Bump>,
}

impl Derived {
    pub(crate) fn render(&self, output: Output) -> eyre::Result<String> {
        match output {
            Output::Text => Ok(self.bump.map_or_else(
                || self.address.to_string(),
                |bump| format!("{} {bump}", self.address),
            )),
            Output::Json => {
                let value = serde_json::json!({
                    "address": self.address.to_string(),
                    "bump": self.bump,
                });
                Ok(serde_json::to_string(&value)?)
            }
        }
    }
}

#[tracing::instrument(level = "debug", skip_all)]
pub(crate) fn run(command: &Command, config: &Config) -> eyre::Result<Derived> {
    match command {
        Command::Derive { program, seeds } => {
            let program_id = config.resolve_program(program)?;
            let seeds = seed_slices(seeds);
            let address = create_program_address(&seeds, &program_id)
                .wrap_err_with(|| format!("deriving address under program {program_id}"))?;
            Ok(Derived {
                address,
                bump: None,
            })
        }
        Command::Find { program, seeds } => {
            let program_id = config.resolve_program(program)?;
            let seeds = seed_slices(seeds);
            let (address, bump) = find_program_address(&seeds, &program_id)
                .wrap_err_with(|| format!("searching canonical address under program {program_id}"))?;
            Ok(Derived {
                address,
                bump: Some(bump),
            })
        }
        Command::Associated {
            wallet,
            mint,
            token_program,
        } => {
            let wallet = wallet.parse::<PublicKey>().wrap_err("invalid wallet")?;
            let mint = mint.parse::<PublicKey>().wrap_err("invalid mint")?;
            let token_program_id = config.resolve_program(token_program)?;
            tracing::info!(%wallet, %mint, %token_program_id, "deriving associated token address");
            let (address, bump) =
                find_associated_token_address_with_program_id(&wallet, &mint, &token_program_id)
                    .wrap_err("searching associated token address")?;
            Ok(Derived {
                address,
                bump: Some(bump),
            })
        }
    }
}

fn seed_slices(seeds: &[Seed]) -> Vec<&[u8]> {
    seeds.iter().map(AsRef::as_ref).collect()
}
