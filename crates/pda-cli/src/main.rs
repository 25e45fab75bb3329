//! `pda`: derive program derived addresses from the command line.

use clap::Parser;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli::Cli;
use crate::config::Config;

mod cli;
mod commands;
mod config;
mod seed;

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    // stdout carries the derived address only
    let stderr = fmt::layer().with_target(false).with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr)
        .init();
}

// Reason: the derived address is written to stdout
#[allow(clippy::print_stdout)]
fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    init_logging();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let derived = commands::run(&cli.command, &config)?;
    println!("{}", derived.render(cli.output)?);

    Ok(())
}
