use clap::{Parser, Subcommand};
use xshell::{cmd, Shell};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Test {
        /// Only run the library crate's tests
        #[clap(short, long, default_value_t = false)]
        only_lib: bool,
    },
    /// Lint and format check; `--fix` applies the fixes instead
    Check {
        #[clap(short, long, default_value_t = false)]
        fix: bool,
    },
    Docs,
    /// Derive the pinned test fixtures through the CLI
    Fixtures,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let sh = Shell::new()?;
    let args = Args::parse();

    match args.command {
        Commands::Test { only_lib } => {
            println!("cargo test");
            if only_lib {
                cmd!(sh, "cargo test -p program-address").run()?;
            } else {
                cmd!(sh, "cargo test --workspace").run()?;
            }
        }
        Commands::Check { fix: false } => {
            println!("clippy + rustfmt");
            cmd!(sh, "cargo clippy --all-targets --workspace -- -D warnings").run()?;
            cmd!(sh, "cargo fmt --all --check").run()?;
        }
        Commands::Check { fix: true } => {
            println!("clippy --fix + rustfmt");
            cmd!(sh, "cargo clippy --fix --allow-dirty --all-targets --workspace").run()?;
            cmd!(sh, "cargo fmt --all").run()?;
        }
        Commands::Docs => {
            println!("cargo doc");
            cmd!(sh, "cargo doc --workspace --no-deps").run()?;

            if std::option_env!("CI").is_none() {
                #[cfg(target_os = "macos")]
                cmd!(sh, "open target/doc/program_address/index.html").run()?;

                #[cfg(target_os = "linux")]
                cmd!(sh, "xdg-open target/doc/program_address/index.html").run()?;
            }
        }
        Commands::Fixtures => {
            println!("deriving fixtures");
            let wallet = "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM";
            let mint = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
            let metadata_program = "metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s";
            let wallet_seed = format!("b58:{wallet}");
            cmd!(
                sh,
                "cargo run -q --bin pda -- find -p {metadata_program} -s metadata -s {wallet_seed}"
            )
            .run()?;
            cmd!(
                sh,
                "cargo run -q --bin pda -- associated -w {wallet} -m {mint}"
            )
            .run()?;
        }
    }

    Ok(())
}
