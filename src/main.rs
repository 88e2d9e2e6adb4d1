//! Vaultscope CLI entry point.

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vaultscope::cli::args::{Cli, Commands};
use vaultscope::cli::output::Output;
use vaultscope::cli::{create, delete, list, rename, search};
use vaultscope::config::VaultConfig;
use vaultscope::error::VaultError;
use vaultscope::vault::Vault;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<(), VaultError> {
    let config = VaultConfig::load(cli.config.as_deref())?.with_root(cli.vault.clone());
    let output = Output::new(cli.output_format(), cli.quiet);

    match &cli.command {
        Commands::List(args) => list::run(&Vault::new(config), args, &output),
        Commands::Search(args) => search::run(&config, args, &output),
        Commands::Create(args) => create::create_file(&Vault::new(config), args, &output),
        Commands::Mkdir(args) => create::create_folder(&Vault::new(config), args, &output),
        Commands::Delete(args) => delete::run(&Vault::new(config), args, &output),
        Commands::Rename(args) => rename::run(&Vault::new(config), args, &output),
        Commands::Config => output.print(&config),
    }
}
