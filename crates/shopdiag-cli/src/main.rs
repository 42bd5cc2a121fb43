//! CLI entry point.
//!
//! Loads `.env`, parses arguments, sets up logging on stderr and dispatches
//! to a handler. Stdout carries only the command output.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use shopdiag_cli::{Cli, CliConfig, CliError, Commands, handlers};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn dispatch(command: Commands, config: &CliConfig) -> Result<bool, CliError> {
    match command {
        Commands::Check(args) => handlers::check::execute(config, &args).await,
        Commands::Env => {
            handlers::env::execute(config)?;
            Ok(true)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads its `env` fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command.clone() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::from_cli(&cli);
    match dispatch(command, &config).await {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(err.exit_code());
        }
    }
}
