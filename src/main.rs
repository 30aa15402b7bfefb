//! subplay command-line entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use subplay::cli::{Cli, Commands, ConfigCommands};

/// Environment variable holding the log filter (EnvFilter syntax).
const LOG_ENV: &str = "SUBPLAY_LOG";

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(atty::is(atty::Stream::Stderr));

    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Play {
            file,
            start,
            interval,
            step,
            plain,
        } => commands::play::handle(&file, start, interval, step, plain),
        Commands::Info { file, json } => commands::info::handle(&file, json),
        Commands::At { file, time } => commands::at::handle(&file, time),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Edit => commands::config::handle_edit(),
            ConfigCommands::Reset { yes } => commands::config::handle_reset(yes),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
