//! docbabel CLI - translation pipeline for standards documents.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Extract { file, json } => commands::extract::run(file, json, cli.verbose),

        Commands::Translate {
            config,
            language,
            locale_dir,
            source_language,
            substitutions,
        } => commands::translate::run(
            config,
            language,
            locale_dir,
            source_language,
            substitutions,
            cli.verbose,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
