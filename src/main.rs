//! Gradual Blur CLI
//!
//! Command-line interface for the gradual blur layer generator.

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::debug;

use gradual_blur::cli::{commands, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger; RUST_LOG still takes precedence
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    debug!("Gradual Blur v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(cmd) => handle_command(cmd),
        None => {
            println!("Gradual Blur v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands) -> anyhow::Result<()> {
    let output = match cmd {
        Commands::Generate(args) => commands::generate(&args),
        Commands::Presets => commands::list_presets(),
    };

    match output {
        Ok(text) => {
            println!("{}", text);
            Ok(())
        }
        Err(e) => {
            let hint = e.recovery_hint();
            Err(anyhow::Error::new(e)).context(hint)
        }
    }
}
