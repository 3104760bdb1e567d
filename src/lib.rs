//! hiasify library root.
//! Exposes the CLI parser, the high-level run() function and the
//! archive → records → play events → tables pipeline.

pub mod archive;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use ui::messages::warning;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(cli, *force),
        Commands::Config { .. } => {
            let path = Config::resolve_path(cli.config.as_deref());
            cli::commands::config::handle(&cli.command, cfg, &path)
        }
        Commands::Years => cli::commands::years::handle(cfg),
        Commands::Alltime { .. } => cli::commands::alltime::handle(&cli.command, cfg),
        Commands::Wrapped { .. } => cli::commands::wrapped::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once, --config wins over the default location;
    // init and config must work even when the existing file is broken
    let cfg = match cli.command {
        Commands::Init { .. } => Config::default(),
        Commands::Config { .. } => Config::load(cli.config.as_deref()).unwrap_or_else(|e| {
            warning(format!("{e} (defaults in use)"));
            Config::default()
        }),
        _ => Config::load(cli.config.as_deref())?,
    };

    dispatch(&cli, &cfg)
}
