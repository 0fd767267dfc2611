//! emotrack library root.
//! Exposes the CLI parser, the high-level run() function, and the telemetry
//! store used by the dashboard pages.

pub mod classifier;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Home { .. } => cli::commands::home::handle(&cli.command, cfg),
        Commands::Monitor { .. } => cli::commands::monitor::handle(&cli.command, cfg),
        Commands::About => cli::commands::about::handle(cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Config is loaded once; command-line overrides win.
    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_database(custom_db)
            .to_string_lossy()
            .to_string();
    }
    if let Some(custom_model) = &cli.model {
        cfg.model = custom_model.clone();
    }

    dispatch(&cli, &cfg)
}
