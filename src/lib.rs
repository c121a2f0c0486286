//! inetlog-analyzer library root.
//! Exposes the CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod core;
pub mod errors;
pub mod logfile;
pub mod models;
pub mod report;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use errors::AppResult;

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::try_parse()?;
    cli::commands::analyze::handle(&cli)
}
