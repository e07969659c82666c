//! readme-update CLI
//!
//! Regenerates the `<!-- update_start -->` … `<!-- update_end -->` region
//! of a README (or any text document) in place.

mod cli;
mod commands;
mod config;
mod error;
mod logging;

use std::path::Path;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use colored::Colorize;

use cli::{Cli, Commands};
use config::Settings;
use error::Result;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialise logging: {}", "warning".yellow(), e);
    }
    tracing::debug!("verbose mode enabled");

    let cwd = std::env::current_dir()?;
    if execute(&cwd, cli)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Runs the selected command. `Ok(false)` means a clean run whose verdict
/// is failure (a stale `check`).
fn execute(cwd: &Path, cli: Cli) -> Result<bool> {
    let command = cli
        .command
        .clone()
        .unwrap_or(Commands::Update { dry_run: false });
    let settings = || Settings::resolve(cwd, &cli);

    match command {
        Commands::Update { dry_run } => {
            commands::run_update(&settings()?, dry_run)?;
            Ok(true)
        }
        Commands::Check { json } => commands::run_check(&settings()?, json),
        Commands::Show => {
            commands::run_show(&settings()?)?;
            Ok(true)
        }
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "readme-update",
                &mut std::io::stdout(),
            );
            Ok(true)
        }
    }
}
