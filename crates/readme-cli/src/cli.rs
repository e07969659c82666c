//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Regenerate the marked region of a README
#[derive(Parser, Debug)]
#[command(name = "readme-update")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Document to update [default: README.md]
    #[arg(short, long, global = true, env = "README_UPDATE_FILE")]
    pub file: Option<PathBuf>,

    /// Config file (.toml, .json, .yaml); readme-update.toml is used if present
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Literal replacement content
    #[arg(long, global = true, conflicts_with = "content_file")]
    pub content: Option<String>,

    /// Read the replacement content from a file
    #[arg(long, global = true)]
    pub content_file: Option<PathBuf>,

    /// Override the start marker
    #[arg(long, global = true)]
    pub start_marker: Option<String>,

    /// Override the end marker
    #[arg(long, global = true)]
    pub end_marker: Option<String>,

    /// The command to run (defaults to `update`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Rewrite the marker region with freshly generated content
    ///
    /// Examples:
    ///   readme-update                          # placeholder content into README.md
    ///   readme-update update --content "v1.2"  # literal content
    ///   readme-update update --dry-run         # print a diff, write nothing
    Update {
        /// Print the diff instead of writing the file
        #[arg(long)]
        dry_run: bool,
    },

    /// Exit non-zero when the marker region is out of date
    ///
    /// Useful in CI to verify a committed README was regenerated.
    Check {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the current content of the marker region
    Show,

    /// Generate shell completions
    ///
    /// Examples:
    ///   readme-update completions bash > ~/.local/share/bash-completion/completions/readme-update
    ///   readme-update completions zsh > ~/.zfunc/_readme-update
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
