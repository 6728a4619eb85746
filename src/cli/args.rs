//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct. With no subcommand the
//! binary behaves as the hook.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// staleguard - Dependency freshness advisories for agent shell hooks.
#[derive(Debug, Parser)]
#[command(name = "staleguard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to an extra config file (applied after user and project configs)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (to stderr)
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Read a hook event from stdin and write a decision (default)
    Hook,

    /// Show freshness details for one package
    Check(CheckArgs),

    /// Show which packages a command would install
    Parse(ParseArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Package name, e.g. `left-pad` or `@types/node`
    pub package: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `parse` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ParseArgs {
    /// Shell command to inspect (quote it)
    pub command: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
