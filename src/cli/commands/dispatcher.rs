//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, ConfigPaths, StaleguardConfig};
use crate::error::Result;
use crate::ui::{StaleguardTheme, Streams};

/// Trait for command implementations.
pub trait Command {
    /// Execute the command against the given streams.
    fn execute(&self, streams: &mut Streams<'_>) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Load config layers for a project root plus the process environment.
pub fn load_effective_config(
    project_root: Option<&Path>,
    explicit: Option<&Path>,
) -> Result<StaleguardConfig> {
    let paths = ConfigPaths::discover(project_root, explicit);
    load_config(&paths, |key| std::env::var(key).ok())
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config_override: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a dispatcher; `config_override` is the `--config` flag.
    pub fn new(config_override: Option<PathBuf>) -> Self {
        Self { config_override }
    }

    /// Get the `--config` path, if any.
    pub fn config_override(&self) -> Option<&Path> {
        self.config_override.as_deref()
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, streams: &mut Streams<'_>) -> Result<CommandResult> {
        match &cli.command {
            None | Some(Commands::Hook) => {
                let cmd = super::hook::HookCommand::new(self.config_override.clone());
                cmd.execute(streams)
            }
            Some(Commands::Check(args)) => {
                let cwd = std::env::current_dir()?;
                let config = load_effective_config(Some(&cwd), self.config_override())?;
                let cmd =
                    super::check::CheckCommand::new(args.clone(), config, StaleguardTheme::detect());
                cmd.execute(streams)
            }
            Some(Commands::Parse(args)) => {
                let cmd = super::parse::ParseCommand::new(args.clone());
                cmd.execute(streams)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(streams)
            }
        }
    }
}
