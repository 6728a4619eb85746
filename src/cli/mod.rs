//! Command-line interface for staleguard.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, ParseArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
