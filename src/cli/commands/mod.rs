//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`].

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod hook;
pub mod parse;

pub use dispatcher::{load_effective_config, Command, CommandDispatcher, CommandResult};
