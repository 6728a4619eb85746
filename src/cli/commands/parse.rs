//! Parse command implementation.
//!
//! `staleguard parse "<command>"` prints the packages the hook would look
//! up, without touching the network.

use crate::cli::args::ParseArgs;
use crate::error::Result;
use crate::parser::extract_packages;
use crate::ui::Streams;

use super::dispatcher::{Command, CommandResult};

/// The parse command implementation.
pub struct ParseCommand {
    args: ParseArgs,
}

impl ParseCommand {
    /// Create a new parse command.
    pub fn new(args: ParseArgs) -> Self {
        Self { args }
    }
}

impl Command for ParseCommand {
    fn execute(&self, streams: &mut Streams<'_>) -> Result<CommandResult> {
        let packages = extract_packages(&self.args.command);

        if self.args.json {
            let names: Vec<&str> = packages.iter().map(|p| p.resolved_name.as_str()).collect();
            writeln!(
                streams.stdout,
                "{}",
                serde_json::to_string(&names).map_err(anyhow::Error::from)?
            )?;
        } else {
            for package in &packages {
                writeln!(streams.stdout, "{}", package.resolved_name)?;
            }
        }

        Ok(CommandResult::success())
    }
}
