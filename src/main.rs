//! Staleguard CLI entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use staleguard::cli::{Cli, CommandDispatcher};
use staleguard::ui::Streams;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout carries the hook decision.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("staleguard=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("staleguard=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Staleguard starting with args: {:?}", cli);

    // Unlocked handles: registry workers log to stderr while main waits.
    let mut stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    let mut streams = Streams::new(&mut stdin, &mut stdout, &mut stderr);

    let dispatcher = CommandDispatcher::new(cli.config.clone());

    match dispatcher.dispatch(&cli, &mut streams) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            let _ = writeln!(streams.stderr, "Error: {}", e);
            ExitCode::from(1)
        }
    }
}
