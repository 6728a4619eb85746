//! Staleguard - dependency freshness advisories for agent shell commands.
//!
//! Staleguard runs as a pre-execution hook. It inspects a shell command an
//! agent is about to run, picks out the packages a JavaScript package
//! manager would install, asks the registry when each was last updated,
//! and attaches a warning to the decision when any look stale, abandoned
//! or deprecated. The command is always approved.
//!
//! # Modules
//!
//! - [`advisory`] - Warning text composed from classifications
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and merging
//! - [`error`] - Error types and result aliases
//! - [`gate`] - Hook input, decisions, and the evaluation pipeline
//! - [`parser`] - Install command recognition and package extraction
//! - [`registry`] - Registry metadata lookups and concurrent fan-out
//! - [`risk`] - Age and deprecation classification
//! - [`ui`] - Streams and terminal styling
//!
//! # Example
//!
//! ```
//! use staleguard::parser::package_names;
//!
//! let names = package_names("pnpm add -D left-pad@1.3.0 @types/node@^20");
//! assert_eq!(names, vec!["left-pad", "@types/node"]);
//! ```

pub mod advisory;
pub mod cli;
pub mod config;
pub mod error;
pub mod gate;
pub mod parser;
pub mod registry;
pub mod risk;
pub mod ui;

pub use error::{Result, StaleguardError};
