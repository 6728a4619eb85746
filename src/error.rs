//! Error types for staleguard operations.
//!
//! This module defines [`StaleguardError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Nothing on the hook path is fatal: every variant is recovered into an
//!   `approve` decision by the gate
//! - Registry variants are per-package and only exclude that package
//! - Use `anyhow::Error` (via `StaleguardError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for staleguard operations.
#[derive(Debug, Error)]
pub enum StaleguardError {
    /// Hook input on stdin could not be read or parsed.
    #[error("Malformed hook input: {message}")]
    InputMalformed { message: String },

    /// Registry request failed, timed out, or returned a non-2xx status.
    #[error("Registry unavailable for '{package}': {message}")]
    RegistryUnavailable { package: String, message: String },

    /// Registry response body could not be interpreted.
    #[error("Incomplete metadata for '{package}': {message}")]
    MetadataIncomplete { package: String, message: String },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for staleguard operations.
pub type Result<T> = std::result::Result<T, StaleguardError>;
