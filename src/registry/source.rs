//! The metadata lookup capability.

use crate::error::Result;

use super::metadata::RegistryMetadata;

/// Anything that can look up publication metadata for a package.
///
/// Implementations must be shareable across worker threads. Every failure
/// is returned as an error for that package alone.
pub trait MetadataSource: Send + Sync {
    /// Fetch metadata for a single package name.
    fn fetch_metadata(&self, package: &str) -> Result<RegistryMetadata>;
}

/// Result of one package lookup after failure has been absorbed.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Metadata was retrieved.
    Known(RegistryMetadata),
    /// Lookup failed or timed out; the package is not classified.
    Unknown { package: String, reason: String },
}

impl FetchOutcome {
    /// Metadata if the lookup succeeded.
    pub fn metadata(&self) -> Option<&RegistryMetadata> {
        match self {
            FetchOutcome::Known(meta) => Some(meta),
            FetchOutcome::Unknown { .. } => None,
        }
    }

    /// Whether the lookup failed.
    pub fn is_unknown(&self) -> bool {
        matches!(self, FetchOutcome::Unknown { .. })
    }
}
