//! Package registry lookups.
//!
//! This module provides:
//! - [`MetadataSource`] capability consumed by the gate
//! - [`RegistryClient`] for npm-compatible registries over HTTP
//! - [`fetch_all`] for bounded concurrent lookups of many packages
//! - [`MockRegistry`] for deterministic tests without network access

pub mod client;
pub mod fanout;
pub mod metadata;
pub mod mock;
pub mod source;

pub use client::{RegistryClient, DEFAULT_REGISTRY_URL, DEFAULT_REQUEST_TIMEOUT};
pub use fanout::{fetch_all, FanoutLimits};
pub use metadata::{parse_metadata, RegistryMetadata};
pub use mock::{MockRegistry, MockReply};
pub use source::{FetchOutcome, MetadataSource};
