//! Publish-age risk classification.
//!
//! Maps [`RegistryMetadata`](crate::registry::RegistryMetadata) to an age
//! bucket plus an independent deprecation flag.

pub mod classifier;

pub use classifier::{classify, days_since, AgeStatus, Classification, RiskThresholds};
