//! Registry document parsing.
//!
//! Only three parts of an npm packument matter here: the `dist-tags.latest`
//! pointer, the `deprecated` marker on that version, and `time.modified`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::error::{Result, StaleguardError};

/// Publication metadata for one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryMetadata {
    /// Registry name of the package.
    pub package_name: String,
    /// Version the `latest` dist-tag points to.
    pub latest_version: Option<String>,
    /// Most recent publish across all versions (`time.modified`).
    pub last_modified_at: Option<DateTime<Utc>>,
    /// Whether the latest version is marked deprecated.
    pub deprecated: bool,
    /// Deprecation notice from the registry, if one was given.
    pub deprecation_message: Option<String>,
}

impl RegistryMetadata {
    /// Create metadata with no timestamp and no deprecation.
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            latest_version: None,
            last_modified_at: None,
            deprecated: false,
            deprecation_message: None,
        }
    }

    /// Set the last modification time.
    pub fn with_last_modified(mut self, at: DateTime<Utc>) -> Self {
        self.last_modified_at = Some(at);
        self
    }

    /// Mark as deprecated, optionally with the registry's notice.
    pub fn with_deprecation(mut self, message: Option<&str>) -> Self {
        self.deprecated = true;
        self.deprecation_message = message.map(String::from);
        self
    }

    /// Set the version the `latest` tag points to.
    pub fn with_latest_version(mut self, version: impl Into<String>) -> Self {
        self.latest_version = Some(version.into());
        self
    }
}

#[derive(Debug, Deserialize)]
struct Packument {
    #[serde(rename = "dist-tags", default)]
    dist_tags: Option<HashMap<String, Value>>,
    #[serde(default)]
    versions: Option<HashMap<String, Value>>,
    #[serde(default)]
    time: Option<HashMap<String, Value>>,
}

/// Interpret a registry response body.
///
/// A body that is not a JSON object is an error. Missing `dist-tags`,
/// version entries or `time.modified` are not: they leave the corresponding
/// fields unset.
pub fn parse_metadata(package: &str, body: &str) -> Result<RegistryMetadata> {
    let incomplete = |message: String| StaleguardError::MetadataIncomplete {
        package: package.to_string(),
        message,
    };

    let value: Value = serde_json::from_str(body).map_err(|e| incomplete(e.to_string()))?;
    if !value.is_object() {
        return Err(incomplete("registry document is not a JSON object".to_string()));
    }
    let doc: Packument = serde_json::from_value(value).map_err(|e| incomplete(e.to_string()))?;

    let mut meta = RegistryMetadata::new(package);

    meta.latest_version = doc
        .dist_tags
        .as_ref()
        .and_then(|tags| tags.get("latest"))
        .and_then(Value::as_str)
        .map(String::from);

    if let Some(latest) = &meta.latest_version {
        let marker = doc
            .versions
            .as_ref()
            .and_then(|versions| versions.get(latest))
            .and_then(|entry| entry.get("deprecated"));
        match marker {
            Some(Value::String(message)) if !message.is_empty() => {
                meta.deprecated = true;
                meta.deprecation_message = Some(message.clone());
            }
            Some(Value::Bool(true)) => meta.deprecated = true,
            _ => {}
        }
    }

    meta.last_modified_at = doc
        .time
        .as_ref()
        .and_then(|time| time.get("modified"))
        .and_then(Value::as_str)
        .and_then(|raw| match DateTime::parse_from_rfc3339(raw) {
            Ok(at) => Some(at.with_timezone(&Utc)),
            Err(e) => {
                tracing::debug!("Ignoring unparsable time.modified for {}: {}", package, e);
                None
            }
        });

    Ok(meta)
}
