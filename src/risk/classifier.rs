//! Age and deprecation classifier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::registry::RegistryMetadata;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Day thresholds separating the age buckets.
///
/// A package is stale once it is more than `stale_days` old and abandoned
/// once it is more than `abandoned_days` old. Both bounds are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub stale_days: i64,
    pub abandoned_days: i64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            stale_days: 365,
            abandoned_days: 730,
        }
    }
}

/// Age bucket of a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeStatus {
    Active,
    Stale,
    Abandoned,
}

impl AgeStatus {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            AgeStatus::Active => "active",
            AgeStatus::Stale => "stale",
            AgeStatus::Abandoned => "possibly abandoned",
        }
    }
}

impl fmt::Display for AgeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Risk assessment for one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Package the assessment is for.
    pub package_name: String,
    /// Age bucket.
    pub age: AgeStatus,
    /// Whole days since the last publish, when known.
    pub days_since_update: Option<i64>,
    /// Whether the latest version is deprecated.
    pub deprecated: bool,
    /// Registry deprecation notice.
    pub deprecation_message: Option<String>,
}

impl Classification {
    /// Whether this package should appear in an advisory.
    pub fn needs_warning(&self) -> bool {
        self.deprecated || self.age != AgeStatus::Active
    }
}

/// Whole days between `at` and `now`, rounded down.
pub fn days_since(at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - at).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// Classify a package by publish age and deprecation.
///
/// A missing modification time classifies as active with no day count; a
/// deprecation marker is reported regardless of age.
pub fn classify(
    meta: &RegistryMetadata,
    now: DateTime<Utc>,
    thresholds: &RiskThresholds,
) -> Classification {
    let days_since_update = meta.last_modified_at.map(|at| days_since(at, now));

    let age = match days_since_update {
        Some(days) if days > thresholds.abandoned_days => AgeStatus::Abandoned,
        Some(days) if days > thresholds.stale_days => AgeStatus::Stale,
        _ => AgeStatus::Active,
    };

    Classification {
        package_name: meta.package_name.clone(),
        age,
        days_since_update,
        deprecated: meta.deprecated,
        deprecation_message: meta.deprecation_message.clone(),
    }
}
