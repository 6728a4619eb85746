//! Configuration file discovery and loading.
//!
//! Layers are applied in priority order (later overrides earlier):
//! 1. User global config (`~/.staleguard/config.yml`)
//! 2. Project config (`<project>/.staleguard/config.yml`)
//! 3. Explicit `--config` file
//! 4. Environment variables

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::merger::merge_configs;
use crate::config::schema::StaleguardConfig;
use crate::error::{Result, StaleguardError};

/// Overrides `registry_url`.
pub const ENV_REGISTRY_URL: &str = "STALEGUARD_REGISTRY_URL";

/// Overrides `request_timeout_secs`.
pub const ENV_TIMEOUT_SECS: &str = "STALEGUARD_TIMEOUT_SECS";

const CONFIG_DIR: &str = ".staleguard";
const CONFIG_FILE: &str = "config.yml";

/// Paths to configuration files in merge order.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config: ~/.staleguard/config.yml
    pub user_global: Option<PathBuf>,

    /// Project config: <project>/.staleguard/config.yml
    pub project: Option<PathBuf>,

    /// File passed with `--config`.
    pub explicit: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files using the real home directory.
    pub fn discover(project_root: Option<&Path>, explicit: Option<&Path>) -> Self {
        Self::discover_with_home(dirs::home_dir().as_deref(), project_root, explicit)
    }

    /// Discover config files relative to a given home directory.
    ///
    /// The explicit path is kept even if it does not exist so that loading
    /// reports it.
    pub fn discover_with_home(
        home: Option<&Path>,
        project_root: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Self {
        Self {
            user_global: home.and_then(Self::existing_config_in),
            project: project_root.and_then(Self::existing_config_in),
            explicit: explicit.map(Path::to_path_buf),
        }
    }

    fn existing_config_in(dir: &Path) -> Option<PathBuf> {
        let path = dir.join(CONFIG_DIR).join(CONFIG_FILE);
        if path.is_file() {
            Some(path)
        } else {
            None
        }
    }

    /// All discovered paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.explicit]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Load a config file as a raw YAML value for merging.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path)?;

    serde_yaml::from_str(&content).map_err(|e| StaleguardError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge every discovered layer, then apply environment overrides.
///
/// # Errors
///
/// Returns `ConfigParseError` if any file is invalid YAML or has a value of
/// the wrong type, and `Io` if a discovered file cannot be read.
pub fn load_config<F>(paths: &ConfigPaths, env: F) -> Result<StaleguardConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut layers = Vec::new();
    for path in paths.all_existing() {
        tracing::debug!("Loading config layer: {}", path.display());
        layers.push(load_config_value(path)?);
    }

    let merged = merge_configs(&layers);
    let mut config: StaleguardConfig =
        serde_yaml::from_value(merged).map_err(|e| StaleguardError::ConfigParseError {
            path: paths
                .all_existing()
                .last()
                .map(|p| p.to_path_buf())
                .unwrap_or_default(),
            message: format!("Failed to parse merged config: {}", e),
        })?;

    apply_env_overrides(&mut config, env);
    Ok(config)
}

/// Apply environment variable overrides in place.
///
/// Values that do not parse are ignored with a warning.
pub fn apply_env_overrides<F>(config: &mut StaleguardConfig, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = env(ENV_REGISTRY_URL).filter(|v| !v.trim().is_empty()) {
        config.registry_url = url.trim().to_string();
    }

    if let Some(raw) = env(ENV_TIMEOUT_SECS) {
        match raw.trim().parse::<u64>() {
            Ok(secs) => config.request_timeout_secs = secs,
            Err(_) => tracing::warn!("Ignoring invalid {}={:?}", ENV_TIMEOUT_SECS, raw),
        }
    }
}
