//! Configuration loading and layering.
//!
//! # Modules
//!
//! - [`schema`] - Typed configuration with defaults
//! - [`loader`] - File discovery and environment overrides
//! - [`merger`] - Layer merge semantics
//!
//! # Example
//!
//! ```
//! use staleguard::config::StaleguardConfig;
//!
//! let config = StaleguardConfig::default();
//! assert_eq!(config.thresholds().stale_days, 365);
//! assert_eq!(config.shell_tools, ["Bash"]);
//! ```

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{
    apply_env_overrides, load_config, load_config_value, ConfigPaths, ENV_REGISTRY_URL,
    ENV_TIMEOUT_SECS,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::StaleguardConfig;
