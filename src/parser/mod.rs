//! Install command recognition and package extraction.
//!
//! This module turns a raw shell command into the list of registry packages
//! it would install:
//! - [`grammar`] - Declarative table of package managers and install verbs
//! - [`extract`] - Token filtering and version constraint stripping
//!
//! # Example
//!
//! ```
//! use staleguard::parser::extract_packages;
//!
//! let packages = extract_packages("bun add @scope/pkg@^1.2.3 lodash");
//! let names: Vec<_> = packages.iter().map(|p| p.resolved_name.as_str()).collect();
//! assert_eq!(names, ["@scope/pkg", "lodash"]);
//! ```

pub mod extract;
pub mod grammar;

pub use extract::{extract_packages, package_names, strip_version, PackageReference};
pub use grammar::{match_install, InstallCommand, ManagerGrammar, PackageManager, INSTALL_GRAMMAR};
