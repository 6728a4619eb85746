//! Package reference extraction.

use regex::Regex;
use std::sync::LazyLock;

use super::grammar::match_install;

/// Matches a version constraint: `@` followed by a digit or `^ ~ > < =`.
///
/// A scope prefix (`@scope/`) is followed by a letter and never matches, so
/// only the trailing `@version` of `@scope/pkg@1.0.0` is stripped. Dist-tags
/// such as `@latest` or `@next` are left in place.
static VERSION_CONSTRAINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@[0-9^~><=].*$").expect("version constraint pattern is valid")
});

/// A package named on an install command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReference {
    /// Token as it appeared in the command.
    pub raw_token: String,
    /// Registry name with any version constraint removed.
    pub resolved_name: String,
}

/// Remove a trailing version constraint from a package token.
///
/// ```
/// use staleguard::parser::strip_version;
///
/// assert_eq!(strip_version("react@^18.2.0"), "react");
/// assert_eq!(strip_version("@types/node@20"), "@types/node");
/// assert_eq!(strip_version("@types/node"), "@types/node");
/// ```
pub fn strip_version(token: &str) -> &str {
    match VERSION_CONSTRAINT.find(token) {
        Some(m) => &token[..m.start()],
        None => token,
    }
}

/// Extract the registry packages an install command would add.
///
/// Returns an empty list for anything that is not an install command. Flags,
/// local paths (tokens starting with `.`) and tokens that are empty once
/// their version is stripped are skipped. Order is preserved and duplicates
/// are kept.
pub fn extract_packages(command: &str) -> Vec<PackageReference> {
    let Some(install) = match_install(command) else {
        return Vec::new();
    };

    install
        .args
        .into_iter()
        .filter(|token| !token.starts_with('-'))
        .filter_map(|token| {
            let name = strip_version(token);
            if name.is_empty() || name.starts_with('.') {
                return None;
            }
            Some(PackageReference {
                raw_token: token.to_string(),
                resolved_name: name.to_string(),
            })
        })
        .collect()
}

/// Convenience wrapper returning only the resolved names.
pub fn package_names(command: &str) -> Vec<String> {
    extract_packages(command)
        .into_iter()
        .map(|p| p.resolved_name)
        .collect()
}
