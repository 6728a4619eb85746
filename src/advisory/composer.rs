//! Turns classifications into one operator-facing message.

use crate::risk::{AgeStatus, Classification};

/// First line of every advisory.
pub const ADVISORY_HEADER: &str = "Dependency freshness warning:";

/// Closing suggestion appended after the findings.
pub const ADVISORY_FOOTER: &str =
    "Consider using actively maintained alternatives for the packages above.";

/// Render the warning line for one package, or `None` if it is fine.
///
/// ```
/// use staleguard::advisory::finding_line;
/// use staleguard::risk::{AgeStatus, Classification};
///
/// let c = Classification {
///     package_name: "left-pad".into(),
///     age: AgeStatus::Abandoned,
///     days_since_update: Some(900),
///     deprecated: false,
///     deprecation_message: None,
/// };
/// assert_eq!(
///     finding_line(&c).as_deref(),
///     Some("  - left-pad: possibly abandoned (last updated 900 days ago)")
/// );
/// ```
pub fn finding_line(c: &Classification) -> Option<String> {
    let mut phrases = Vec::new();

    if let (AgeStatus::Abandoned | AgeStatus::Stale, Some(days)) = (c.age, c.days_since_update) {
        phrases.push(format!("{} (last updated {} days ago)", c.age.label(), days));
    }

    if c.deprecated {
        match &c.deprecation_message {
            Some(message) => phrases.push(format!("DEPRECATED: {}", message)),
            None => phrases.push("DEPRECATED".to_string()),
        }
    }

    if phrases.is_empty() {
        return None;
    }
    Some(format!("  - {}: {}", c.package_name, phrases.join("; ")))
}

/// Build the advisory for a set of classifications.
///
/// Entries keep the order of `findings`. Returns `None` when no package
/// warrants a warning.
pub fn compose(findings: &[Classification]) -> Option<String> {
    let lines: Vec<String> = findings.iter().filter_map(finding_line).collect();
    if lines.is_empty() {
        return None;
    }

    let mut message = String::from(ADVISORY_HEADER);
    for line in &lines {
        message.push('\n');
        message.push_str(line);
    }
    message.push('\n');
    message.push_str(ADVISORY_FOOTER);
    Some(message)
}
