//! Hook output.

use serde::{Deserialize, Serialize};

/// The only decision this gate ever makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approve,
}

/// JSON object written to stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookDecision {
    pub decision: Decision,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl HookDecision {
    /// Approve with no advisory.
    pub fn approve() -> Self {
        Self {
            decision: Decision::Approve,
            reason: None,
        }
    }

    /// Approve and attach an advisory.
    pub fn approve_with_reason(reason: impl Into<String>) -> Self {
        Self {
            decision: Decision::Approve,
            reason: Some(reason.into()),
        }
    }

    /// Serialize for the decision stream.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| r#"{"decision":"approve"}"#.to_string())
    }
}

impl Default for HookDecision {
    fn default() -> Self {
        Self::approve()
    }
}
