//! Hook input event.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StaleguardError};

/// Tool arguments supplied by the host. Only `command` is read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInput {
    #[serde(default)]
    pub command: String,
}

/// One pre-execution event from the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationEvent {
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub cwd: String,
    #[serde(default)]
    pub tool_name: String,
    #[serde(default)]
    pub tool_input: ToolInput,
}

impl InvocationEvent {
    /// Parse the JSON object read from stdin.
    pub fn parse(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Err(StaleguardError::InputMalformed {
                message: "empty input".to_string(),
            });
        }
        serde_json::from_str(input).map_err(|e| StaleguardError::InputMalformed {
            message: e.to_string(),
        })
    }

    /// A `Bash` event for the given command.
    pub fn shell(command: impl Into<String>) -> Self {
        Self {
            tool_name: "Bash".to_string(),
            tool_input: ToolInput {
                command: command.into(),
            },
            ..Self::default()
        }
    }

    /// The shell command, empty for non-shell tools.
    pub fn command(&self) -> &str {
        &self.tool_input.command
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_event() {
        let event = InvocationEvent::parse(
            r#"{
                "session_id": "abc123",
                "cwd": "/home/dev/app",
                "tool_name": "Bash",
                "tool_input": { "command": "npm install left-pad", "description": "add dep" }
            }"#,
        )
        .unwrap();
        assert_eq!(event.session_id, "abc123");
        assert_eq!(event.cwd, "/home/dev/app");
        assert_eq!(event.tool_name, "Bash");
        assert_eq!(event.command(), "npm install left-pad");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let event = InvocationEvent::parse(r#"{ "tool_name": "Write" }"#).unwrap();
        assert_eq!(event.command(), "");
        assert!(event.session_id.is_empty());
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            InvocationEvent::parse("  \n"),
            Err(StaleguardError::InputMalformed { .. })
        ));
    }

    #[test]
    fn rejects_garbage() {
        assert!(InvocationEvent::parse("npm install left-pad").is_err());
        assert!(InvocationEvent::parse(r#"{"tool_input": {"command": 42}}"#).is_err());
    }

    #[test]
    fn shell_constructor() {
        let event = InvocationEvent::shell("bun add zod");
        assert_eq!(event.tool_name, "Bash");
        assert_eq!(event.command(), "bun add zod");
    }
}
