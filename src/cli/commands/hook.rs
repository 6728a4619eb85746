//! Hook command implementation.
//!
//! `staleguard hook` (or `staleguard` with no arguments) reads one event
//! from stdin and writes one decision to stdout. It always exits 0: config
//! problems, registry outages and unwritable streams are logged and the
//! command is approved.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::StaleguardConfig;
use crate::error::Result;
use crate::gate::{respond, Gate, HookDecision, InvocationEvent};
use crate::registry::{MetadataSource, RegistryClient};
use crate::ui::Streams;

use super::dispatcher::{load_effective_config, Command, CommandResult};

/// The hook command implementation.
pub struct HookCommand {
    config_override: Option<PathBuf>,
    source: Option<Arc<dyn MetadataSource>>,
}

impl HookCommand {
    /// Create a hook command that talks to the configured registry.
    pub fn new(config_override: Option<PathBuf>) -> Self {
        Self {
            config_override,
            source: None,
        }
    }

    /// Use a fixed metadata source instead of building an HTTP client.
    pub fn with_source(mut self, source: Arc<dyn MetadataSource>) -> Self {
        self.source = Some(source);
        self
    }

    fn config_for(&self, event: &InvocationEvent) -> StaleguardConfig {
        let project_root = if event.cwd.is_empty() {
            std::env::current_dir().ok()
        } else {
            Some(PathBuf::from(&event.cwd))
        };

        match load_effective_config(project_root.as_deref(), self.config_override.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default config: {}", e);
                StaleguardConfig::default()
            }
        }
    }

    fn build_gate(&self, event: &InvocationEvent) -> Option<Gate> {
        let config = self.config_for(event);

        let source: Arc<dyn MetadataSource> = match &self.source {
            Some(source) => Arc::clone(source),
            None => match RegistryClient::new(&config.registry_url, config.request_timeout()) {
                Ok(client) => {
                    tracing::debug!("Using registry {}", client.base_url());
                    Arc::new(client)
                }
                Err(e) => {
                    tracing::warn!("Registry client unavailable: {}", e);
                    return None;
                }
            },
        };

        Some(Gate::from_config(&config, source))
    }

    fn emit(&self, decision: &HookDecision, streams: &mut Streams<'_>) {
        if let Err(e) = writeln!(streams.stdout, "{}", decision.to_json()) {
            tracing::debug!("Could not write decision: {}", e);
        }
        if let Some(reason) = &decision.reason {
            if let Err(e) = writeln!(streams.stderr, "{}", reason) {
                tracing::debug!("Could not mirror advisory: {}", e);
            }
        }
    }
}

impl Command for HookCommand {
    fn execute(&self, streams: &mut Streams<'_>) -> Result<CommandResult> {
        let mut input = String::new();
        if let Err(e) = streams.stdin.read_to_string(&mut input) {
            tracing::debug!("Could not read hook input: {}", e);
            input.clear();
        }

        let decision = respond(&input, |event| self.build_gate(event));
        self.emit(&decision, streams);

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{MockRegistry, RegistryMetadata};
    use chrono::{Duration, Utc};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn run(cmd: &HookCommand, input: &str) -> (String, String) {
        let mut stdin = input.as_bytes();
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let mut streams = Streams::new(&mut stdin, &mut stdout, &mut stderr);
        let result = cmd.execute(&mut streams).unwrap();
        assert_eq!(result.exit_code, 0);
        (
            String::from_utf8(stdout).unwrap(),
            String::from_utf8(stderr).unwrap(),
        )
    }

    fn event_json(cwd: &Path, command: &str) -> String {
        serde_json::json!({
            "session_id": "test-session",
            "cwd": cwd,
            "tool_name": "Bash",
            "tool_input": { "command": command }
        })
        .to_string()
    }

    #[test]
    fn garbage_input_approves_silently() {
        let registry = Arc::new(MockRegistry::new());
        let cmd = HookCommand::new(None).with_source(registry.clone());

        let (stdout, stderr) = run(&cmd, "definitely not json");

        assert_eq!(stdout, "{\"decision\":\"approve\"}\n");
        assert!(stderr.is_empty());
        assert_eq!(registry.calls(), 0);
    }

    #[test]
    fn advisory_is_mirrored_to_stderr() {
        let project = TempDir::new().unwrap();
        let registry = Arc::new(MockRegistry::new().with_metadata(
            RegistryMetadata::new("left-pad").with_last_modified(Utc::now() - Duration::days(900)),
        ));
        let cmd = HookCommand::new(None).with_source(registry);

        let (stdout, stderr) = run(&cmd, &event_json(project.path(), "npm install left-pad"));

        let decision: HookDecision = serde_json::from_str(stdout.trim()).unwrap();
        let reason = decision.reason.unwrap();
        assert!(reason.contains("left-pad: possibly abandoned"));
        assert!(stderr.contains(&reason));
    }

    #[test]
    fn project_config_is_read_from_event_cwd() {
        let project = TempDir::new().unwrap();
        fs::create_dir_all(project.path().join(".staleguard")).unwrap();
        fs::write(
            project.path().join(".staleguard").join("config.yml"),
            "enabled: false\n",
        )
        .unwrap();
        let registry = Arc::new(MockRegistry::new());
        let cmd = HookCommand::new(None).with_source(registry.clone());

        let (stdout, _) = run(&cmd, &event_json(project.path(), "npm install left-pad"));

        assert_eq!(stdout.trim(), r#"{"decision":"approve"}"#);
        assert_eq!(registry.calls(), 0);
    }

    #[test]
    fn broken_config_falls_back_to_defaults() {
        let project = TempDir::new().unwrap();
        fs::create_dir_all(project.path().join(".staleguard")).unwrap();
        fs::write(
            project.path().join(".staleguard").join("config.yml"),
            "stale_days: [oops\n",
        )
        .unwrap();
        let registry = Arc::new(MockRegistry::new().with_metadata(
            RegistryMetadata::new("moment").with_last_modified(Utc::now() - Duration::days(400)),
        ));
        let cmd = HookCommand::new(None).with_source(registry.clone());

        let (stdout, _) = run(&cmd, &event_json(project.path(), "npm i moment"));

        assert!(stdout.contains("moment: stale"));
        assert_eq!(registry.calls(), 1);
    }

    #[test]
    fn invalid_registry_url_approves_silently() {
        let project = TempDir::new().unwrap();
        let explicit = project.path().join("bad.yml");
        fs::write(&explicit, "registry_url: \"::nope::\"\n").unwrap();
        let cmd = HookCommand::new(Some(explicit));

        let (stdout, stderr) = run(&cmd, &event_json(project.path(), "npm i left-pad"));

        assert_eq!(stdout.trim(), r#"{"decision":"approve"}"#);
        assert!(stderr.is_empty());
    }
}
