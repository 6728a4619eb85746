//! Check command implementation.
//!
//! `staleguard check <package>` looks up one package and prints the same
//! classification the hook would use. Unlike the hook, a failed lookup is
//! reported as an error.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;

use crate::cli::args::CheckArgs;
use crate::config::StaleguardConfig;
use crate::error::Result;
use crate::registry::{MetadataSource, RegistryClient, RegistryMetadata};
use crate::risk::{classify, AgeStatus, Classification};
use crate::ui::{StaleguardTheme, Streams};

use super::dispatcher::{Command, CommandResult};

const FIELD_WIDTH: usize = 13;

/// Machine-readable check output.
#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    package: &'a str,
    latest_version: Option<&'a str>,
    last_modified_at: Option<DateTime<Utc>>,
    days_since_update: Option<i64>,
    status: AgeStatus,
    deprecated: bool,
    deprecation_message: Option<&'a str>,
}

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
    config: StaleguardConfig,
    theme: StaleguardTheme,
    source: Option<Arc<dyn MetadataSource>>,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs, config: StaleguardConfig, theme: StaleguardTheme) -> Self {
        Self {
            args,
            config,
            theme,
            source: None,
        }
    }

    /// Use a fixed metadata source instead of building an HTTP client.
    pub fn with_source(mut self, source: Arc<dyn MetadataSource>) -> Self {
        self.source = Some(source);
        self
    }

    fn lookup(&self) -> Result<RegistryMetadata> {
        match &self.source {
            Some(source) => source.fetch_metadata(&self.args.package),
            None => RegistryClient::new(&self.config.registry_url, self.config.request_timeout())?
                .fetch_metadata(&self.args.package),
        }
    }

    fn status_text(&self, c: &Classification) -> String {
        let label = c.age.label();
        match c.age {
            AgeStatus::Active => self.theme.success.apply_to(label).to_string(),
            AgeStatus::Stale => self.theme.warning.apply_to(label).to_string(),
            AgeStatus::Abandoned => self.theme.error.apply_to(label).to_string(),
        }
    }

    fn write_human(
        &self,
        out: &mut dyn Write,
        meta: &RegistryMetadata,
        c: &Classification,
    ) -> Result<()> {
        let theme = &self.theme;

        writeln!(out, "\n  {}\n", theme.highlight.apply_to(&meta.package_name))?;

        if let Some(version) = &meta.latest_version {
            writeln!(out, "{}", theme.format_field("Latest", version, FIELD_WIDTH))?;
        }

        let updated = match (meta.last_modified_at, c.days_since_update) {
            (Some(at), Some(days)) => format!(
                "{} {}",
                at.format("%Y-%m-%d"),
                theme.dim.apply_to(format!("({} days ago)", days))
            ),
            _ => theme.dim.apply_to("unknown").to_string(),
        };
        writeln!(out, "{}", theme.format_field("Last updated", &updated, FIELD_WIDTH))?;
        writeln!(
            out,
            "{}",
            theme.format_field("Status", &self.status_text(c), FIELD_WIDTH)
        )?;

        if c.deprecated {
            let notice = c.deprecation_message.as_deref().unwrap_or("yes");
            let value = theme.error.apply_to(notice).to_string();
            writeln!(out, "{}", theme.format_field("Deprecated", &value, FIELD_WIDTH))?;
        }

        writeln!(out)?;
        Ok(())
    }
}

impl Command for CheckCommand {
    fn execute(&self, streams: &mut Streams<'_>) -> Result<CommandResult> {
        let meta = match self.lookup() {
            Ok(meta) => meta,
            Err(e) => {
                writeln!(streams.stderr, "{}", self.theme.format_error(&e.to_string()))?;
                return Ok(CommandResult::failure(1));
            }
        };

        let c = classify(&meta, Utc::now(), &self.config.thresholds());

        if self.args.json {
            let report = CheckReport {
                package: &meta.package_name,
                latest_version: meta.latest_version.as_deref(),
                last_modified_at: meta.last_modified_at,
                days_since_update: c.days_since_update,
                status: c.age,
                deprecated: c.deprecated,
                deprecation_message: c.deprecation_message.as_deref(),
            };
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            writeln!(streams.stdout, "{}", json)?;
        } else {
            self.write_human(streams.stdout, &meta, &c)?;
        }

        Ok(CommandResult::success())
    }
}
