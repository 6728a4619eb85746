//! Gate orchestration.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::advisory::compose;
use crate::config::StaleguardConfig;
use crate::parser::package_names;
use crate::registry::{fetch_all, FanoutLimits, MetadataSource};
use crate::risk::{classify, Classification, RiskThresholds};

use super::decision::HookDecision;
use super::event::InvocationEvent;

/// Which path an evaluation took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Inspection switched off in config.
    Disabled,
    /// Tool does not run shell commands.
    NotShellTool,
    /// Not an install command, or nothing installable on it.
    NoPackages,
    /// Packages were looked up.
    Checked {
        packages: usize,
        unknown: usize,
        flagged: usize,
    },
}

/// Evaluates install commands against registry metadata.
pub struct Gate {
    source: Arc<dyn MetadataSource>,
    thresholds: RiskThresholds,
    limits: FanoutLimits,
    shell_tools: Vec<String>,
    enabled: bool,
}

impl Gate {
    /// Build a gate from configuration and a metadata source.
    pub fn from_config(config: &StaleguardConfig, source: Arc<dyn MetadataSource>) -> Self {
        Self {
            source,
            thresholds: config.thresholds(),
            limits: config.fanout_limits(),
            shell_tools: config.shell_tools.clone(),
            enabled: config.enabled,
        }
    }

    /// Decide on an event using the current time.
    pub fn evaluate(&self, event: &InvocationEvent) -> HookDecision {
        self.evaluate_at(event, Utc::now()).0
    }

    /// Decide on an event as of `now`, also reporting the path taken.
    pub fn evaluate_at(
        &self,
        event: &InvocationEvent,
        now: DateTime<Utc>,
    ) -> (HookDecision, GateOutcome) {
        if !self.enabled {
            return (HookDecision::approve(), GateOutcome::Disabled);
        }
        if !self.is_shell_tool(&event.tool_name) {
            return (HookDecision::approve(), GateOutcome::NotShellTool);
        }

        let packages = package_names(event.command());
        if packages.is_empty() {
            return (HookDecision::approve(), GateOutcome::NoPackages);
        }

        tracing::debug!(
            session = %event.session_id,
            "Checking {} package(s): {}",
            packages.len(),
            packages.join(", ")
        );

        let (findings, unknown) = self.assess(&packages, now);
        let flagged = findings.iter().filter(|c| c.needs_warning()).count();
        let outcome = GateOutcome::Checked {
            packages: packages.len(),
            unknown,
            flagged,
        };

        match compose(&findings) {
            Some(reason) => (HookDecision::approve_with_reason(reason), outcome),
            None => (HookDecision::approve(), outcome),
        }
    }

    /// Whether `tool_name` runs shell commands. Matching is exact.
    pub fn is_shell_tool(&self, tool_name: &str) -> bool {
        self.shell_tools.iter().any(|t| t == tool_name)
    }

    /// Look up and classify packages.
    ///
    /// Returns classifications for the packages whose lookup succeeded, in
    /// input order, and the number of lookups that failed.
    pub fn assess(
        &self,
        packages: &[String],
        now: DateTime<Utc>,
    ) -> (Vec<Classification>, usize) {
        let outcomes = fetch_all(Arc::clone(&self.source), packages, self.limits);
        let unknown = outcomes.iter().filter(|o| o.is_unknown()).count();
        let findings = outcomes
            .iter()
            .filter_map(|o| o.metadata())
            .map(|meta| classify(meta, now, &self.thresholds))
            .collect();
        (findings, unknown)
    }
}
