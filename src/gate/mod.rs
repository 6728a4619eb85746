//! Hook decision gate.
//!
//! The gate ties the pipeline together for one hook invocation:
//! parse the command, look up each package, classify, compose an advisory,
//! and answer. The answer is always `approve`; an advisory only adds a
//! `reason`.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use staleguard::config::StaleguardConfig;
//! use staleguard::gate::{Decision, Gate, InvocationEvent};
//! use staleguard::registry::MockRegistry;
//!
//! let registry = Arc::new(MockRegistry::new());
//! let gate = Gate::from_config(&StaleguardConfig::default(), registry.clone());
//! let event = InvocationEvent::shell("ls -la");
//!
//! let answer = gate.evaluate(&event);
//! assert_eq!(answer.decision, Decision::Approve);
//! assert!(answer.reason.is_none());
//! assert_eq!(registry.calls(), 0);
//! ```

pub mod decision;
pub mod engine;
pub mod event;
pub mod hook;

pub use decision::{Decision, HookDecision};
pub use engine::{Gate, GateOutcome};
pub use event::{InvocationEvent, ToolInput};
pub use hook::respond;
