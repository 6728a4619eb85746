//! Raw hook input to decision.

use super::decision::HookDecision;
use super::engine::Gate;
use super::event::InvocationEvent;

/// Answer one raw hook payload.
///
/// `build_gate` is only called once the payload parses; returning `None`
/// (for example when the registry client cannot be constructed) approves
/// silently. Every path yields an approval.
pub fn respond<F>(input: &str, build_gate: F) -> HookDecision
where
    F: FnOnce(&InvocationEvent) -> Option<Gate>,
{
    let event = match InvocationEvent::parse(input) {
        Ok(event) => event,
        Err(e) => {
            tracing::debug!("Approving unparsable input: {}", e);
            return HookDecision::approve();
        }
    };

    match build_gate(&event) {
        Some(gate) => gate.evaluate(&event),
        None => HookDecision::approve(),
    }
}
