//! Bounded concurrent lookups.
//!
//! A fixed number of worker threads pull package indices from a shared
//! counter and report back over a channel. The caller waits for all results
//! or until one aggregate deadline passes, whichever comes first. Each result
//! lands in the slot of its input index, so output order matches input order
//! regardless of completion order.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use super::source::{FetchOutcome, MetadataSource};

/// Concurrency and latency limits for a batch of lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FanoutLimits {
    /// Maximum lookups in flight at once.
    pub max_in_flight: usize,
    /// Deadline for the whole batch.
    pub aggregate_timeout: Duration,
}

impl Default for FanoutLimits {
    fn default() -> Self {
        Self {
            max_in_flight: 8,
            aggregate_timeout: Duration::from_secs(8),
        }
    }
}

/// Look up every package, at most `max_in_flight` at a time.
///
/// Never fails: lookup errors and lookups still running at the deadline
/// become [`FetchOutcome::Unknown`].
pub fn fetch_all(
    source: Arc<dyn MetadataSource>,
    packages: &[String],
    limits: FanoutLimits,
) -> Vec<FetchOutcome> {
    let total = packages.len();
    if total == 0 {
        return Vec::new();
    }

    let names = Arc::new(packages.to_vec());
    let next = Arc::new(AtomicUsize::new(0));
    let (tx, rx) = mpsc::channel::<(usize, FetchOutcome)>();
    let workers = limits.max_in_flight.clamp(1, total);

    for worker in 0..workers {
        let source = Arc::clone(&source);
        let names = Arc::clone(&names);
        let next = Arc::clone(&next);
        let tx = tx.clone();

        let spawned = thread::Builder::new()
            .name(format!("registry-fetch-{worker}"))
            .spawn(move || loop {
                let index = next.fetch_add(1, Ordering::Relaxed);
                let Some(name) = names.get(index) else {
                    break;
                };
                let outcome = match source.fetch_metadata(name) {
                    Ok(meta) => FetchOutcome::Known(meta),
                    Err(e) => {
                        tracing::debug!("Lookup failed for {}: {}", name, e);
                        FetchOutcome::Unknown {
                            package: name.clone(),
                            reason: e.to_string(),
                        }
                    }
                };
                // Receiver gone means the deadline passed.
                if tx.send((index, outcome)).is_err() {
                    break;
                }
            });

        if let Err(e) = spawned {
            tracing::warn!("Could not start registry worker: {}", e);
        }
    }
    drop(tx);

    let deadline = Instant::now() + limits.aggregate_timeout;
    let mut slots: Vec<Option<FetchOutcome>> = vec![None; total];
    let mut received = 0;

    while received < total {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok((index, outcome)) => {
                slots[index] = Some(outcome);
                received += 1;
            }
            Err(RecvTimeoutError::Timeout) => {
                tracing::debug!(
                    "Registry deadline reached with {} of {} lookups done",
                    received,
                    total
                );
                break;
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    slots
        .into_iter()
        .zip(packages)
        .map(|(slot, name)| {
            slot.unwrap_or_else(|| FetchOutcome::Unknown {
                package: name.clone(),
                reason: "lookup did not finish before the deadline".to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{MockRegistry, RegistryMetadata};

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_input_makes_no_calls() {
        let registry = Arc::new(MockRegistry::new());
        let out = fetch_all(registry.clone(), &[], FanoutLimits::default());
        assert!(out.is_empty());
        assert_eq!(registry.calls(), 0);
    }

    #[test]
    fn results_follow_input_order() {
        let registry = Arc::new(
            MockRegistry::new()
                .with_metadata(RegistryMetadata::new("a"))
                .with_metadata(RegistryMetadata::new("b"))
                .with_metadata(RegistryMetadata::new("c"))
                .with_delay("a", Duration::from_millis(120)),
        );

        let out = fetch_all(registry, &names(&["a", "b", "c"]), FanoutLimits::default());

        let order: Vec<_> = out
            .iter()
            .map(|o| o.metadata().unwrap().package_name.as_str())
            .collect();
        assert_eq!(order, ["a", "b", "c"]);
    }

    #[test]
    fn one_failure_does_not_affect_others() {
        let registry = Arc::new(
            MockRegistry::new()
                .with_metadata(RegistryMetadata::new("good"))
                .with_failure("bad", "HTTP 503"),
        );

        let out = fetch_all(registry, &names(&["bad", "good"]), FanoutLimits::default());

        assert!(out[0].is_unknown());
        assert!(out[1].metadata().is_some());
    }

    #[test]
    fn slow_lookup_is_unknown_after_deadline() {
        let registry = Arc::new(
            MockRegistry::new()
                .with_metadata(RegistryMetadata::new("fast"))
                .with_metadata(RegistryMetadata::new("slow"))
                .with_delay("slow", Duration::from_secs(2)),
        );
        let limits = FanoutLimits {
            max_in_flight: 4,
            aggregate_timeout: Duration::from_millis(300),
        };

        let started = Instant::now();
        let out = fetch_all(registry, &names(&["fast", "slow"]), limits);

        assert!(started.elapsed() < Duration::from_secs(1));
        assert!(out[0].metadata().is_some());
        match &out[1] {
            FetchOutcome::Unknown { package, .. } => assert_eq!(package, "slow"),
            other => panic!("expected unknown, got {other:?}"),
        }
    }

    #[test]
    fn in_flight_count_is_bounded() {
        let mut registry = MockRegistry::new();
        let list: Vec<String> = (0..12).map(|i| format!("pkg-{i}")).collect();
        for name in &list {
            registry = registry
                .with_metadata(RegistryMetadata::new(name.as_str()))
                .with_delay(name, Duration::from_millis(40));
        }
        let registry = Arc::new(registry);
        let limits = FanoutLimits {
            max_in_flight: 3,
            aggregate_timeout: Duration::from_secs(5),
        };

        let out = fetch_all(registry.clone(), &list, limits);

        assert_eq!(out.len(), 12);
        assert!(out.iter().all(|o| o.metadata().is_some()));
        assert_eq!(registry.calls(), 12);
        assert!(registry.peak_in_flight() <= 3);
    }

    #[test]
    fn zero_max_in_flight_still_runs_one_worker() {
        let registry = Arc::new(MockRegistry::new().with_metadata(RegistryMetadata::new("x")));
        let limits = FanoutLimits {
            max_in_flight: 0,
            aggregate_timeout: Duration::from_secs(1),
        };
        let out = fetch_all(registry, &names(&["x"]), limits);
        assert!(out[0].metadata().is_some());
    }
}
