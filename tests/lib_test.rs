//! Library integration tests.

use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use staleguard::gate::{Gate, GateOutcome, InvocationEvent};
use staleguard::registry::{fetch_all, FanoutLimits, MockRegistry, RegistryMetadata};
use staleguard::risk::{classify, AgeStatus, RiskThresholds};
use staleguard::StaleguardError;

#[test]
fn error_types_are_public() {
    let err = StaleguardError::RegistryUnavailable {
        package: "left-pad".into(),
        message: "HTTP 503".into(),
    };
    assert!(err.to_string().contains("left-pad"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> staleguard::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use staleguard::cli::{Cli, Commands};

    let cli = Cli::parse_from(["staleguard", "check", "left-pad", "--json"]);
    if let Some(Commands::Check(args)) = cli.command {
        assert_eq!(args.package, "left-pad");
        assert!(args.json);
    } else {
        panic!("Expected Check command");
    }
}

#[test]
fn parser_and_classifier_compose() {
    let names = staleguard::parser::package_names("npm install old-pkg@1.0.0");
    assert_eq!(names, vec!["old-pkg"]);

    let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let meta = RegistryMetadata::new(&names[0])
        .with_last_modified(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());
    let c = classify(&meta, now, &RiskThresholds::default());
    assert_eq!(c.age, AgeStatus::Abandoned);
    assert!(c.needs_warning());
}

#[test]
fn fanout_preserves_input_order() {
    let registry = MockRegistry::new()
        .with_metadata(RegistryMetadata::new("a"))
        .with_metadata(RegistryMetadata::new("b"))
        .with_delay("a", Duration::from_millis(50));
    let packages = vec!["a".to_string(), "b".to_string(), "missing".to_string()];

    let outcomes = fetch_all(Arc::new(registry), &packages, FanoutLimits::default());

    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0].metadata().unwrap().package_name, "a");
    assert_eq!(outcomes[1].metadata().unwrap().package_name, "b");
    assert!(outcomes[2].is_unknown());
}

#[test]
fn gate_is_usable_from_outside_the_crate() {
    let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let registry = Arc::new(MockRegistry::new().with_metadata(
        RegistryMetadata::new("left-pad")
            .with_last_modified(Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap()),
    ));
    let gate = Gate::from_config(&Default::default(), registry.clone());

    let (decision, outcome) = gate.evaluate_at(&InvocationEvent::shell("yarn add left-pad"), now);

    assert!(decision.reason.is_none());
    assert!(matches!(outcome, GateOutcome::Checked { packages: 1, .. }));
    assert_eq!(registry.calls(), 1);
}
