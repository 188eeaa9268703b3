//! Tests for ordered evaluation and the first-failure policy.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use formwork::engine::evaluate;
use formwork::field::FieldValue;
use formwork::rules::{ValidatorRegistry, parse_rules};
use formwork::verdict::Verdict;

/// Registry with a counting pass-through rule named `probe`.
fn registry_with_probe() -> (ValidatorRegistry, Arc<AtomicUsize>) {
    let counter = Arc::new(AtomicUsize::new(0));
    let probe = Arc::clone(&counter);
    let mut registry = ValidatorRegistry::with_builtins();
    registry.insert("probe", move |_| {
        probe.fetch_add(1, Ordering::SeqCst);
        true
    });
    (registry, counter)
}

#[test]
fn test_first_failure_short_circuits_later_rules() {
    let (registry, counter) = registry_with_probe();
    let rules = parse_rules("required,probe");
    let empty = FieldValue::Text(String::new());

    let verdict = evaluate(&registry, &rules, &empty, &());

    assert_eq!(
        verdict,
        Verdict::Invalid {
            rule: "required".to_string(),
            parameter: None,
        }
    );
    // The rule after the failing one was never evaluated.
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[test]
fn test_rules_after_a_passing_one_are_evaluated() {
    let (registry, counter) = registry_with_probe();
    let rules = parse_rules("required,probe");
    let value = FieldValue::Text("hello".to_string());

    let verdict = evaluate(&registry, &rules, &value, &());

    assert!(verdict.is_valid());
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[test]
fn test_first_failing_rule_names_itself_and_its_parameter() {
    let registry = ValidatorRegistry::with_builtins();
    let rules = parse_rules("minLength:8,maxLength:2");
    let value = FieldValue::Text("abc".to_string());

    let verdict = evaluate(&registry, &rules, &value, &());

    assert_eq!(
        verdict,
        Verdict::Invalid {
            rule: "minLength".to_string(),
            parameter: Some("8".to_string()),
        }
    );
    assert_eq!(verdict.failing_rule(), Some("minLength"));
}

#[test]
fn test_unknown_rule_is_skipped_not_failed() {
    let registry = ValidatorRegistry::with_builtins();
    let rules = parse_rules("bogus,required");

    let value = FieldValue::Text("hello".to_string());
    assert!(evaluate(&registry, &rules, &value, &()).is_valid());

    // The rule after the unknown one still runs.
    let empty = FieldValue::Text(String::new());
    let verdict = evaluate(&registry, &rules, &empty, &());
    assert_eq!(verdict.failing_rule(), Some("required"));
}

#[test]
fn test_only_unknown_rules_yield_valid() {
    let registry = ValidatorRegistry::with_builtins();
    let rules = parse_rules("bogus,alsoBogus:3");
    let empty = FieldValue::Text(String::new());

    assert!(evaluate(&registry, &rules, &empty, &()).is_valid());
}

#[test]
fn test_empty_rule_sequence_is_valid() {
    let registry = ValidatorRegistry::with_builtins();
    let empty = FieldValue::Text(String::new());

    assert!(evaluate(&registry, &[], &empty, &()).is_valid());
}

#[test]
fn test_evaluation_is_idempotent_on_unchanged_value() {
    let registry = ValidatorRegistry::with_builtins();
    let rules = parse_rules("required,minLength:8");
    let value = FieldValue::Text("short".to_string());

    let first = evaluate(&registry, &rules, &value, &());
    let second = evaluate(&registry, &rules, &value, &());

    assert_eq!(first, second);
}

#[test]
fn test_shadowed_builtin_is_observed() {
    let mut registry = ValidatorRegistry::with_builtins();
    registry.insert("required", |_| true);
    let rules = parse_rules("required");
    let empty = FieldValue::Text(String::new());

    assert!(evaluate(&registry, &rules, &empty, &()).is_valid());
}

#[test]
fn test_toggle_value_with_required() {
    let registry = ValidatorRegistry::with_builtins();
    let rules = parse_rules("required");

    assert!(evaluate(&registry, &rules, &FieldValue::Toggle(true), &()).is_valid());
    assert!(evaluate(&registry, &rules, &FieldValue::Toggle(false), &()).is_invalid());
}
