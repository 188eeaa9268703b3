//! Ordered rule evaluation with first-failure short-circuit.

use log::warn;

use crate::field::FieldValue;
use crate::rules::{CrossFieldLookup, RuleContext, RuleSpec, ValidatorRegistry};
use crate::verdict::Verdict;

/// Evaluate a field's cached rule sequence against a registry.
///
/// Rules run in declaration order. A name absent from the registry is logged
/// and skipped (a no-op, never a failure). The first predicate returning
/// `false` stops evaluation immediately and later rules are never run; this
/// is what determines the single error message shown when several rules
/// would fail.
pub fn evaluate(
    registry: &ValidatorRegistry,
    rules: &[RuleSpec],
    value: &FieldValue,
    lookup: &dyn CrossFieldLookup,
) -> Verdict {
    for rule in rules {
        let Some(predicate) = registry.get(&rule.name) else {
            warn!("validator {:?} is not registered, skipping", rule.name);
            continue;
        };

        let context = RuleContext::new(value, rule.parameter.as_deref(), lookup);
        if !predicate(&context) {
            return Verdict::Invalid {
                rule: rule.name.clone(),
                parameter: rule.parameter.clone(),
            };
        }
    }

    Verdict::Valid
}
