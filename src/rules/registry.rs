//! Validator registry and the predicate evaluation context.

use std::collections::HashMap;

use crate::field::FieldValue;

/// Capability to resolve another field's current value by identifier.
///
/// Needed only by cross-field rules such as `match`. Resolution happens at
/// evaluation time through the owning form's adapter, never via stored
/// references between fields.
pub trait CrossFieldLookup {
    /// Current text value of the field with this identifier, if it exists.
    fn peer_value(&self, identifier: &str) -> Option<String>;
}

/// A lookup that resolves nothing. Suits forms without cross-field rules.
impl CrossFieldLookup for () {
    fn peer_value(&self, _identifier: &str) -> Option<String> {
        None
    }
}

/// Map-backed lookup, handy for tests and detached evaluation.
impl CrossFieldLookup for HashMap<String, String> {
    fn peer_value(&self, identifier: &str) -> Option<String> {
        self.get(identifier).cloned()
    }
}

/// Everything a predicate may inspect during one rule evaluation.
pub struct RuleContext<'a> {
    value: &'a FieldValue,
    parameter: Option<&'a str>,
    lookup: &'a dyn CrossFieldLookup,
}

impl<'a> RuleContext<'a> {
    /// Bind a context to a field value, a raw rule parameter, and a
    /// cross-field lookup.
    pub fn new(
        value: &'a FieldValue,
        parameter: Option<&'a str>,
        lookup: &'a dyn CrossFieldLookup,
    ) -> Self {
        Self {
            value,
            parameter,
            lookup,
        }
    }

    /// The field's current value snapshot.
    pub fn value(&self) -> &FieldValue {
        self.value
    }

    /// The field's current text (empty for toggles).
    pub fn text(&self) -> &str {
        self.value.text()
    }

    /// The field's checked state (false for text fields).
    pub fn checked(&self) -> bool {
        self.value.checked()
    }

    /// The raw rule parameter, if one was declared.
    pub fn parameter(&self) -> Option<&str> {
        self.parameter
    }

    /// Resolve another field's current value by identifier.
    pub fn peer_value(&self, identifier: &str) -> Option<String> {
        self.lookup.peer_value(identifier)
    }
}

/// A named validation predicate.
///
/// Predicates are total over their inputs: any internal inability to
/// evaluate maps to `false` (fail closed), never a fault. They must not
/// suspend; evaluation is synchronous by contract.
pub type Predicate = Box<dyn Fn(&RuleContext<'_>) -> bool + Send + Sync>;

/// Live table of rule name → predicate.
///
/// Mutable for the lifetime of its owning coordinator: new entries may be
/// added and built-ins shadowed at any time. The next evaluation observes
/// the change.
pub struct ValidatorRegistry {
    entries: HashMap<String, Predicate>,
}

impl ValidatorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create a registry with every built-in rule installed.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        super::builtins::install(&mut registry);
        registry
    }

    /// Register a predicate under a name, shadowing any existing entry of
    /// the same name (built-ins included).
    pub fn insert<F>(&mut self, name: impl Into<String>, predicate: F)
    where
        F: Fn(&RuleContext<'_>) -> bool + Send + Sync + 'static,
    {
        self.entries.insert(name.into(), Box::new(predicate));
    }

    /// Register an already-boxed predicate.
    pub fn insert_boxed(&mut self, name: impl Into<String>, predicate: Predicate) {
        self.entries.insert(name.into(), predicate);
    }

    /// Look up the predicate registered under a name.
    pub fn get(&self, name: &str) -> Option<&Predicate> {
        self.entries.get(name)
    }

    /// Whether a name resolves to a predicate.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered predicates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
