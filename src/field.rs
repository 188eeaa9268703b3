//! Field descriptors and value snapshots.

use crate::rules::{RuleSpec, parse_rules};

/// What kind of input a field is bound to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-text input, validated through its string value.
    #[default]
    Text,
    /// Boolean-like input (checkbox, switch), validated through its checked
    /// state.
    Toggle,
}

/// Snapshot of a field's current state, read through the adapter at
/// evaluation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Current text of a [`FieldKind::Text`] field.
    Text(String),
    /// Checked state of a [`FieldKind::Toggle`] field.
    Toggle(bool),
}

impl FieldValue {
    /// The text form of the value. A toggle has no text; rules that inspect
    /// text see it as empty.
    pub fn text(&self) -> &str {
        match self {
            Self::Text(value) => value,
            Self::Toggle(_) => "",
        }
    }

    /// The checked state. A text field is never checked.
    pub fn checked(&self) -> bool {
        matches!(self, Self::Toggle(true))
    }
}

/// One validated input: a stable identifier, its kind, and its parsed rule
/// sequence.
///
/// The rule sequence is parsed once at registration and is immutable
/// thereafter; the engine is re-run against the same descriptor as the
/// underlying value changes.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    name: String,
    kind: FieldKind,
    rules: Vec<RuleSpec>,
}

impl FieldDescriptor {
    /// Create a descriptor from a raw rule declaration such as
    /// `"required,minLength:8"`.
    pub fn new(name: impl Into<String>, kind: FieldKind, declaration: &str) -> Self {
        Self {
            name: name.into(),
            kind,
            rules: parse_rules(declaration),
        }
    }

    /// The field's stable identifier, used for cross-field lookups.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The kind of input this field is bound to.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The parsed rule sequence, in declaration order.
    pub fn rules(&self) -> &[RuleSpec] {
        &self.rules
    }
}
