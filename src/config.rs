//! Layered form configuration.

use crate::rules::{Predicate, RuleContext};

/// Success callback, invoked when a submit attempt finds every field valid.
pub type SubmitCallback = Box<dyn Fn() + Send + Sync>;

/// Caller-facing configuration for one form.
///
/// Merged over defaults at coordinator construction and never consulted from
/// ambient scope afterwards: message overrides and custom validators are
/// drained into the coordinator's catalog and registry, caller entries
/// winning over defaults and built-ins.
///
/// The class names, message-slot selector and animation duration are
/// advisory hints for the adapter; the core does not enforce them.
pub struct FormOptions {
    /// Style class an adapter applies to a group rendered `Invalid`.
    pub error_class: String,
    /// Style class for a group rendered `Valid`.
    pub success_class: String,
    /// Selector hint for the message slot inside a group.
    pub message_slot: String,
    /// Advisory duration for state-transition animations, in milliseconds.
    pub animation_ms: u64,
    /// Validate a field on every value change.
    pub validate_on_input: bool,
    /// Validate a field when its value is committed (blur).
    pub validate_on_commit: bool,

    pub(crate) messages: Vec<(String, String)>,
    pub(crate) validators: Vec<(String, Predicate, Option<String>)>,
    pub(crate) on_all_valid: Option<SubmitCallback>,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            error_class: "error".to_string(),
            success_class: "success".to_string(),
            message_slot: "error-message".to_string(),
            animation_ms: 300,
            validate_on_input: true,
            validate_on_commit: true,
            messages: Vec::new(),
            validators: Vec::new(),
            on_all_valid: None,
        }
    }
}

impl FormOptions {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style class for invalid groups.
    pub fn error_class(mut self, class: impl Into<String>) -> Self {
        self.error_class = class.into();
        self
    }

    /// Set the style class for valid groups.
    pub fn success_class(mut self, class: impl Into<String>) -> Self {
        self.success_class = class.into();
        self
    }

    /// Set the selector hint for group message slots.
    pub fn message_slot(mut self, selector: impl Into<String>) -> Self {
        self.message_slot = selector.into();
        self
    }

    /// Set the advisory animation duration in milliseconds.
    pub fn animation_ms(mut self, ms: u64) -> Self {
        self.animation_ms = ms;
        self
    }

    /// Enable or disable validation on value changes.
    pub fn validate_on_input(mut self, on: bool) -> Self {
        self.validate_on_input = on;
        self
    }

    /// Enable or disable validation on value commits (blur).
    pub fn validate_on_commit(mut self, on: bool) -> Self {
        self.validate_on_commit = on;
        self
    }

    /// Override the message template for a rule.
    pub fn message(mut self, rule: impl Into<String>, template: impl Into<String>) -> Self {
        self.messages.push((rule.into(), template.into()));
        self
    }

    /// Register a custom validator, shadowing any built-in of the same name.
    pub fn validator<F>(mut self, name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&RuleContext<'_>) -> bool + Send + Sync + 'static,
    {
        self.validators.push((name.into(), Box::new(predicate), None));
        self
    }

    /// Register a custom validator together with its message template.
    pub fn validator_with_message<F>(
        mut self,
        name: impl Into<String>,
        predicate: F,
        template: impl Into<String>,
    ) -> Self
    where
        F: Fn(&RuleContext<'_>) -> bool + Send + Sync + 'static,
    {
        self.validators
            .push((name.into(), Box::new(predicate), Some(template.into())));
        self
    }

    /// Invoke a callback when a submit attempt finds every field valid.
    pub fn on_all_valid<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_all_valid = Some(Box::new(callback));
        self
    }
}
