//! Form coordination: field ownership, trigger handling, whole-form runs.

use log::{debug, warn};

use crate::adapter::{FormAdapter, GroupState};
use crate::catalog::MessageCatalog;
use crate::config::{FormOptions, SubmitCallback};
use crate::engine;
use crate::error::FormError;
use crate::field::{FieldDescriptor, FieldKind, FieldValue};
use crate::rules::{CrossFieldLookup, RuleContext, ValidatorRegistry};
use crate::verdict::{FieldError, ValidationResult, Verdict};

/// Rule whose failure message substitutes the referenced field's label.
const MATCH_RULE: &str = "match";

/// Owns the validated fields of one form and drives their validation
/// lifecycle.
///
/// The coordinator holds its own registry and catalog (defaults merged with
/// the caller's overrides at construction), the ordered field list, and the
/// adapter to the host surface. Per field the state machine is
/// `Untouched → {Valid, Invalid}` on every evaluation request; nothing is
/// remembered beyond what is currently rendered.
///
/// It exposes one pure handler per trigger channel — [`field_changed`],
/// [`field_committed`] and [`submit`] — which the adapter calls from its own
/// event wiring.
///
/// [`field_changed`]: Self::field_changed
/// [`field_committed`]: Self::field_committed
/// [`submit`]: Self::submit
pub struct FormCoordinator<A: FormAdapter> {
    adapter: A,
    options: FormOptions,
    registry: ValidatorRegistry,
    catalog: MessageCatalog,
    fields: Vec<FieldDescriptor>,
    on_all_valid: Option<SubmitCallback>,
}

impl<A: FormAdapter> FormCoordinator<A> {
    /// Create a coordinator over a host surface.
    ///
    /// Custom validators and message overrides in `options` are drained into
    /// the registry and catalog here; they win over built-ins and defaults.
    pub fn new(adapter: A, mut options: FormOptions) -> Self {
        let mut registry = ValidatorRegistry::with_builtins();
        let mut catalog = MessageCatalog::with_defaults();

        for (rule, template) in options.messages.drain(..) {
            catalog.set(rule, template);
        }
        for (name, predicate, template) in options.validators.drain(..) {
            if let Some(template) = template {
                catalog.set(name.clone(), template);
            }
            registry.insert_boxed(name, predicate);
        }
        let on_all_valid = options.on_all_valid.take();

        Self {
            adapter,
            options,
            registry,
            catalog,
            fields: Vec::new(),
            on_all_valid,
        }
    }

    /// Register a validated field. Registration order is evaluation order.
    pub fn register_field(
        &mut self,
        name: impl Into<String>,
        kind: FieldKind,
        declaration: &str,
    ) -> Result<(), FormError> {
        let name = name.into();
        if self.fields.iter().any(|field| field.name() == name) {
            return Err(FormError::DuplicateField(name));
        }
        self.fields.push(FieldDescriptor::new(name, kind, declaration));
        Ok(())
    }

    /// Validate one field by name, rendering its group. Returns whether the
    /// field is valid.
    pub fn validate_field(&self, name: &str) -> Result<bool, FormError> {
        let field = self
            .fields
            .iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        Ok(self.run_field(field).is_none())
    }

    /// Validate every field in registration order.
    ///
    /// Never short-circuits across fields: each one is evaluated and its
    /// group rendered even when an earlier field already failed, so a
    /// submit attempt marks everything that is wrong at once.
    pub fn validate_all(&self) -> ValidationResult {
        let mut errors = Vec::new();
        for field in &self.fields {
            if let Some(error) = self.run_field(field) {
                errors.push(error);
            }
        }
        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }

    // ---------------------------------------------------------------------
    // Trigger channels (called by the adapter's event wiring)
    // ---------------------------------------------------------------------

    /// A field's value changed (keystroke-level). Validates it when
    /// `validate_on_input` is set.
    pub fn field_changed(&self, name: &str) {
        if self.options.validate_on_input {
            self.trigger(name);
        }
    }

    /// A field's value was committed (blur). Validates it when
    /// `validate_on_commit` is set.
    pub fn field_committed(&self, name: &str) {
        if self.options.validate_on_commit {
            self.trigger(name);
        }
    }

    /// A submit was attempted. Runs [`validate_all`](Self::validate_all); on
    /// success fires the `on_all_valid` callback and returns `true`. The
    /// adapter is expected to have suppressed the surface's default submit
    /// action either way.
    pub fn submit(&self) -> bool {
        let result = self.validate_all();
        if result.is_valid() {
            if let Some(callback) = &self.on_all_valid {
                callback();
            }
            true
        } else {
            false
        }
    }

    // ---------------------------------------------------------------------
    // Public mutation API
    // ---------------------------------------------------------------------

    /// Clear every field value and return all groups to their untouched
    /// rendering. No re-validation is performed.
    pub fn reset(&self) {
        self.adapter.clear_values();
        for field in &self.fields {
            if let Some(group) = self.adapter.field_group(field.name()) {
                self.adapter.render_group(&group, GroupState::Neutral);
            }
        }
    }

    /// Register a predicate, shadowing any existing rule of the same name.
    /// The next evaluation observes it immediately.
    pub fn add_validator<F>(&mut self, name: impl Into<String>, predicate: F)
    where
        F: Fn(&RuleContext<'_>) -> bool + Send + Sync + 'static,
    {
        self.registry.insert(name, predicate);
    }

    /// Register a predicate together with its message template.
    pub fn add_validator_with_message<F>(
        &mut self,
        name: impl Into<String>,
        predicate: F,
        template: impl Into<String>,
    ) where
        F: Fn(&RuleContext<'_>) -> bool + Send + Sync + 'static,
    {
        let name = name.into();
        self.catalog.set(name.clone(), template);
        self.registry.insert(name, predicate);
    }

    /// Override the message template for a rule.
    pub fn set_error_message(&mut self, rule: impl Into<String>, template: impl Into<String>) {
        self.catalog.set(rule, template);
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    /// The configuration this form was built with.
    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    /// The host surface adapter.
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Registered field names, in registration (= evaluation) order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(FieldDescriptor::name)
    }

    // ---------------------------------------------------------------------
    // Evaluation
    // ---------------------------------------------------------------------

    /// Evaluate a field and reflect the verdict onto its group.
    fn run_field(&self, field: &FieldDescriptor) -> Option<FieldError> {
        let group = self.adapter.field_group(field.name());

        // Clear the previously rendered state before evaluating.
        if let Some(group) = &group {
            self.adapter.render_group(group, GroupState::Neutral);
        }

        let value = self.snapshot(field);
        let lookup = AdapterLookup(&self.adapter);
        let verdict = engine::evaluate(&self.registry, field.rules(), &value, &lookup);

        match verdict {
            Verdict::Valid => {
                if let Some(group) = &group {
                    self.adapter.render_group(group, GroupState::Valid);
                }
                None
            }
            Verdict::Invalid { rule, parameter } => {
                let message = self.failure_message(&rule, parameter.as_deref());
                if let Some(group) = &group {
                    self.adapter.render_group(group, GroupState::Invalid);
                    self.adapter.set_group_message(group, &message);
                } else {
                    debug!("field {:?} has no group, skipping render", field.name());
                }
                Some(FieldError {
                    field: field.name().to_string(),
                    rule,
                    message,
                })
            }
        }
    }

    /// Read the field's current value through the adapter.
    fn snapshot(&self, field: &FieldDescriptor) -> FieldValue {
        match field.kind() {
            FieldKind::Text => FieldValue::Text(self.adapter.field_value(field.name())),
            FieldKind::Toggle => FieldValue::Toggle(self.adapter.field_checked(field.name())),
        }
    }

    /// Resolve and render the message for a failing rule.
    ///
    /// `match` failures substitute the referenced field's label when the
    /// adapter can discover a non-empty one; every other rule substitutes
    /// the raw parameter verbatim.
    fn failure_message(&self, rule: &str, parameter: Option<&str>) -> String {
        let substitution = parameter.map(|parameter| {
            if rule == MATCH_RULE {
                self.adapter
                    .field_label(parameter)
                    .filter(|label| !label.is_empty())
                    .unwrap_or_else(|| parameter.to_string())
            } else {
                parameter.to_string()
            }
        });
        self.catalog.render(rule, substitution.as_deref())
    }

    /// Validate a field from a trigger channel. Unknown names are logged and
    /// ignored so a miswired adapter cannot fault the form.
    fn trigger(&self, name: &str) {
        if let Err(error) = self.validate_field(name) {
            warn!("ignoring trigger: {error}");
        }
    }
}

/// Cross-field lookup over the adapter's surface, bound at evaluation time.
struct AdapterLookup<'a, A: FormAdapter>(&'a A);

impl<A: FormAdapter> CrossFieldLookup for AdapterLookup<'_, A> {
    fn peer_value(&self, identifier: &str) -> Option<String> {
        self.0
            .has_field(identifier)
            .then(|| self.0.field_value(identifier))
    }
}
