//! Tests for the form coordinator: whole-form runs, trigger channels,
//! rendering, and the live mutation API.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use formwork::adapter::{FormAdapter, GroupState, MemoryForm};
use formwork::config::FormOptions;
use formwork::error::FormError;
use formwork::field::FieldKind;
use formwork::form::FormCoordinator;

/// A three-field signup form sharing one in-memory surface.
fn signup_form() -> (MemoryForm, FormCoordinator<MemoryForm>) {
    let surface = MemoryForm::new();
    surface.add_text("email", "");
    surface.add_text("password", "");
    surface.add_text("confirm", "");

    let mut form = FormCoordinator::new(surface.clone(), FormOptions::new());
    form.register_field("email", FieldKind::Text, "required,email")
        .unwrap();
    form.register_field("password", FieldKind::Text, "required,password")
        .unwrap();
    form.register_field("confirm", FieldKind::Text, "required,match:password")
        .unwrap();
    (surface, form)
}

fn fill_valid(surface: &MemoryForm) {
    surface.set_value("email", "user@example.org");
    surface.set_value("password", "Passw0rd1");
    surface.set_value("confirm", "Passw0rd1");
}

/// Non-neutral renders for a group, i.e. actual verdict reflections.
fn verdicts(surface: &MemoryForm, name: &str) -> Vec<GroupState> {
    surface
        .state_history(name)
        .into_iter()
        .filter(|state| *state != GroupState::Neutral)
        .collect()
}

#[test]
fn test_validate_all_renders_every_field_despite_failures() {
    let (surface, form) = signup_form();
    surface.set_value("email", "nope");
    surface.set_value("password", "Passw0rd1");
    surface.set_value("confirm", "Passw0rd1");

    let result = form.validate_all();

    assert!(result.is_invalid());
    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.first_invalid_field(), Some("email"));

    // Every field was evaluated and rendered exactly once, failure or not.
    assert_eq!(verdicts(&surface, "email"), vec![GroupState::Invalid]);
    assert_eq!(verdicts(&surface, "password"), vec![GroupState::Valid]);
    assert_eq!(verdicts(&surface, "confirm"), vec![GroupState::Valid]);
}

#[test]
fn test_validate_all_is_valid_iff_no_field_fails() {
    let (surface, form) = signup_form();

    assert!(form.validate_all().is_invalid());

    fill_valid(&surface);
    assert!(form.validate_all().is_valid());
}

#[test]
fn test_errors_are_reported_in_registration_order() {
    let (_, form) = signup_form();

    let result = form.validate_all();
    let fields: Vec<&str> = result.errors().iter().map(|e| e.field.as_str()).collect();

    assert_eq!(fields, vec!["email", "password", "confirm"]);
}

#[test]
fn test_submit_fires_callback_only_when_all_valid() {
    let surface = MemoryForm::new();
    surface.add_text("email", "");

    let submissions = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&submissions);
    let options = FormOptions::new().on_all_valid(move || {
        counted.fetch_add(1, Ordering::SeqCst);
    });

    let mut form = FormCoordinator::new(surface.clone(), options);
    form.register_field("email", FieldKind::Text, "required,email")
        .unwrap();

    assert!(!form.submit());
    assert_eq!(submissions.load(Ordering::SeqCst), 0);

    surface.set_value("email", "user@example.org");
    assert!(form.submit());
    assert_eq!(submissions.load(Ordering::SeqCst), 1);
}

#[test]
fn test_match_failure_reports_its_parameter() {
    let (surface, form) = signup_form();
    fill_valid(&surface);
    surface.set_value("confirm", "Passw0rd2");

    let result = form.validate_all();

    assert_eq!(result.errors().len(), 1);
    let error = result.first_error().unwrap();
    assert_eq!(error.field, "confirm");
    assert_eq!(error.rule, "match");
    assert_eq!(error.message, "This field must match the password field");
}

#[test]
fn test_match_message_prefers_peer_label() {
    let (surface, form) = signup_form();
    fill_valid(&surface);
    surface.set_value("confirm", "different");
    surface.set_label("password", "Password");

    let result = form.validate_all();

    assert_eq!(
        result.first_error().unwrap().message,
        "This field must match the Password field"
    );
    assert_eq!(
        surface.message("confirm").as_deref(),
        Some("This field must match the Password field")
    );
}

#[test]
fn test_required_toggle_ignores_text_value() {
    let surface = MemoryForm::new();
    surface.add_toggle("terms", false);

    let mut form = FormCoordinator::new(surface.clone(), FormOptions::new());
    form.register_field("terms", FieldKind::Toggle, "required")
        .unwrap();

    assert!(!form.validate_field("terms").unwrap());
    assert_eq!(surface.state("terms"), GroupState::Invalid);

    surface.set_checked("terms", true);
    assert!(form.validate_field("terms").unwrap());
    assert_eq!(surface.state("terms"), GroupState::Valid);
}

#[test]
fn test_message_template_override_renders_exactly() {
    let surface = MemoryForm::new();
    surface.add_text("pin", "abc");

    let options = FormOptions::new().message("minLength", "needs {value} chars");
    let mut form = FormCoordinator::new(surface.clone(), options);
    form.register_field("pin", FieldKind::Text, "minLength:8")
        .unwrap();

    let result = form.validate_all();

    assert_eq!(result.first_error().unwrap().message, "needs 8 chars");
    assert_eq!(surface.message("pin").as_deref(), Some("needs 8 chars"));
}

#[test]
fn test_add_validator_is_observed_by_next_evaluation() {
    let surface = MemoryForm::new();
    surface.add_text("pin", "12345");

    let mut form = FormCoordinator::new(surface.clone(), FormOptions::new());
    form.register_field("pin", FieldKind::Text, "strongPin")
        .unwrap();

    // Unknown rule: skipped, field valid.
    assert!(form.validate_field("pin").unwrap());

    form.add_validator_with_message(
        "strongPin",
        |cx| cx.text().len() == 6 && cx.text().chars().all(|c| c.is_ascii_digit()),
        "A PIN has exactly six digits",
    );

    assert!(!form.validate_field("pin").unwrap());
    assert_eq!(
        surface.message("pin").as_deref(),
        Some("A PIN has exactly six digits")
    );

    surface.set_value("pin", "123456");
    assert!(form.validate_field("pin").unwrap());
}

#[test]
fn test_add_validator_shadows_builtin() {
    let surface = MemoryForm::new();
    surface.add_text("email", "");

    let mut form = FormCoordinator::new(surface.clone(), FormOptions::new());
    form.register_field("email", FieldKind::Text, "required")
        .unwrap();

    assert!(!form.validate_field("email").unwrap());

    form.add_validator("required", |_| true);
    assert!(form.validate_field("email").unwrap());
}

#[test]
fn test_custom_validator_from_options() {
    let surface = MemoryForm::new();
    surface.add_text("code", "ab");

    let options = FormOptions::new().validator_with_message(
        "evenLength",
        |cx| cx.text().len() % 2 == 0,
        "Needs an even number of characters",
    );
    let mut form = FormCoordinator::new(surface.clone(), options);
    form.register_field("code", FieldKind::Text, "evenLength")
        .unwrap();

    assert!(form.validate_field("code").unwrap());

    surface.set_value("code", "abc");
    assert!(!form.validate_field("code").unwrap());
    assert_eq!(
        surface.message("code").as_deref(),
        Some("Needs an even number of characters")
    );
}

#[test]
fn test_custom_validator_can_inspect_checked_state() {
    let surface = MemoryForm::new();
    surface.add_toggle("marketing", true);

    let options = FormOptions::new().validator_with_message(
        "unchecked",
        |cx| !cx.checked(),
        "Leave this box unchecked",
    );
    let mut form = FormCoordinator::new(surface.clone(), options);
    form.register_field("marketing", FieldKind::Toggle, "unchecked")
        .unwrap();

    assert!(!form.validate_field("marketing").unwrap());
    assert_eq!(
        surface.message("marketing").as_deref(),
        Some("Leave this box unchecked")
    );

    surface.set_checked("marketing", false);
    assert!(form.validate_field("marketing").unwrap());
}

#[test]
fn test_set_error_message_applies_live() {
    let (surface, mut form) = signup_form();

    form.set_error_message("required", "Fill this in");
    form.validate_all();

    assert_eq!(surface.message("email").as_deref(), Some("Fill this in"));
}

#[test]
fn test_unknown_rule_falls_back_to_generic_message() {
    let surface = MemoryForm::new();
    surface.add_text("code", "x");

    let mut form = FormCoordinator::new(surface.clone(), FormOptions::new());
    form.register_field("code", FieldKind::Text, "alwaysFails")
        .unwrap();
    form.add_validator("alwaysFails", |_| false);

    assert!(!form.validate_field("code").unwrap());
    assert_eq!(surface.message("code").as_deref(), Some("Invalid format"));
}

#[test]
fn test_reset_neutralizes_groups_without_evaluating() {
    let surface = MemoryForm::new();
    surface.add_text("email", "user@example.org");

    let evaluations = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&evaluations);
    let options = FormOptions::new().validator("counted", move |_| {
        counted.fetch_add(1, Ordering::SeqCst);
        true
    });

    let mut form = FormCoordinator::new(surface.clone(), options);
    form.register_field("email", FieldKind::Text, "counted")
        .unwrap();

    form.validate_all();
    assert_eq!(evaluations.load(Ordering::SeqCst), 1);
    assert_eq!(surface.state("email"), GroupState::Valid);

    form.reset();

    assert_eq!(surface.state("email"), GroupState::Neutral);
    assert_eq!(surface.field_value("email"), "");
    // No predicate ran during reset.
    assert_eq!(evaluations.load(Ordering::SeqCst), 1);
}

#[test]
fn test_missing_group_skips_render_but_still_gates() {
    let (surface, form) = signup_form();
    surface.detach_group("email");

    let result = form.validate_all();

    // The detached field still fails validation and gates the form.
    assert!(result.is_invalid());
    assert!(result.errors().iter().any(|e| e.field == "email"));

    // But nothing was rendered for it.
    assert!(surface.state_history("email").is_empty());
    assert!(surface.message("email").is_none());

    // Other fields rendered normally.
    assert!(!surface.state_history("password").is_empty());
}

#[test]
fn test_trigger_channels_respect_configuration() {
    let surface = MemoryForm::new();
    surface.add_text("email", "");

    let options = FormOptions::new().validate_on_input(false);
    let mut form = FormCoordinator::new(surface.clone(), options);
    form.register_field("email", FieldKind::Text, "required")
        .unwrap();

    form.field_changed("email");
    assert!(surface.state_history("email").is_empty());

    form.field_committed("email");
    assert_eq!(surface.state("email"), GroupState::Invalid);
}

#[test]
fn test_trigger_for_unknown_field_is_ignored() {
    let surface = MemoryForm::new();
    let form: FormCoordinator<MemoryForm> = FormCoordinator::new(surface, FormOptions::new());

    // Must not panic or render anything.
    form.field_changed("ghost");
    form.field_committed("ghost");
}

#[test]
fn test_first_failure_picks_the_message() {
    let surface = MemoryForm::new();
    surface.add_text("email", "a");

    let mut form = FormCoordinator::new(surface.clone(), FormOptions::new());
    form.register_field("email", FieldKind::Text, "required,minLength:5,email")
        .unwrap();

    form.validate_all();

    // minLength fails before email gets a say.
    assert_eq!(
        surface.message("email").as_deref(),
        Some("This field must contain at least 5 characters")
    );
}

#[test]
fn test_registration_errors() {
    let surface = MemoryForm::new();
    surface.add_text("email", "");

    let mut form = FormCoordinator::new(surface, FormOptions::new());
    form.register_field("email", FieldKind::Text, "required")
        .unwrap();

    assert_eq!(
        form.register_field("email", FieldKind::Text, "email"),
        Err(FormError::DuplicateField("email".to_string()))
    );
    assert_eq!(
        form.validate_field("ghost"),
        Err(FormError::UnknownField("ghost".to_string()))
    );
}

#[test]
fn test_field_names_preserve_registration_order() {
    let (_, form) = signup_form();
    let names: Vec<&str> = form.field_names().collect();
    assert_eq!(names, vec!["email", "password", "confirm"]);
}
