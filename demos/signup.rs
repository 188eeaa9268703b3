//! Signup Form Demo
//!
//! Drives a signup form through the in-memory surface: a submission with
//! bad values first, then a corrected one. Validation diagnostics (unknown
//! rules, missing match targets) go to formwork.log.
//!
//! Run with: cargo run --example signup

use std::fs::File;

use formwork::prelude::*;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

fn main() {
    if let Ok(log_file) = File::create("formwork.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let surface = MemoryForm::new();
    surface.add_text("email", "not-an-email");
    surface.add_text("password", "weak");
    surface.add_text("confirm", "weaker");
    surface.add_text("phone", "");
    surface.add_toggle("terms", false);
    surface.set_label("password", "Password");

    let options = FormOptions::new()
        .message("required", "Don't leave this empty")
        .validator_with_message(
            "strongPin",
            |cx| cx.text().len() == 6 && cx.text().chars().all(|c| c.is_ascii_digit()),
            "A PIN has exactly six digits",
        )
        .on_all_valid(|| println!("  -> signup accepted, submitting"));

    let mut form = FormCoordinator::new(surface.clone(), options);
    form.register_field("email", FieldKind::Text, "required,email")
        .unwrap();
    form.register_field("password", FieldKind::Text, "required,password")
        .unwrap();
    form.register_field("confirm", FieldKind::Text, "required,match:password")
        .unwrap();
    form.register_field("phone", FieldKind::Text, "phone")
        .unwrap();
    form.register_field("terms", FieldKind::Toggle, "required")
        .unwrap();

    println!("First attempt:");
    report(&form);
    assert!(!form.submit());

    println!();
    println!("Corrected attempt:");
    surface.set_value("email", "user@example.org");
    surface.set_value("password", "Passw0rd1");
    surface.set_value("confirm", "Passw0rd1");
    surface.set_checked("terms", true);
    report(&form);
    assert!(form.submit());
}

/// Print each field's verdict the way a styling adapter would render it:
/// the configured state class plus the message slot text.
fn report(form: &FormCoordinator<MemoryForm>) {
    let result = form.validate_all();
    let surface = form.adapter();
    for name in form.field_names() {
        match surface.state(name) {
            GroupState::Valid => {
                println!("  {name:10} .{}", form.options().success_class);
            }
            GroupState::Invalid => println!(
                "  {name:10} .{} {}",
                form.options().error_class,
                surface.message(name).unwrap_or_default()
            ),
            GroupState::Neutral => println!("  {name:10} untouched"),
        }
    }
    if let Some(first) = result.first_invalid_field() {
        println!("  (focus goes to {first})");
    }
}
