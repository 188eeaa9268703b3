//! Built-in validation rules.
//!
//! Two quirks here are load-bearing compatibility surface and must stay as
//! they are: an unparsable numeric parameter makes the rule always fail, and
//! `phone` passes on an empty value (a phone field is implicitly optional
//! unless paired with `required`).

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::debug;
use regex::Regex;
use url::Url;

use super::registry::ValidatorRegistry;
use crate::field::FieldValue;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";
const PHONE_PATTERN: &str = r"^(?:\+\d{1,3}\s?)?(?:\(\d{1,4}\)\s?)?(?:[0-9]\s?){6,14}[0-9]$";

/// Install every built-in rule into a registry.
pub(crate) fn install(registry: &mut ValidatorRegistry) {
    let email = Regex::new(EMAIL_PATTERN).expect("email pattern");
    let phone = Regex::new(PHONE_PATTERN).expect("phone pattern");

    registry.insert("required", |cx| match cx.value() {
        FieldValue::Toggle(checked) => *checked,
        FieldValue::Text(value) => !value.trim().is_empty(),
    });

    registry.insert("email", move |cx| email.is_match(cx.text().trim()));

    registry.insert("minLength", |cx| match parse_int(cx.parameter()) {
        Some(min) => char_count(cx.text()) >= min,
        None => false,
    });

    registry.insert("maxLength", |cx| match parse_int(cx.parameter()) {
        Some(max) => char_count(cx.text()) <= max,
        None => false,
    });

    registry.insert("min", |cx| {
        match (parse_float(Some(cx.text())), parse_float(cx.parameter())) {
            (Some(value), Some(min)) => value >= min,
            _ => false,
        }
    });

    registry.insert("max", |cx| {
        match (parse_float(Some(cx.text())), parse_float(cx.parameter())) {
            (Some(value), Some(max)) => value <= max,
            _ => false,
        }
    });

    registry.insert("number", |cx| {
        let trimmed = cx.text().trim();
        !trimmed.is_empty() && trimmed.parse::<f64>().is_ok_and(f64::is_finite)
    });

    registry.insert("alphanumeric", |cx| {
        let value = cx.text();
        !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric())
    });

    registry.insert("password", |cx| {
        let value = cx.text();
        value.chars().filter(|c| !c.is_whitespace()).count() >= 8
            && value.chars().any(|c| c.is_ascii_lowercase())
            && value.chars().any(|c| c.is_ascii_uppercase())
            && value.chars().any(|c| c.is_ascii_digit())
    });

    registry.insert("match", |cx| {
        let Some(target) = cx.parameter() else {
            return false;
        };
        match cx.peer_value(target) {
            Some(peer) => peer == cx.text(),
            None => {
                debug!("match target {target:?} not found, failing closed");
                false
            }
        }
    });

    registry.insert("phone", move |cx| {
        let value = cx.text();
        value.is_empty() || phone.is_match(value.trim())
    });

    registry.insert("url", |cx| Url::parse(cx.text().trim()).is_ok());

    registry.insert("date", |cx| parses_as_date(cx.text().trim()));
}

/// Base-10 integer rule parameter. `None` on anything unparsable.
fn parse_int(parameter: Option<&str>) -> Option<i64> {
    parameter?.trim().parse().ok()
}

/// Floating-point reading of a parameter or field value.
fn parse_float(text: Option<&str>) -> Option<f64> {
    text?.trim().parse().ok()
}

/// Length in characters, widened for comparison against signed parameters.
fn char_count(text: &str) -> i64 {
    text.chars().count() as i64
}

/// Calendar date/time formats accepted by the `date` rule.
fn parses_as_date(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    DateTime::parse_from_rfc3339(text).is_ok()
        || DateTime::parse_from_rfc2822(text).is_ok()
        || NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S").is_ok()
        || NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok()
        || NaiveDate::parse_from_str(text, "%m/%d/%Y").is_ok()
}
