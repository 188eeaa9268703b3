//! Error message catalog and template rendering.

use std::collections::HashMap;

/// Placeholder substituted into message templates.
const PLACEHOLDER: &str = "{value}";

/// Catalog key of the generic fallback template.
const FALLBACK_RULE: &str = "custom";

const GENERIC_TEMPLATE: &str = "Invalid format";

/// Default message table, one entry per built-in rule plus the generic
/// fallback.
const DEFAULTS: &[(&str, &str)] = &[
    ("required", "This field is required"),
    ("email", "Please enter a valid email address"),
    ("minLength", "This field must contain at least {value} characters"),
    ("maxLength", "This field must not exceed {value} characters"),
    ("min", "The minimum value is {value}"),
    ("max", "The maximum value is {value}"),
    ("number", "Please enter a valid number"),
    ("alphanumeric", "This field may only contain letters and digits"),
    (
        "password",
        "The password must contain at least 8 characters, including an uppercase letter, a lowercase letter and a digit",
    ),
    ("match", "This field must match the {value} field"),
    ("phone", "Please enter a valid phone number"),
    ("url", "Please enter a valid URL"),
    ("date", "Please enter a valid date"),
    (FALLBACK_RULE, GENERIC_TEMPLATE),
];

/// Live table of rule name → message template.
///
/// Templates may contain a single `{value}` placeholder, filled at render
/// time with the failing rule's parameter (or, for `match`, the referenced
/// field's label). Looking up a rule without an entry falls back to the
/// generic `custom` template.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    templates: HashMap<String, String>,
}

impl MessageCatalog {
    /// Create a catalog pre-populated with the default template for every
    /// built-in rule.
    pub fn with_defaults() -> Self {
        let mut templates = HashMap::new();
        for (rule, template) in DEFAULTS {
            templates.insert((*rule).to_string(), (*template).to_string());
        }
        Self { templates }
    }

    /// Override (or add) the template for a rule.
    pub fn set(&mut self, rule: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(rule.into(), template.into());
    }

    /// The template for a rule, falling back to the generic `custom` entry.
    pub fn template(&self, rule: &str) -> &str {
        self.templates
            .get(rule)
            .or_else(|| self.templates.get(FALLBACK_RULE))
            .map(String::as_str)
            .unwrap_or(GENERIC_TEMPLATE)
    }

    /// Render the message for a rule.
    ///
    /// The `{value}` placeholder is substituted once when a substitution
    /// source exists; with none, the template is returned untouched.
    pub fn render(&self, rule: &str, substitution: Option<&str>) -> String {
        let template = self.template(rule);
        match substitution {
            Some(text) => template.replacen(PLACEHOLDER, text, 1),
            None => template.to_string(),
        }
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}
