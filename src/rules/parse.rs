//! Rule declaration parsing.

/// One named rule with its optional raw parameter.
///
/// The parameter is untyped text; each validator interprets it itself (as an
/// integer, a float, or a field identifier).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    /// Rule name as declared, e.g. `"minLength"`.
    pub name: String,
    /// Raw parameter text after the first `:`, if any.
    pub parameter: Option<String>,
}

impl RuleSpec {
    /// Create a rule spec without a parameter.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameter: None,
        }
    }

    /// Create a rule spec with a parameter.
    pub fn with_parameter(name: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameter: Some(parameter.into()),
        }
    }
}

/// Parse a raw declaration string into an ordered rule sequence.
///
/// Rules split on `,`, name and parameter on the first `:`; surrounding
/// whitespace is trimmed on both sides. A rule without `:` has no parameter.
/// An empty declaration yields an empty sequence (the field is always valid)
/// and empty segments between commas are dropped.
///
/// Malformed syntax never raises an error here: at worst an unrecognized
/// name is produced and skipped with a diagnostic at evaluation time, so a
/// typo in one declaration cannot block the rest of the form.
pub fn parse_rules(declaration: &str) -> Vec<RuleSpec> {
    declaration
        .split(',')
        .filter_map(|segment| {
            let segment = segment.trim();
            if segment.is_empty() {
                return None;
            }
            let spec = match segment.split_once(':') {
                Some((name, parameter)) => RuleSpec {
                    name: name.trim().to_string(),
                    parameter: Some(parameter.trim().to_string()),
                },
                None => RuleSpec {
                    name: segment.to_string(),
                    parameter: None,
                },
            };
            Some(spec)
        })
        .collect()
}
