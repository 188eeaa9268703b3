/// Outcome of evaluating one field's full rule sequence.
///
/// Transient: produced per evaluation call, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Verdict {
    /// Every rule passed (or was skipped).
    #[default]
    Valid,
    /// The first failing rule, with its raw parameter.
    Invalid {
        /// Name of the failing rule.
        rule: String,
        /// Raw parameter the rule was declared with.
        parameter: Option<String>,
    },
}

impl Verdict {
    /// Check if every rule passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if a rule failed.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Name of the failing rule, if any.
    pub fn failing_rule(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid { rule, .. } => Some(rule),
        }
    }
}

/// Information about a single field validation failure.
#[derive(Debug, Clone)]
pub struct FieldError {
    /// Field identifier (registration name).
    pub field: String,
    /// Name of the rule that failed first.
    pub rule: String,
    /// Rendered, human-readable message.
    pub message: String,
}

/// Result of validating every field on a form.
#[derive(Debug, Clone, Default)]
pub enum ValidationResult {
    /// All fields passed validation.
    #[default]
    Valid,
    /// One or more fields failed validation.
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get all validation errors.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Get the first validation error (if any).
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }

    /// Identifier of the first invalid field (for focusing).
    pub fn first_invalid_field(&self) -> Option<&str> {
        self.first_error().map(|e| e.field.as_str())
    }
}
